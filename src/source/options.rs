//! Loading options and configuration.

use super::cleanup::CleanupOptions;

/// Extensions accepted by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["json", "md", "markdown", "txt"];

/// Options for validating and loading documents.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Maximum file size in MB
    pub max_file_size_mb: u64,

    /// Accepted extensions, lowercase without the dot
    pub supported_extensions: Vec<String>,

    /// Whether to load tables
    pub extract_tables: bool,

    /// Cleanup applied to paragraph and cell text
    pub cleanup: CleanupOptions,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum file size in MB.
    pub fn with_max_file_size(mut self, mb: u64) -> Self {
        self.max_file_size_mb = mb;
        self
    }

    /// Replace the accepted extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.supported_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Enable or disable table loading.
    pub fn with_tables(mut self, extract: bool) -> Self {
        self.extract_tables = extract;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Whether `extension` is accepted (case-insensitive, leading dot ignored).
    pub fn accepts(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.').to_lowercase();
        self.supported_extensions.iter().any(|e| *e == extension)
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            supported_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            extract_tables: true,
            cleanup: CleanupOptions::default(),
        }
    }
}
