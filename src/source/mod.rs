//! Document sources: everything that turns files into a [`DocumentModel`].
//!
//! Each input format is handled by a [`DocumentSource`]; a [`SourceRegistry`]
//! maps file extensions to sources and dispatches loads after validating the
//! file.
//!
//! # Example
//!
//! ```no_run
//! use wordscope::source::{LoadOptions, SourceRegistry};
//! use std::path::Path;
//!
//! fn main() -> wordscope::Result<()> {
//!     let registry = SourceRegistry::with_defaults();
//!     let doc = registry.load(Path::new("thesis.md"), &LoadOptions::default())?;
//!     println!("{} paragraphs", doc.paragraph_count());
//!     Ok(())
//! }
//! ```

pub mod cleanup;
pub mod detect;
mod markdown;
mod options;
mod snapshot;
mod validate;

pub use cleanup::{clean_text, CleanupOptions, TextCleaner};
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use markdown::{parse_heading, MarkdownSource};
pub use options::{LoadOptions, DEFAULT_EXTENSIONS};
pub use snapshot::{RawDocument, RawParagraph, RawTable, SnapshotSource};
pub use validate::{extension_of, file_hash, format_bytes, validate_file, FileInfo};

use crate::error::{Error, Result};
use crate::model::DocumentModel;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for document sources.
///
/// Implement this trait to add support for a new input format.
pub trait DocumentSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Get the supported file extensions for this source.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["md"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Load a document from bytes.
    fn load_bytes(&self, data: &[u8], options: &LoadOptions) -> Result<DocumentModel>;

    /// Load a document from a file.
    fn load(&self, path: &Path, options: &LoadOptions) -> Result<DocumentModel> {
        let data = std::fs::read(path)?;
        self.load_bytes(&data, options)
            .map_err(|e| e.with_path(&path.display().to_string()))
    }

    /// Check if this source supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.trim_start_matches('.').to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry of document sources keyed by extension.
pub struct SourceRegistry {
    by_extension: HashMap<String, Arc<dyn DocumentSource>>,
    by_name: HashMap<String, Arc<dyn DocumentSource>>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_extension: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the snapshot and Markdown sources.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SnapshotSource::new()));
        registry.register(Arc::new(MarkdownSource::new()));
        registry
    }

    /// Register a source for all of its extensions.
    pub fn register(&mut self, source: Arc<dyn DocumentSource>) {
        for ext in source.supported_extensions() {
            self.by_extension.insert(ext.to_lowercase(), source.clone());
        }
        self.by_name.insert(source.name().to_lowercase(), source);
    }

    /// Get a source by file extension.
    pub fn find(&self, ext: &str) -> Option<Arc<dyn DocumentSource>> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        self.by_extension.get(&ext).cloned()
    }

    /// Get a source by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentSource>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.find(ext).is_some()
    }

    /// All registered extensions, sorted.
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.by_extension.keys().cloned().collect();
        extensions.sort();
        extensions
    }

    /// Validate and load a file.
    pub fn load(&self, path: &Path, options: &LoadOptions) -> Result<DocumentModel> {
        let info = validate_file(path, options)?;
        self.load_validated(path, &info.extension, options)
    }

    /// Load a file that has already been validated.
    pub fn load_validated(&self, path: &Path, extension: &str, options: &LoadOptions) -> Result<DocumentModel> {
        let source = self.find(extension).ok_or_else(|| Error::UnsupportedFormat {
            path: path.display().to_string(),
            extension: extension.to_string(),
            supported: self.extensions(),
        })?;

        log::info!("Loading '{}' with the {} source", path.display(), source.name());
        let document = source
            .load(path, options)
            .map_err(|e| e.with_path(&path.display().to_string()))?;
        log::debug!(
            "Loaded {} paragraphs and {} tables",
            document.paragraphs.len(),
            document.tables.len()
        );
        Ok(document)
    }

    /// Load in-memory data, detecting its format from the content.
    pub fn load_bytes(&self, data: &[u8], options: &LoadOptions) -> Result<DocumentModel> {
        let format = detect_format_from_bytes(data)?;
        let source = self.find(format.extension()).ok_or(Error::UnknownFormat)?;
        source.load_bytes(data, options)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
