//! # wordscope
//!
//! Structural and statistical analysis of word-processor style documents.
//!
//! A document is loaded into an immutable [`DocumentModel`] (paragraphs with
//! style names, tables and metadata), then analyzed into a [`Report`]:
//! document statistics, chapters segmented from headings, paragraphs and
//! tables distributed across chapters, and a summary with quality indicators.
//! Reports render to JSON, Markdown and plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordscope::{analyze_file, render};
//!
//! fn main() -> wordscope::Result<()> {
//!     let report = analyze_file("thesis.md")?;
//!     println!("{} chapters", report.chapters().len());
//!
//!     let markdown = render::to_markdown(&report, &render::RenderOptions::default())?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Document sources**: JSON snapshots and Markdown, behind the [`DocumentSource`] trait
//! - **Statistics**: word, sentence and character counts, page and reading-time estimates
//! - **Chapters**: level 1-2 headings open chapters, deeper headings become subsections
//! - **Reports**: serializable with serde, rendered to JSON, Markdown and text

pub mod analysis;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

pub use analysis::{
    AnalysisOptions, AnalysisStatus, Analyzer, DocumentStats, Pipeline,
    ProcessingLog, Report, Summary,
};
pub use error::{Error, Result};
pub use model::{
    BlockKind, Chapter, DocumentModel, Heading, Metadata, Paragraph, Subsection, Table, TextFormat,
};
pub use render::{JsonFormat, RenderOptions};
pub use source::{
    detect_format_from_bytes, detect_format_from_path, DocumentSource, FileInfo, InputFormat,
    LoadOptions, SourceRegistry,
};

use std::path::Path;

/// Load a file into a document model with default options.
///
/// The file is validated first (existence, extension, size).
///
/// # Example
///
/// ```no_run
/// use wordscope::load_file;
///
/// let doc = load_file("notes.md").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<DocumentModel> {
    SourceRegistry::with_defaults().load(path.as_ref(), &LoadOptions::default())
}

/// Validate, load and analyze a file with default options.
///
/// Returns an error when the file cannot be loaded; use
/// [`Analyzer::analyze_path`] to get a failed report instead.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    Analyzer::default().try_analyze_path(path)
}

/// Validate, load and analyze a file with custom options.
///
/// # Example
///
/// ```no_run
/// use wordscope::{analyze_file_with_options, AnalysisOptions, LoadOptions};
///
/// let load = LoadOptions::new().with_max_file_size(10);
/// let analysis = AnalysisOptions::new().with_words_per_page(300);
/// let report = analyze_file_with_options("report.json", load, analysis).unwrap();
/// ```
pub fn analyze_file_with_options<P: AsRef<Path>>(
    path: P,
    load_options: LoadOptions,
    analysis_options: AnalysisOptions,
) -> Result<Report> {
    Analyzer::new(load_options, analysis_options).try_analyze_path(path)
}

/// Analyze an already-loaded document with default options.
pub fn analyze_document(document: &DocumentModel) -> Report {
    Pipeline::default().run(document, None, "", &mut ProcessingLog::new())
}

/// Analyze a file and render the report as JSON.
///
/// # Example
///
/// ```no_run
/// use wordscope::{to_json, JsonFormat};
///
/// let json = to_json("thesis.md", JsonFormat::Pretty).unwrap();
/// std::fs::write("analysis.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let report = analyze_file(path)?;
    render::to_json(&report, format)
}

/// Analyze a file and render the report as Markdown.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let report = analyze_file(path)?;
    render::to_markdown(&report, &RenderOptions::default())
}

/// Builder for loading, analyzing and rendering documents.
///
/// # Example
///
/// ```no_run
/// use wordscope::Wordscope;
///
/// let markdown = Wordscope::new()
///     .with_max_file_size(20)
///     .with_words_per_page(300)
///     .with_frontmatter()
///     .analyze("thesis.md")?
///     .to_markdown()?;
/// # Ok::<(), wordscope::Error>(())
/// ```
pub struct Wordscope {
    load_options: LoadOptions,
    analysis_options: AnalysisOptions,
    render_options: RenderOptions,
}

impl Wordscope {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            load_options: LoadOptions::default(),
            analysis_options: AnalysisOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Replace the load options.
    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    /// Replace the analysis options.
    pub fn with_analysis_options(mut self, options: AnalysisOptions) -> Self {
        self.analysis_options = options;
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the maximum file size in MB.
    pub fn with_max_file_size(mut self, mb: u64) -> Self {
        self.load_options = self.load_options.with_max_file_size(mb);
        self
    }

    /// Skip table extraction.
    pub fn without_tables(mut self) -> Self {
        self.load_options = self.load_options.with_tables(false);
        self
    }

    /// Set the words-per-page estimate.
    pub fn with_words_per_page(mut self, words: usize) -> Self {
        self.analysis_options = self.analysis_options.with_words_per_page(words);
        self
    }

    /// Set the reading speed in words per minute.
    pub fn with_words_per_minute(mut self, words: usize) -> Self {
        self.analysis_options = self.analysis_options.with_words_per_minute(words);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Validate, load and analyze a file.
    pub fn analyze<P: AsRef<Path>>(self, path: P) -> Result<AnalysisResult> {
        let report = Analyzer::new(self.load_options, self.analysis_options).try_analyze_path(path)?;
        Ok(AnalysisResult {
            report,
            render_options: self.render_options,
        })
    }

    /// Analyze in-memory data whose format is given by `extension`.
    pub fn analyze_bytes(self, data: &[u8], extension: &str) -> Result<AnalysisResult> {
        let report =
            Analyzer::new(self.load_options, self.analysis_options).analyze_bytes(data, extension)?;
        Ok(AnalysisResult {
            report,
            render_options: self.render_options,
        })
    }
}

impl Default for Wordscope {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of analyzing a document.
pub struct AnalysisResult {
    /// The analysis report
    pub report: Report,
    /// Render options to use
    render_options: RenderOptions,
}

impl AnalysisResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.report, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.report, &self.render_options)
    }

    /// Get the report.
    pub fn report(&self) -> &Report {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"% Field Guide\n% A. Walker\n\n# Birds\n\nSparrows are small birds.\n\n### Finches\n\nFinches crack seeds.\n\n# Trees\n\nOaks grow slowly.\n";

    #[test]
    fn test_builder_defaults() {
        let builder = Wordscope::default();
        assert!(!builder.render_options.include_frontmatter);
        assert!(builder.load_options.extract_tables);
        assert_eq!(builder.analysis_options.words_per_page, 250);
    }

    #[test]
    fn test_builder_chained() {
        let builder = Wordscope::new()
            .with_max_file_size(5)
            .without_tables()
            .with_words_per_page(300)
            .with_words_per_minute(150)
            .with_frontmatter();

        assert_eq!(builder.load_options.max_file_size_mb, 5);
        assert!(!builder.load_options.extract_tables);
        assert_eq!(builder.analysis_options.words_per_page, 300);
        assert_eq!(builder.analysis_options.words_per_minute, 150);
        assert!(builder.render_options.include_frontmatter);
    }

    #[test]
    fn test_builder_analyze_bytes() {
        let result = Wordscope::new().analyze_bytes(SAMPLE, "md").unwrap();
        let report = result.report();

        assert!(report.is_success());
        assert_eq!(report.document_metadata.title(), Some("Field Guide"));
        assert_eq!(report.chapters().len(), 3);
        assert!(result.to_markdown().unwrap().contains("# Document Analysis: Field Guide"));
        assert!(result.to_text().unwrap().contains("CHAPTER-BY-CHAPTER ANALYSIS"));
        assert!(result.to_json(JsonFormat::Compact).unwrap().starts_with('{'));
    }

    #[test]
    fn test_builder_rejects_unknown_extension() {
        assert!(Wordscope::new().analyze_bytes(b"data", "docx").is_err());
    }

    #[test]
    fn test_analyze_document() {
        let mut doc = DocumentModel::new();
        doc.add_paragraph(Paragraph::heading(0, "Only", 1));
        doc.add_paragraph(Paragraph::new(1, "Body text here."));

        let report = analyze_document(&doc);
        assert!(report.is_success());
        assert_eq!(report.metadata.file_path, "");
        assert_eq!(report.chapters()[0].title, "Only");
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file("no/such/file.md");
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
