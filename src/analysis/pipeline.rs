//! End-to-end analysis of a loaded document, and of files on disk.

use super::assign::{preview, ContentAssigner};
use super::processing_log::ProcessingLog;
use super::options::AnalysisOptions;
use super::report::{ContentAnalysis, Report};
use super::statistics::compute_statistics;
use super::structure::{extract_chapters, ChapterStructure};
use super::summary::{build_summary, SummaryInput};
use crate::error::{Error, Result};
use crate::model::{DocumentModel, Paragraph, Table};
use crate::source::{validate_file, FileInfo, LoadOptions, SourceRegistry};
use std::path::Path;

/// Runs every analysis stage over a loaded document.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: AnalysisOptions,
}

impl Pipeline {
    /// Create a pipeline with the given options.
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Options used by this pipeline.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze a document and build a completed report.
    ///
    /// Never fails: an unloaded or empty document produces zero statistics
    /// and a single "Main Content" chapter. Every stage appends to `log`, and
    /// the report carries a copy of the log as it stood at completion.
    pub fn run(
        &self,
        document: &DocumentModel,
        file_info: Option<FileInfo>,
        file_path: &str,
        log: &mut ProcessingLog,
    ) -> Report {
        let mut report = Report::started(file_path);
        report.file_info = file_info;
        report.document_metadata = document.metadata.clone();
        log.record("Document metadata extracted");

        report.statistics = compute_statistics(document, &self.options);
        log.record("Statistics calculated");

        let headings = document.headings();
        let chapters = extract_chapters(&headings);
        let chapter_structure = ChapterStructure::from_chapters(&chapters);
        log.record(format!("Identified {} chapters/sections", chapters.len()));

        let paragraphs: Vec<Paragraph> = if document.loaded {
            document.paragraphs.iter().filter(|p| !p.is_empty()).cloned().collect()
        } else {
            Vec::new()
        };
        let tables: &[Table] = if document.loaded { &document.tables } else { &[] };

        let assigner = ContentAssigner::new(self.options.preview_chars);
        let assigned_paragraphs = assigner.assign_paragraphs(&paragraphs, chapters);
        log.record(format!(
            "Extracted {} paragraphs across chapters",
            assigned_paragraphs.items.len()
        ));

        let assigned_tables = assigner.assign_tables(tables, assigned_paragraphs.chapters);
        log.record(format!(
            "Extracted {} tables across chapters",
            assigned_tables.items.len()
        ));
        let chapters = assigned_tables.chapters;

        let raw_text = if document.loaded {
            document.raw_text(self.options.include_tables_in_text)
        } else {
            String::new()
        };
        let text_preview = preview(&raw_text, self.options.text_preview_chars);
        let total_text_length = raw_text.chars().count();
        log.record("Text content extracted");

        let summary = build_summary(&SummaryInput {
            stats: &report.statistics,
            metadata: &report.document_metadata,
            paragraphs: &paragraphs,
            headings: &headings,
            table_count: tables.len(),
            chapters: &chapters,
        });
        log.record("Analysis summary generated");

        report.content_analysis = ContentAnalysis {
            paragraphs: assigned_paragraphs.items,
            headings,
            tables: assigned_tables.items,
            text_preview,
            total_text_length,
            chapters,
            chapter_structure,
        };
        report.summary = Some(summary);
        report.processing_log = log.entries().to_vec();
        report.complete();
        report
    }
}

/// Loads files through a [`SourceRegistry`] and analyzes them.
pub struct Analyzer {
    registry: SourceRegistry,
    load_options: LoadOptions,
    pipeline: Pipeline,
}

impl Analyzer {
    /// Create an analyzer with the default sources.
    pub fn new(load_options: LoadOptions, analysis_options: AnalysisOptions) -> Self {
        Self {
            registry: SourceRegistry::with_defaults(),
            load_options,
            pipeline: Pipeline::new(analysis_options),
        }
    }

    /// Replace the source registry.
    pub fn with_registry(mut self, registry: SourceRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Load options in use.
    pub fn load_options(&self) -> &LoadOptions {
        &self.load_options
    }

    /// Validate, load and analyze a file.
    pub fn try_analyze_path<P: AsRef<Path>>(&self, path: P) -> Result<Report> {
        let mut log = ProcessingLog::new();
        self.analyze_logged(path.as_ref(), &mut log)
    }

    /// Validate, load and analyze a file, folding any error into a failed report.
    pub fn analyze_path<P: AsRef<Path>>(&self, path: P) -> Report {
        let path = path.as_ref();
        let mut log = ProcessingLog::new();
        match self.analyze_logged(path, &mut log) {
            Ok(report) => report,
            Err(e) => {
                let mut report = Report::failed(path.display().to_string(), &e);
                report.processing_log = log.into_entries();
                report
            }
        }
    }

    /// Analyze an in-memory document whose format is given by `extension`.
    pub fn analyze_bytes(&self, data: &[u8], extension: &str) -> Result<Report> {
        let source = self.registry.find(extension).ok_or_else(|| Error::UnsupportedFormat {
            path: String::new(),
            extension: extension.to_lowercase(),
            supported: self.registry.extensions(),
        })?;

        let mut log = ProcessingLog::new();
        log.record(format!("Loading {} bytes as {}", data.len(), source.name()));
        let document = source.load_bytes(data, &self.load_options)?;
        log.record("Document loaded successfully");

        Ok(self.pipeline.run(&document, None, "", &mut log))
    }

    /// Analyze an already-loaded document.
    pub fn analyze_document(&self, document: &DocumentModel, file_path: &str) -> Report {
        let mut log = ProcessingLog::new();
        self.pipeline.run(document, None, file_path, &mut log)
    }

    fn analyze_logged(&self, path: &Path, log: &mut ProcessingLog) -> Result<Report> {
        let display = path.display().to_string();
        log.record(format!("Loading document: {}", display));

        let file_info = validate_file(path, &self.load_options)?;
        log.record("File information extracted");

        let document = self
            .registry
            .load_validated(path, &file_info.extension, &self.load_options)?;
        log.record("Document loaded successfully");

        Ok(self.pipeline.run(&document, Some(file_info), &display, log))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(LoadOptions::default(), AnalysisOptions::default())
    }
}
