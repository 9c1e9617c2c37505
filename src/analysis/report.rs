//! The serializable analysis report.

use super::assign::{EnrichedParagraph, EnrichedTable};
use super::statistics::DocumentStats;
use super::structure::ChapterStructure;
use super::summary::Summary;
use crate::error::Error;
use crate::model::{Chapter, Heading, Metadata};
use crate::source::FileInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version string recorded in every report.
pub const ANALYSIS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Complete result of analyzing one document.
///
/// A report is always well-formed: a failed run still carries metadata,
/// empty content and the errors that stopped it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub metadata: ReportMetadata,

    /// Information about the source file, when it was validated
    #[serde(default)]
    pub file_info: Option<FileInfo>,

    /// Document properties
    #[serde(default)]
    pub document_metadata: Metadata,

    /// Document-wide statistics
    #[serde(default)]
    pub statistics: DocumentStats,

    /// Paragraphs, headings, tables and chapters
    #[serde(default)]
    pub content_analysis: ContentAnalysis,

    /// Digest of the analysis (absent on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    /// Steps taken during the run
    #[serde(default)]
    pub processing_log: Vec<String>,

    /// Errors that stopped the run
    #[serde(default)]
    pub errors: Vec<ReportError>,
}

impl Report {
    /// Create an empty report for a run that has just started.
    pub fn started(file_path: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata::started(file_path),
            file_info: None,
            document_metadata: Metadata::default(),
            statistics: DocumentStats::default(),
            content_analysis: ContentAnalysis::default(),
            summary: None,
            processing_log: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Build a failed report carrying a single error.
    pub fn failed(file_path: impl Into<String>, error: &Error) -> Self {
        let mut report = Self::started(file_path);
        report.fail(error);
        report
    }

    /// Mark the report as failed and record the error.
    pub fn fail(&mut self, error: &Error) {
        log::error!("{}: {}", error.kind(), error);
        self.errors.push(ReportError::from(error));
        self.metadata.status = AnalysisStatus::Failed;
        self.metadata.completion_timestamp = None;
    }

    /// Mark the report as completed now.
    pub fn complete(&mut self) {
        self.metadata.status = AnalysisStatus::Completed;
        self.metadata.completion_timestamp = Some(Utc::now());
    }

    /// Whether the run completed.
    pub fn is_success(&self) -> bool {
        self.metadata.status == AnalysisStatus::Completed
    }

    /// Whether the run failed.
    pub fn is_failed(&self) -> bool {
        self.metadata.status == AnalysisStatus::Failed
    }

    /// Chapters found in the document.
    pub fn chapters(&self) -> &[Chapter] {
        &self.content_analysis.chapters
    }
}

/// Run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the run started
    pub analysis_timestamp: DateTime<Utc>,

    /// Path of the analyzed file as given by the caller
    pub file_path: String,

    /// Crate version that produced the report
    pub analysis_version: String,

    /// Run status
    pub status: AnalysisStatus,

    /// When the run completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_timestamp: Option<DateTime<Utc>>,
}

impl ReportMetadata {
    fn started(file_path: impl Into<String>) -> Self {
        Self {
            analysis_timestamp: Utc::now(),
            file_path: file_path.into(),
            analysis_version: ANALYSIS_VERSION.to_string(),
            status: AnalysisStatus::Started,
            completion_timestamp: None,
        }
    }
}

/// Status of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Started,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Started => "started",
            AnalysisStatus::Completed => "completed",
            AnalysisStatus::Failed => "failed",
        }
    }
}

/// Structured content of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Paragraphs with chapter context
    pub paragraphs: Vec<EnrichedParagraph>,

    /// Headings in document order
    pub headings: Vec<Heading>,

    /// Tables with chapter context
    pub tables: Vec<EnrichedTable>,

    /// Leading part of the document text
    pub text_preview: String,

    /// Length of the full document text in characters
    pub total_text_length: usize,

    /// Chapters with aggregates
    pub chapters: Vec<Chapter>,

    /// Overview of the chapter tree
    pub chapter_structure: ChapterStructure,
}

/// An error entry in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportError {
    /// Error category, e.g. `FileValidationError`
    #[serde(rename = "type")]
    pub kind: String,

    /// Display message
    pub message: String,

    /// Structured details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl From<&Error> for ReportError {
    fn from(error: &Error) -> Self {
        Self {
            kind: error.kind().to_string(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
