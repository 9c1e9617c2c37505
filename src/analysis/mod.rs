//! Document analysis.
//!
//! The stages run in a fixed order over an immutable [`DocumentModel`]:
//!
//! 1. [`compute_statistics`] - counts, page and reading-time estimates, complexity
//! 2. [`extract_chapters`] - chapter segmentation from headings
//! 3. [`ContentAssigner`] - ordinal distribution of paragraphs and tables
//! 4. [`build_summary`] - overview, structure, metrics and quality indicators
//!
//! [`Pipeline`] chains them into a [`Report`]; [`Analyzer`] adds file
//! validation and loading in front of it.
//!
//! [`DocumentModel`]: crate::model::DocumentModel

mod assign;
mod options;
mod pipeline;
mod processing_log;
mod report;
mod statistics;
mod structure;
mod summary;

pub(crate) use assign::preview;
pub use assign::{
    assign_paragraphs, assign_tables, bucket_size, Assigned, Assignment, ContentAssigner,
    EnrichedParagraph, EnrichedTable,
};
pub use options::AnalysisOptions;
pub use pipeline::{Analyzer, Pipeline};
pub use processing_log::ProcessingLog;
pub use report::{
    AnalysisStatus, ContentAnalysis, Report, ReportError, ReportMetadata, ANALYSIS_VERSION,
};
pub use statistics::{
    complexity_score, compute_statistics, count_sentences, DocumentStats, StatisticsEngine,
};
pub use structure::{
    extract_chapters, level_statistics, ChapterStructure, LevelStats, CHAPTER_MAX_LEVEL,
};
pub use summary::{
    average_paragraph_length, build_summary, structure_score, ContentMetrics, DocumentOverview,
    QualityIndicators, ReadingLevel, StructureAnalysis, Summary, SummaryInput,
};
