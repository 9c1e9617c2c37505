//! Human-oriented digest of an analysis.

use super::statistics::{round2, DocumentStats};
use super::structure::{level_histogram, ChapterStructure};
use crate::model::{Chapter, Heading, Metadata, Paragraph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Inputs for [`build_summary`].
#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    /// Document-wide statistics
    pub stats: &'a DocumentStats,

    /// Document properties
    pub metadata: &'a Metadata,

    /// Content paragraphs (headings included)
    pub paragraphs: &'a [Paragraph],

    /// Headings in document order
    pub headings: &'a [Heading],

    /// Number of tables
    pub table_count: usize,

    /// Chapters after content assignment
    pub chapters: &'a [Chapter],
}

/// Report summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Title, author and headline counts
    pub document_overview: DocumentOverview,

    /// Paragraph, heading, table and chapter counts
    pub structure_analysis: StructureAnalysis,

    /// Sentence and character metrics
    pub content_metrics: ContentMetrics,

    /// Presence flags and structure score
    pub quality_indicators: QualityIndicators,
}

/// Headline facts about the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOverview {
    /// Document title, "Untitled" when absent
    pub title: String,

    /// Document author, "Unknown" when absent
    pub author: String,

    /// Total word count
    pub total_words: usize,

    /// Estimated pages at the configured words per page
    pub total_pages: usize,

    /// Estimated minutes at the configured reading speed
    pub reading_time_minutes: f64,

    /// 0-10 complexity heuristic
    pub complexity_score: f64,
}

/// Structural counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    /// Number of non-empty paragraphs
    pub total_paragraphs: usize,

    /// Number of headings
    pub total_headings: usize,

    /// Number of tables
    pub total_tables: usize,

    /// Number of chapters
    pub total_chapters: usize,

    /// Heading count keyed by `level_N`
    pub heading_levels: BTreeMap<String, usize>,

    /// Average words per paragraph, rounded to 2 decimals
    pub average_paragraph_length: f64,

    /// Per-chapter breakdown
    pub chapter_structure: ChapterStructure,
}

/// Text metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetrics {
    /// Number of sentences
    pub total_sentences: usize,

    /// Character count including whitespace
    pub characters_with_spaces: usize,

    /// Character count excluding whitespace
    pub characters_without_spaces: usize,

    /// Words per sentence, rounded to 2 decimals
    pub average_words_per_sentence: f64,

    /// Reading level derived from the complexity score
    pub estimated_reading_level: ReadingLevel,
}

/// Document quality flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityIndicators {
    /// Title metadata present
    pub has_title: bool,

    /// Author metadata present
    pub has_author: bool,

    /// At least one heading
    pub has_headings: bool,

    /// At least one table
    pub has_tables: bool,

    /// 0-10 structure heuristic
    pub structure_score: f64,
}

/// Reading level label derived from the complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingLevel {
    Elementary,
    #[serde(rename = "Middle School")]
    MiddleSchool,
    #[serde(rename = "High School")]
    HighSchool,
    College,
    Graduate,
}

impl ReadingLevel {
    /// Map a complexity score onto a reading level.
    pub fn from_complexity(score: f64) -> Self {
        if score <= 3.0 {
            ReadingLevel::Elementary
        } else if score <= 5.0 {
            ReadingLevel::MiddleSchool
        } else if score <= 7.0 {
            ReadingLevel::HighSchool
        } else if score <= 9.0 {
            ReadingLevel::College
        } else {
            ReadingLevel::Graduate
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Elementary => "Elementary",
            ReadingLevel::MiddleSchool => "Middle School",
            ReadingLevel::HighSchool => "High School",
            ReadingLevel::College => "College",
            ReadingLevel::Graduate => "Graduate",
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the report summary.
pub fn build_summary(input: &SummaryInput<'_>) -> Summary {
    let stats = input.stats;
    let paragraph_count = input.paragraphs.len();
    let heading_count = input.headings.len();

    Summary {
        document_overview: DocumentOverview {
            title: input.metadata.title().unwrap_or("Untitled").to_string(),
            author: input.metadata.author().unwrap_or("Unknown").to_string(),
            total_words: stats.total_words,
            total_pages: stats.total_pages,
            reading_time_minutes: stats.reading_time_minutes,
            complexity_score: stats.complexity_score,
        },
        structure_analysis: StructureAnalysis {
            total_paragraphs: paragraph_count,
            total_headings: heading_count,
            total_tables: input.table_count,
            total_chapters: input.chapters.len(),
            heading_levels: level_histogram(input.headings.iter().map(|h| h.level)),
            average_paragraph_length: average_paragraph_length(input.paragraphs),
            chapter_structure: ChapterStructure::from_chapters(input.chapters),
        },
        content_metrics: ContentMetrics {
            total_sentences: stats.total_sentences,
            characters_with_spaces: stats.total_characters,
            characters_without_spaces: stats.total_characters_no_spaces,
            average_words_per_sentence: stats.average_words_per_sentence(),
            estimated_reading_level: ReadingLevel::from_complexity(stats.complexity_score),
        },
        quality_indicators: QualityIndicators {
            has_title: input.metadata.title().is_some(),
            has_author: input.metadata.author().is_some(),
            has_headings: heading_count > 0,
            has_tables: input.table_count > 0,
            structure_score: structure_score(input.headings, paragraph_count, input.table_count),
        },
    }
}

/// Average words per paragraph, rounded to 2 decimals.
pub fn average_paragraph_length(paragraphs: &[Paragraph]) -> f64 {
    if paragraphs.is_empty() {
        return 0.0;
    }
    let words: usize = paragraphs.iter().map(Paragraph::word_count).sum();
    round2(words as f64 / paragraphs.len() as f64)
}

/// Structure quality heuristic on a 0-10 scale.
pub fn structure_score(headings: &[Heading], paragraphs: usize, tables: usize) -> f64 {
    let mut score = 0.0;

    if !headings.is_empty() {
        score += 3.0;

        let levels: BTreeSet<u8> = headings.iter().map(|h| h.level).collect();
        if levels.contains(&1) {
            score += 1.0;
        }
        if levels.len() > 1 {
            score += 1.0;
        }
    }

    if (5..=100).contains(&paragraphs) {
        score += 2.0;
    } else if paragraphs > 0 {
        score += 1.0;
    }

    if tables > 0 {
        score += 1.5;
    }

    if !headings.is_empty() && paragraphs > 0 {
        let ratio = paragraphs as f64 / headings.len() as f64;
        if (3.0..=10.0).contains(&ratio) {
            score += 1.5;
        }
    }

    round2(f64::min(score, 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_of(
        stats: &DocumentStats,
        metadata: &Metadata,
        paragraphs: &[Paragraph],
        headings: &[Heading],
        tables: usize,
        chapters: &[Chapter],
    ) -> Summary {
        build_summary(&SummaryInput {
            stats,
            metadata,
            paragraphs,
            headings,
            table_count: tables,
            chapters,
        })
    }

    #[test]
    fn test_reading_level_thresholds() {
        assert_eq!(ReadingLevel::from_complexity(0.0), ReadingLevel::Elementary);
        assert_eq!(ReadingLevel::from_complexity(3.0), ReadingLevel::Elementary);
        assert_eq!(ReadingLevel::from_complexity(3.01), ReadingLevel::MiddleSchool);
        assert_eq!(ReadingLevel::from_complexity(7.0), ReadingLevel::HighSchool);
        assert_eq!(ReadingLevel::from_complexity(9.0), ReadingLevel::College);
        assert_eq!(ReadingLevel::from_complexity(9.5), ReadingLevel::Graduate);
        assert_eq!(ReadingLevel::MiddleSchool.to_string(), "Middle School");
    }

    #[test]
    fn test_reading_level_serializes_as_label() {
        let json = serde_json::to_string(&ReadingLevel::HighSchool).unwrap();
        assert_eq!(json, "\"High School\"");
    }

    #[test]
    fn test_structure_score_full_marks() {
        let headings = vec![
            Heading::new(0, "A", 1, 0),
            Heading::new(1, "B", 2, 5),
        ];
        // 2 headings, 10 paragraphs (ratio 5), 1 table
        let score = structure_score(&headings, 10, 1);
        assert_eq!(score, 3.0 + 1.0 + 1.0 + 2.0 + 1.5 + 1.5);
    }

    #[test]
    fn test_structure_score_partial() {
        let headings = vec![Heading::new(0, "Only", 2, 0)];
        assert_eq!(structure_score(&headings, 2, 0), 3.0 + 1.0);
        assert_eq!(structure_score(&[], 200, 0), 1.0);
        assert_eq!(structure_score(&[], 0, 0), 0.0);
    }

    #[test]
    fn test_empty_summary() {
        let stats = DocumentStats::default();
        let metadata = Metadata::default();
        let chapters = vec![Chapter::main_content()];
        let summary = summary_of(&stats, &metadata, &[], &[], 0, &chapters);

        assert_eq!(summary.document_overview.title, "Untitled");
        assert_eq!(summary.document_overview.author, "Unknown");
        assert_eq!(summary.structure_analysis.total_chapters, 1);
        assert_eq!(summary.structure_analysis.average_paragraph_length, 0.0);
        assert_eq!(summary.quality_indicators, QualityIndicators::default());
        assert_eq!(summary.content_metrics.estimated_reading_level, ReadingLevel::Elementary);
    }

    #[test]
    fn test_summary_with_content() {
        let stats = DocumentStats {
            total_words: 40,
            total_sentences: 4,
            complexity_score: 5.5,
            ..Default::default()
        };
        let metadata = Metadata {
            title: Some("Report".to_string()),
            author: Some("  ".to_string()),
            ..Default::default()
        };
        let paragraphs = vec![
            Paragraph::title(0, "Report"),
            Paragraph::new(1, "one two three"),
            Paragraph::new(2, "four five"),
        ];
        let headings = vec![Heading::new(0, "Report", 0, 0)];
        let chapters = vec![Chapter::new(1, "Report", 1, 0)];

        let summary = summary_of(&stats, &metadata, &paragraphs, &headings, 2, &chapters);

        assert_eq!(summary.document_overview.title, "Report");
        assert_eq!(summary.document_overview.author, "Unknown");
        assert!(summary.quality_indicators.has_title);
        assert!(!summary.quality_indicators.has_author);
        assert!(summary.quality_indicators.has_tables);
        assert_eq!(summary.structure_analysis.heading_levels["level_0"], 1);
        assert_eq!(summary.structure_analysis.average_paragraph_length, 2.0);
        assert_eq!(summary.content_metrics.average_words_per_sentence, 10.0);
        assert_eq!(summary.content_metrics.estimated_reading_level, ReadingLevel::HighSchool);
    }
}
