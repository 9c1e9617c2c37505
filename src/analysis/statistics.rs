//! Document-wide counts and derived scores.

use super::AnalysisOptions;
use crate::model::{DocumentModel, Paragraph, Table};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Aggregate statistics for a whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Non-empty paragraphs (headings included)
    pub total_paragraphs: usize,

    /// Whitespace-separated tokens
    pub total_words: usize,

    /// Characters including spaces
    pub total_characters: usize,

    /// Characters excluding spaces
    pub total_characters_no_spaces: usize,

    /// Sentence fragments longer than the minimum length
    pub total_sentences: usize,

    /// Estimated page count
    pub total_pages: usize,

    /// Document sections
    pub total_sections: usize,

    /// Tables in the document
    pub total_tables: usize,

    /// Always 0; images are not counted
    pub total_images: usize,

    /// Title and heading paragraphs
    pub total_headings: usize,

    /// Estimated reading time
    pub reading_time_minutes: f64,

    /// 0-10 complexity heuristic
    pub complexity_score: f64,
}

impl DocumentStats {
    /// Words per sentence, rounded to 2 decimals (0 without sentences).
    pub fn average_words_per_sentence(&self) -> f64 {
        if self.total_sentences == 0 {
            return 0.0;
        }
        round2(self.total_words as f64 / self.total_sentences as f64)
    }
}

/// Computes [`DocumentStats`] from paragraph and table streams.
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    words_per_page: usize,
    words_per_minute: usize,
    min_sentence_chars: usize,
}

impl StatisticsEngine {
    /// Create an engine from analysis options.
    pub fn new(options: &AnalysisOptions) -> Self {
        Self {
            words_per_page: options.words_per_page.max(1),
            words_per_minute: options.words_per_minute.max(1),
            min_sentence_chars: options.min_sentence_chars,
        }
    }

    /// Compute statistics for already-loaded content.
    ///
    /// Returns all-zero statistics when there is neither paragraph text nor a table.
    pub fn compute(&self, paragraphs: &[Paragraph], tables: &[Table], section_count: usize) -> DocumentStats {
        let texts: Vec<&Paragraph> = paragraphs.iter().filter(|p| !p.is_empty()).collect();
        if texts.is_empty() && tables.is_empty() {
            return DocumentStats::default();
        }

        let total_text = texts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let total_paragraphs = texts.len();
        let total_headings = texts.iter().filter(|p| p.is_heading()).count();
        let total_words = total_text.split_whitespace().count();
        let total_sentences = count_sentences(&total_text, self.min_sentence_chars);

        let total_pages = if total_words > 0 {
            ((total_words as f64 / self.words_per_page as f64).round_ties_even() as usize).max(1)
        } else {
            1
        };

        DocumentStats {
            total_paragraphs,
            total_words,
            total_characters: total_text.chars().count(),
            total_characters_no_spaces: total_text.chars().filter(|c| *c != ' ').count(),
            total_sentences,
            total_pages,
            total_sections: section_count,
            total_tables: tables.len(),
            total_images: 0,
            total_headings,
            reading_time_minutes: round2(total_words as f64 / self.words_per_minute as f64),
            complexity_score: complexity_score(
                total_words,
                total_sentences,
                total_paragraphs,
                total_headings,
            ),
        }
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(&AnalysisOptions::default())
    }
}

/// Compute statistics for a document.
///
/// An unloaded document yields all-zero statistics instead of an error.
pub fn compute_statistics(doc: &DocumentModel, options: &AnalysisOptions) -> DocumentStats {
    if !doc.loaded {
        log::warn!("Document not loaded, returning empty statistics");
        return DocumentStats::default();
    }

    let stats = StatisticsEngine::new(options).compute(&doc.paragraphs, &doc.tables, doc.section_count);
    log::debug!(
        "Statistics calculated: {} words, {} paragraphs",
        stats.total_words,
        stats.total_paragraphs
    );
    stats
}

fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

/// Count sentence fragments whose trimmed length exceeds `min_chars`.
///
/// Text is split on runs of `.`, `!` and `?`; short fragments are treated as
/// abbreviations or noise.
pub fn count_sentences(text: &str, min_chars: usize) -> usize {
    sentence_boundary()
        .split(text)
        .filter(|fragment| fragment.trim().chars().count() > min_chars)
        .count()
}

/// Complexity heuristic on a 0-10 scale, rounded to 2 decimals.
///
/// Longer sentences, denser paragraphs, longer documents and sparse headings
/// all raise the score. Returns 0 when there are no words or no sentences.
pub fn complexity_score(words: usize, sentences: usize, paragraphs: usize, headings: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }

    let words = words as f64;
    let sentences = sentences as f64;
    let paragraphs = paragraphs.max(1) as f64;

    let avg_words_per_sentence = words / sentences;
    let avg_sentences_per_paragraph = sentences / paragraphs;
    let length_factor = (words / 1000.0).min(3.0);
    let structure_factor = (1.0 - headings as f64 / paragraphs).max(0.5);

    let score = (avg_words_per_sentence / 20.0) * 3.0
        + (avg_sentences_per_paragraph / 5.0) * 2.0
        + length_factor * 2.0
        + structure_factor * 3.0;

    round2(score.min(10.0))
}

/// Round to 2 decimal places.
///
/// Rounds the exact binary value, so `0.015` (stored just below) becomes
/// `0.01`.
pub(crate) fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
