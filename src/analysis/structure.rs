//! Heading-based chapter segmentation.

use super::statistics::round2;
use crate::model::{Chapter, Heading, Subsection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headings at or above this level open a chapter; deeper ones become subsections.
pub const CHAPTER_MAX_LEVEL: u8 = 2;

/// Build the chapter list from headings in document order.
///
/// A heading of level 2 or above closes the open chapter and opens a new one;
/// deeper headings are attached to the open chapter as subsections and are
/// dropped when no chapter is open yet. Titles (level 0) open level-1
/// chapters. The result is never empty: without any chapter heading a single
/// "Main Content" chapter is returned.
pub fn extract_chapters(headings: &[Heading]) -> Vec<Chapter> {
    let mut chapters: Vec<Chapter> = Vec::new();
    let mut current: Option<Chapter> = None;

    for heading in headings {
        if heading.level <= CHAPTER_MAX_LEVEL {
            if let Some(chapter) = current.take() {
                chapters.push(chapter);
            }
            current = Some(Chapter::new(
                chapters.len() + 1,
                heading.text.trim(),
                heading.level.max(1),
                heading.paragraph_index,
            ));
        } else if let Some(chapter) = current.as_mut() {
            chapter.subsections.push(Subsection {
                title: heading.text.trim().to_string(),
                level: heading.level,
                position: heading.paragraph_index,
            });
        } else {
            log::debug!(
                "Dropping level {} heading '{}' before the first chapter",
                heading.level,
                heading.text
            );
        }
    }

    if let Some(chapter) = current {
        chapters.push(chapter);
    }

    if chapters.is_empty() {
        chapters.push(Chapter::main_content());
    }

    chapters
}

/// Overview of the chapter tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterStructure {
    /// Number of chapters
    pub total_chapters: usize,

    /// Chapter titles in order
    pub chapter_titles: Vec<String>,

    /// Chapters with at least one subsection
    pub chapters_with_subsections: usize,

    /// Subsections across all chapters
    pub total_subsections: usize,

    /// Subsections per chapter, rounded to 2 decimals
    pub average_subsections_per_chapter: f64,

    /// Chapter count keyed by `level_N`
    pub chapter_levels: BTreeMap<String, usize>,
}

impl ChapterStructure {
    /// Summarize a chapter list.
    pub fn from_chapters(chapters: &[Chapter]) -> Self {
        let total_chapters = chapters.len();
        let total_subsections: usize = chapters.iter().map(|c| c.subsections.len()).sum();

        let average_subsections_per_chapter = if total_chapters > 0 {
            round2(total_subsections as f64 / total_chapters as f64)
        } else {
            0.0
        };

        Self {
            total_chapters,
            chapter_titles: chapters.iter().map(|c| c.title.clone()).collect(),
            chapters_with_subsections: chapters.iter().filter(|c| c.has_subsections()).count(),
            total_subsections,
            average_subsections_per_chapter,
            chapter_levels: level_histogram(chapters.iter().map(|c| c.level)),
        }
    }
}

/// Aggregates for all chapters sharing a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Chapter level
    pub level: u8,

    /// Chapters at this level
    pub count: usize,

    /// Words across those chapters
    pub total_words: usize,

    /// Paragraphs across those chapters
    pub total_paragraphs: usize,
}

impl LevelStats {
    /// Average words per chapter at this level.
    pub fn average_words(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total_words as f64 / self.count as f64
    }
}

/// Per-level chapter aggregates, ordered by level.
pub fn level_statistics(chapters: &[Chapter]) -> Vec<LevelStats> {
    let mut by_level: BTreeMap<u8, LevelStats> = BTreeMap::new();
    for chapter in chapters {
        let entry = by_level.entry(chapter.level).or_insert(LevelStats {
            level: chapter.level,
            count: 0,
            total_words: 0,
            total_paragraphs: 0,
        });
        entry.count += 1;
        entry.total_words += chapter.word_count;
        entry.total_paragraphs += chapter.paragraph_count;
    }
    by_level.into_values().collect()
}

/// Count levels into a `level_N` keyed histogram.
pub(crate) fn level_histogram(levels: impl IntoIterator<Item = u8>) -> BTreeMap<String, usize> {
    let mut histogram = BTreeMap::new();
    for level in levels {
        *histogram.entry(format!("level_{}", level)).or_insert(0) += 1;
    }
    histogram
}
