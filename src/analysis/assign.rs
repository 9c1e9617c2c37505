//! Distribution of paragraphs and tables across chapters.
//!
//! Items are bucketed by ordinal position, not by the heading they textually
//! follow: with `n` items and `k` chapters every chapter receives
//! `max(1, n / k)` consecutive items and the last chapter absorbs the rest.
//!
//! Each pass takes ownership of the chapter list and hands back updated
//! chapters alongside the enriched items, so only one pass can write chapter
//! aggregates at a time. Items are folded strictly in input order, which the
//! "first non-empty paragraph" preview depends on.

use crate::model::{Chapter, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// An item annotated with the chapter it was assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assigned<T> {
    /// The original record
    #[serde(flatten)]
    pub item: T,

    /// Number of the receiving chapter (`None` when there were no chapters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_number: Option<usize>,

    /// Title of the receiving chapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_title: Option<String>,
}

impl<T> Assigned<T> {
    /// Wrap an item without chapter context.
    pub fn unassigned(item: T) -> Self {
        Self {
            item,
            chapter_number: None,
            chapter_title: None,
        }
    }

    fn to_chapter(item: T, chapter: &Chapter) -> Self {
        Self {
            item,
            chapter_number: Some(chapter.chapter_number),
            chapter_title: Some(chapter.title.clone()),
        }
    }
}

/// Paragraph with chapter context.
pub type EnrichedParagraph = Assigned<Paragraph>;

/// Table with chapter context.
pub type EnrichedTable = Assigned<Table>;

/// Output of an assignment pass: the updated chapters and the enriched items.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<T> {
    /// Chapters with updated aggregates
    pub chapters: Vec<Chapter>,

    /// Items in input order
    pub items: Vec<Assigned<T>>,
}

/// Assigns content to chapters by ordinal bucketing.
#[derive(Debug, Clone, Copy)]
pub struct ContentAssigner {
    preview_chars: usize,
}

impl ContentAssigner {
    /// Create an assigner producing previews of at most `preview_chars` characters.
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Assign paragraphs, updating paragraph and word counts and previews.
    pub fn assign_paragraphs(&self, paragraphs: &[Paragraph], chapters: Vec<Chapter>) -> Assignment<Paragraph> {
        if chapters.is_empty() {
            return unassigned(paragraphs, chapters);
        }

        let bucket_size = bucket_size(paragraphs.len(), chapters.len());
        let last = chapters.len() - 1;
        let initial = Assignment {
            chapters,
            items: Vec::with_capacity(paragraphs.len()),
        };

        paragraphs
            .iter()
            .enumerate()
            .fold(initial, |mut acc, (i, paragraph)| {
                let chapter = &mut acc.chapters[(i / bucket_size).min(last)];
                chapter.paragraph_count += 1;
                chapter.word_count += paragraph.word_count();
                if chapter.content_preview.is_empty() && !paragraph.is_empty() {
                    chapter.content_preview = preview(&paragraph.text, self.preview_chars);
                }
                acc.items.push(Assigned::to_chapter(paragraph.clone(), chapter));
                acc
            })
    }

    /// Assign tables, updating table counts only.
    pub fn assign_tables(&self, tables: &[Table], chapters: Vec<Chapter>) -> Assignment<Table> {
        if chapters.is_empty() || tables.is_empty() {
            return unassigned(tables, chapters);
        }

        let bucket_size = bucket_size(tables.len(), chapters.len());
        let last = chapters.len() - 1;
        let initial = Assignment {
            chapters,
            items: Vec::with_capacity(tables.len()),
        };

        tables.iter().enumerate().fold(initial, |mut acc, (i, table)| {
            let chapter = &mut acc.chapters[(i / bucket_size).min(last)];
            chapter.table_count += 1;
            acc.items.push(Assigned::to_chapter(table.clone(), chapter));
            acc
        })
    }
}

impl Default for ContentAssigner {
    fn default() -> Self {
        Self::new(200)
    }
}

/// Assign paragraphs with the default preview length.
pub fn assign_paragraphs(paragraphs: &[Paragraph], chapters: Vec<Chapter>) -> Assignment<Paragraph> {
    ContentAssigner::default().assign_paragraphs(paragraphs, chapters)
}

/// Assign tables to chapters.
pub fn assign_tables(tables: &[Table], chapters: Vec<Chapter>) -> Assignment<Table> {
    ContentAssigner::default().assign_tables(tables, chapters)
}

/// Items per chapter bucket; never zero.
pub fn bucket_size(items: usize, chapters: usize) -> usize {
    if chapters == 0 {
        return 1;
    }
    (items / chapters).max(1)
}

fn unassigned<T: Clone>(items: &[T], chapters: Vec<Chapter>) -> Assignment<T> {
    Assignment {
        chapters,
        items: items.iter().cloned().map(Assigned::unassigned).collect(),
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        head + "..."
    } else {
        head
    }
}
