//! Chapter types.

use serde::{Deserialize, Serialize};

/// A top-level content division opened by a heading of level 2 or above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based position in the chapter list
    pub chapter_number: usize,

    /// Trimmed heading text
    pub title: String,

    /// 1 or 2
    pub level: u8,

    /// Paragraph index of the opening heading
    pub start_position: usize,

    /// Deeper headings that follow the chapter heading
    pub subsections: Vec<Subsection>,

    /// First characters of the first non-empty assigned paragraph
    pub content_preview: String,

    /// Words in assigned paragraphs
    pub word_count: usize,

    /// Number of assigned paragraphs
    pub paragraph_count: usize,

    /// Number of assigned tables
    pub table_count: usize,
}

impl Chapter {
    /// Title of the chapter synthesized when a document has no chapter headings.
    pub const DEFAULT_TITLE: &'static str = "Main Content";

    /// Create an empty chapter.
    pub fn new(chapter_number: usize, title: impl Into<String>, level: u8, start_position: usize) -> Self {
        Self {
            chapter_number,
            title: title.into(),
            level,
            start_position,
            subsections: Vec::new(),
            content_preview: String::new(),
            word_count: 0,
            paragraph_count: 0,
            table_count: 0,
        }
    }

    /// The single chapter used when no heading opens one.
    pub fn main_content() -> Self {
        Self::new(1, Self::DEFAULT_TITLE, 1, 0)
    }

    /// Whether the chapter has subsections.
    pub fn has_subsections(&self) -> bool {
        !self.subsections.is_empty()
    }
}

/// A heading deeper than level 2, attached to the enclosing chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// Trimmed heading text
    pub title: String,

    /// Heading level (3 or deeper)
    pub level: u8,

    /// Paragraph index of the heading
    pub position: usize,
}
