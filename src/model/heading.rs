//! Heading types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A heading found in the paragraph stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Rank among headings only
    pub index: usize,

    /// Heading text
    pub text: String,

    /// 0 for a title, N for "Heading N"
    pub level: u8,

    /// Source style name
    pub style_name: String,

    /// Index of the paragraph this heading was read from
    pub paragraph_index: usize,
}

impl Heading {
    /// Create a heading.
    pub fn new(index: usize, text: impl Into<String>, level: u8, paragraph_index: usize) -> Self {
        let style_name = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading {}", level)
        };
        Self {
            index,
            text: text.into(),
            level,
            style_name,
            paragraph_index,
        }
    }
}

/// Collect the headings of a paragraph stream in document order.
pub fn headings_from_paragraphs(paragraphs: &[Paragraph]) -> Vec<Heading> {
    paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .filter_map(|p| p.kind.heading_level().map(|level| (p, level)))
        .enumerate()
        .map(|(index, (p, level))| Heading {
            index,
            text: p.text.clone(),
            level,
            style_name: p.style_name.clone(),
            paragraph_index: p.index,
        })
        .collect()
}
