//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// Structural role of a paragraph, resolved once from its style name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "snake_case")]
pub enum BlockKind {
    /// Document title (ranks above "Heading 1")
    Title,
    /// Numbered heading ("Heading N")
    Heading(u8),
    /// Regular body text
    #[default]
    Body,
}

impl BlockKind {
    /// Classify a word-processor style name.
    ///
    /// `"Heading N"` styles take the trailing number as their level, saturating
    /// at 255 and falling back to 1 when it is not a number. `"Title"` styles
    /// become [`BlockKind::Title`].
    pub fn from_style_name(style_name: &str) -> Self {
        if style_name.starts_with("Heading") {
            let level = style_name
                .split_whitespace()
                .last()
                .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
                .map(|digits| digits.parse::<u8>().unwrap_or(u8::MAX))
                .unwrap_or(1);
            BlockKind::Heading(level)
        } else if style_name.starts_with("Title") {
            BlockKind::Title
        } else {
            BlockKind::Body
        }
    }

    /// Heading level: 0 for a title, N for "Heading N", `None` for body text.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockKind::Title => Some(0),
            BlockKind::Heading(level) => Some(*level),
            BlockKind::Body => None,
        }
    }

    /// Whether this is a title or heading.
    pub fn is_heading(&self) -> bool {
        !matches!(self, BlockKind::Body)
    }
}

/// A paragraph of document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Position in document order
    pub index: usize,

    /// Cleaned paragraph text
    pub text: String,

    /// Source style name
    pub style_name: String,

    /// Structural role
    pub kind: BlockKind,

    /// Character formatting
    #[serde(flatten)]
    pub format: TextFormat,

    /// Paragraph alignment as reported by the source
    pub alignment: Option<String>,
}

impl Paragraph {
    /// Create a body paragraph with the "Normal" style.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self::with_style(index, text, "Normal")
    }

    /// Create a paragraph with a style name; the block kind is derived from it.
    pub fn with_style(index: usize, text: impl Into<String>, style_name: impl Into<String>) -> Self {
        let style_name = style_name.into();
        Self {
            index,
            text: text.into(),
            kind: BlockKind::from_style_name(&style_name),
            style_name,
            format: TextFormat::default(),
            alignment: None,
        }
    }

    /// Create a "Heading N" paragraph.
    pub fn heading(index: usize, text: impl Into<String>, level: u8) -> Self {
        Self::with_style(index, text, format!("Heading {}", level))
    }

    /// Create a "Title" paragraph.
    pub fn title(index: usize, text: impl Into<String>) -> Self {
        Self::with_style(index, text, "Title")
    }

    /// Check if this is a heading or title.
    pub fn is_heading(&self) -> bool {
        self.kind.is_heading()
    }

    /// Heading level for "Heading N" paragraphs (titles report `None`).
    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading(level) => Some(level),
            _ => None,
        }
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Character formatting flags collected from a paragraph's runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFormat {
    /// Any run is bold
    pub bold: bool,

    /// Any run is italic
    pub italic: bool,

    /// Any run is underlined
    pub underline: bool,

    /// Font name of the first run
    pub font_name: Option<String>,

    /// Font size of the first run in points
    pub font_size: Option<f32>,
}

impl TextFormat {
    /// Check if any emphasis is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_from_style_name() {
        assert_eq!(BlockKind::from_style_name("Heading 1"), BlockKind::Heading(1));
        assert_eq!(BlockKind::from_style_name("Heading 4"), BlockKind::Heading(4));
        assert_eq!(BlockKind::from_style_name("Heading"), BlockKind::Heading(1));
        assert_eq!(BlockKind::from_style_name("Heading 1 Char"), BlockKind::Heading(1));
        assert_eq!(BlockKind::from_style_name("Heading 255"), BlockKind::Heading(255));
        assert_eq!(BlockKind::from_style_name("Heading 300"), BlockKind::Heading(255));
        assert_eq!(BlockKind::from_style_name("Heading 99999999999"), BlockKind::Heading(255));
        assert_eq!(BlockKind::from_style_name("Title"), BlockKind::Title);
        assert_eq!(BlockKind::from_style_name("Subtitle"), BlockKind::Body);
        assert_eq!(BlockKind::from_style_name("Normal"), BlockKind::Body);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(BlockKind::Title.heading_level(), Some(0));
        assert_eq!(BlockKind::Heading(3).heading_level(), Some(3));
        assert_eq!(BlockKind::Body.heading_level(), None);

        let title = Paragraph::title(0, "Report");
        assert!(title.is_heading());
        assert_eq!(title.heading_level(), None);

        let h2 = Paragraph::heading(1, "Scope", 2);
        assert!(h2.is_heading());
        assert_eq!(h2.heading_level(), Some(2));
        assert_eq!(h2.style_name, "Heading 2");
    }

    #[test]
    fn test_word_count() {
        let p = Paragraph::new(0, "  one two\tthree\nfour ");
        assert_eq!(p.word_count(), 4);
        assert!(!p.is_empty());
        assert!(Paragraph::new(1, "   ").is_empty());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_value(BlockKind::Heading(2)).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);

        let json = serde_json::to_value(BlockKind::Body).unwrap();
        assert_eq!(json["type"], "body");
    }

    #[test]
    fn test_text_format() {
        assert!(!TextFormat::default().has_styling());
        let format = TextFormat {
            italic: true,
            ..Default::default()
        };
        assert!(format.has_styling());
    }
}
