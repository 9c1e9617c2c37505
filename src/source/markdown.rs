//! Markdown and plain-text documents.
//!
//! Headings come from ATX markers (`#` through `######`), a leading pandoc
//! style `% Title` line becomes the document title, blank lines separate
//! paragraphs and pipe tables become tables. Plain `.txt` files go through
//! the same reader; without markup they are just paragraphs.

use super::options::LoadOptions;
use super::snapshot::{RawDocument, RawParagraph, RawTable};
use super::DocumentSource;
use crate::error::Result;
use crate::model::DocumentModel;
use regex::Regex;
use std::sync::OnceLock;

/// Loads Markdown (`.md`, `.markdown`) and plain-text (`.txt`) files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownSource;

impl MarkdownSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse Markdown text into a raw document.
    pub fn parse(&self, text: &str) -> RawDocument {
        MarkdownReader::default().read(text)
    }
}

impl DocumentSource for MarkdownSource {
    fn name(&self) -> &str {
        "markdown"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn load_bytes(&self, data: &[u8], options: &LoadOptions) -> Result<DocumentModel> {
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        let text = String::from_utf8_lossy(data);
        Ok(self.parse(&text).into_model(options))
    }
}

/// Parse `# Title` style headings: returns (level, title).
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();

    if (1..=6).contains(&hashes) {
        let rest = &trimmed[hashes..];
        if rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t') {
            let title = rest.trim().trim_end_matches('#').trim_end();
            if !title.is_empty() {
                return Some((hashes as u8, title));
            }
        }
    }
    None
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

fn is_table_row(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

fn is_thematic_break(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && (compact.chars().all(|c| c == '-')
            || compact.chars().all(|c| c == '*')
            || compact.chars().all(|c| c == '_'))
}

fn table_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?\s*$").unwrap())
}

fn list_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s+").unwrap())
}

fn bold_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").unwrap())
}

fn italic_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*([^*\s][^*]*)\*|(^|\W)_([^_\s][^_]*)_(\W|$)").unwrap())
}

/// Strip emphasis markers, reporting whether bold or italic text was present.
fn strip_emphasis(text: &str) -> (String, bool, bool) {
    let bold = bold_marker().is_match(text);
    let text = bold_marker().replace_all(text, "$1$2");

    let italic = italic_marker().is_match(&text);
    let text = italic_marker().replace_all(&text, "$1$2$3$4");

    (text.into_owned(), bold, italic)
}

fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

#[derive(Default)]
struct MarkdownReader {
    doc: RawDocument,
    lines: Vec<String>,
    table: Vec<Vec<String>>,
    code: Option<Vec<String>>,
}

impl MarkdownReader {
    fn read(mut self, text: &str) -> RawDocument {
        let mut title_block = true;

        for line in text.lines() {
            if let Some(code) = self.code.as_mut() {
                if is_fence(line) {
                    let body = code.join("\n");
                    self.code = None;
                    if !body.trim().is_empty() {
                        self.doc.paragraphs.push(RawParagraph::styled(body, "Code"));
                    }
                } else {
                    code.push(line.to_string());
                }
                continue;
            }

            if title_block {
                if let Some(value) = line.strip_prefix("% ") {
                    self.title_line(value.trim());
                    continue;
                }
                if !line.trim().is_empty() {
                    title_block = false;
                }
            }

            if is_fence(line) {
                self.flush();
                self.code = Some(Vec::new());
            } else if line.trim().is_empty() {
                self.flush();
            } else if let Some((level, title)) = parse_heading(line) {
                self.flush();
                self.push_text(title, format!("Heading {}", level));
            } else if is_table_row(line) {
                self.flush_paragraph();
                if !table_separator().is_match(line) {
                    self.table.push(split_cells(line));
                }
            } else if is_thematic_break(line) {
                self.flush();
            } else if let Some(marker) = list_marker().find(line) {
                self.flush();
                self.push_text(&line[marker.end()..], "List Paragraph");
            } else {
                self.flush_table();
                self.lines.push(line.trim().to_string());
            }
        }

        if let Some(code) = self.code.take() {
            let body = code.join("\n");
            if !body.trim().is_empty() {
                self.doc.paragraphs.push(RawParagraph::styled(body, "Code"));
            }
        }
        self.flush();
        self.doc.section_count = Some(1);
        self.doc
    }

    fn title_line(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        if self.doc.metadata.title.is_none() {
            self.doc.metadata.title = Some(value.to_string());
            self.push_text(value, "Title");
        } else if self.doc.metadata.author.is_none() {
            self.doc.metadata.author = Some(value.to_string());
        }
    }

    fn push_text(&mut self, text: &str, style_name: impl Into<String>) {
        let (text, bold, italic) = strip_emphasis(text);
        let mut paragraph = RawParagraph::styled(text, style_name);
        paragraph.bold = bold;
        paragraph.italic = italic;
        self.doc.paragraphs.push(paragraph);
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_table();
    }

    fn flush_paragraph(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.lines).join(" ");
        self.push_text(&text, "Normal");
    }

    fn flush_table(&mut self) {
        if self.table.is_empty() {
            return;
        }
        self.doc.tables.push(RawTable {
            data: std::mem::take(&mut self.table),
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    fn load(text: &str) -> DocumentModel {
        MarkdownSource
            .load_bytes(text.as_bytes(), &LoadOptions::default())
            .unwrap()
    }

    #[test]
    fn test_parse_heading() {
        assert_eq!(parse_heading("# Intro"), Some((1, "Intro")));
        assert_eq!(parse_heading("### Deep ###"), Some((3, "Deep")));
        assert_eq!(parse_heading("####### Seven"), None);
        assert_eq!(parse_heading("#hashtag"), None);
        assert_eq!(parse_heading("#"), None);
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let doc = load("# Intro\n\nFirst line\ncontinues here.\n\n## Scope\nBody.\n");

        let kinds: Vec<BlockKind> = doc.paragraphs.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Heading(1), BlockKind::Body, BlockKind::Heading(2), BlockKind::Body]
        );
        assert_eq!(doc.paragraphs[1].text, "First line continues here.");
        assert_eq!(doc.section_count, 1);
    }

    #[test]
    fn test_title_block() {
        let doc = load("% My Paper\n% Jane Doe\n\n# One\n\nText.");
        assert_eq!(doc.metadata.title.as_deref(), Some("My Paper"));
        assert_eq!(doc.metadata.author.as_deref(), Some("Jane Doe"));
        assert_eq!(doc.paragraphs[0].kind, BlockKind::Title);
        assert_eq!(doc.paragraphs[0].text, "My Paper");
        assert_eq!(doc.headings().len(), 2);
    }

    #[test]
    fn test_pipe_table() {
        let doc = load("Intro text.\n| Name | Value |\n|------|:-----:|\n| a | 1 |\n| b | 2 |\n\nAfter.");
        assert_eq!(doc.tables.len(), 1);
        let table = &doc.tables[0];
        assert_eq!(table.rows, 3);
        assert_eq!(table.columns, 2);
        assert_eq!(table.data[0], vec!["Name", "Value"]);
        assert_eq!(doc.paragraphs.len(), 2);
    }

    #[test]
    fn test_emphasis_flags() {
        let doc = load("Some **bold** words.\n\nAn *italic* word.\n\nsnake_case_name stays.");
        assert!(doc.paragraphs[0].format.bold);
        assert_eq!(doc.paragraphs[0].text, "Some bold words.");
        assert!(doc.paragraphs[1].format.italic);
        assert_eq!(doc.paragraphs[1].text, "An italic word.");
        assert!(!doc.paragraphs[2].format.italic);
        assert_eq!(doc.paragraphs[2].text, "snake_case_name stays.");
    }

    #[test]
    fn test_code_fence_is_not_parsed() {
        let doc = load("```\n# not a heading\n| not | table |\n```\n");
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.paragraphs[0].style_name, "Code");
        assert!(doc.tables.is_empty());
        assert!(doc.headings().is_empty());
    }

    #[test]
    fn test_list_items_are_paragraphs() {
        let doc = load("- first item\n- second item\n1. third");
        let texts: Vec<&str> = doc.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["first item", "second item", "third"]);
        assert_eq!(doc.paragraphs[0].style_name, "List Paragraph");
    }

    #[test]
    fn test_plain_text() {
        let doc = load("Just a note.\n\nAnother note.");
        assert_eq!(doc.paragraphs.len(), 2);
        assert!(doc.headings().is_empty());
    }
}
