//! Document-level types.

use super::{headings_from_paragraphs, Heading, Paragraph, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A loaded document: the flat paragraph and table streams plus metadata.
///
/// Produced once by a [`DocumentSource`](crate::source::DocumentSource) and
/// treated as an immutable snapshot by the analysis stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Core properties (title, author, etc.)
    pub metadata: Metadata,

    /// Non-empty paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Tables in document order
    pub tables: Vec<Table>,

    /// Number of document sections
    pub section_count: usize,

    /// Whether the source finished loading the document
    pub loaded: bool,
}

impl DocumentModel {
    /// Create a new empty, loaded document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            paragraphs: Vec::new(),
            tables: Vec::new(),
            section_count: 1,
            loaded: true,
        }
    }

    /// A document that failed to load. Analysis of it yields empty results.
    pub fn unloaded() -> Self {
        Self {
            section_count: 0,
            loaded: false,
            ..Self::new()
        }
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Headings in document order (empty when not loaded).
    pub fn headings(&self) -> Vec<Heading> {
        if !self.loaded {
            return Vec::new();
        }
        headings_from_paragraphs(&self.paragraphs)
    }

    /// Check if the document has neither paragraphs nor tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Plain text of the document, one line per paragraph and table row.
    pub fn raw_text(&self, include_tables: bool) -> String {
        if !self.loaded {
            return String::new();
        }

        let mut parts: Vec<String> = self
            .paragraphs
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.text.clone())
            .collect();

        if include_tables {
            parts.extend(self.tables.iter().flat_map(Table::text_lines));
        }

        parts.join("\n")
    }
}

impl Default for DocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Document core properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Comments
    pub comments: Option<String>,

    /// Category
    pub category: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// Last editor
    pub last_modified_by: Option<String>,

    /// Revision number
    pub revision: Option<u32>,

    /// Version label
    pub version: Option<String>,

    /// Language tag
    pub language: Option<String>,
}

impl Metadata {
    /// Title if present and non-blank.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Author if present and non-blank.
    pub fn author(&self) -> Option<&str> {
        non_blank(self.author.as_deref())
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        let text_fields = [
            ("title", &self.title),
            ("author", &self.author),
            ("subject", &self.subject),
            ("keywords", &self.keywords),
            ("category", &self.category),
            ("last_modified_by", &self.last_modified_by),
            ("version", &self.version),
            ("language", &self.language),
        ];
        for (key, value) in text_fields {
            if let Some(value) = non_blank(value.as_deref()) {
                lines.push(format!("{}: \"{}\"", key, escape_yaml(value)));
            }
        }

        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }
        if let Some(ref modified) = self.modified {
            lines.push(format!("modified: {}", modified.to_rfc3339()));
        }
        if let Some(revision) = self.revision {
            lines.push(format!("revision: {}", revision));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = DocumentModel::new();
        assert!(doc.is_empty());
        assert!(doc.loaded);
        assert_eq!(doc.paragraph_count(), 0);
    }

    #[test]
    fn test_unloaded_document() {
        let mut doc = DocumentModel::unloaded();
        doc.add_paragraph(Paragraph::heading(0, "Ignored", 1));
        assert!(doc.headings().is_empty());
        assert_eq!(doc.raw_text(true), "");
    }

    #[test]
    fn test_raw_text() {
        let mut doc = DocumentModel::new();
        doc.add_paragraph(Paragraph::heading(0, "Intro", 1));
        doc.add_paragraph(Paragraph::new(1, "Some text."));
        doc.add_table(Table::from_rows(0, [vec!["a", "b"], vec!["c", ""]]));

        assert_eq!(doc.raw_text(true), "Intro\nSome text.\na | b\nc");
        assert_eq!(doc.raw_text(false), "Intro\nSome text.");
    }

    #[test]
    fn test_metadata_frontmatter() {
        let metadata = Metadata {
            title: Some("Test \"Document\"".to_string()),
            author: Some("Jane Doe".to_string()),
            subject: Some("  ".to_string()),
            revision: Some(3),
            ..Default::default()
        };

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Test \\\"Document\\\"\""));
        assert!(yaml.contains("author: \"Jane Doe\""));
        assert!(!yaml.contains("subject"));
        assert!(yaml.contains("revision: 3"));
    }

    #[test]
    fn test_metadata_accessors() {
        let metadata = Metadata {
            title: Some(String::new()),
            author: Some("A".to_string()),
            ..Default::default()
        };
        assert_eq!(metadata.title(), None);
        assert_eq!(metadata.author(), Some("A"));
    }
}
