//! JSON document snapshots and the single conversion into [`DocumentModel`].
//!
//! Every source funnels its output through [`RawDocument::into_model`], so
//! text cleanup, empty-paragraph filtering and table dimensions are decided
//! in one place.

use super::cleanup::TextCleaner;
use super::options::LoadOptions;
use super::DocumentSource;
use crate::error::Result;
use crate::model::{DocumentModel, Metadata, Paragraph, Table, TextFormat};
use serde::{Deserialize, Serialize};

/// Document as exchanged with external loaders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub paragraphs: Vec<RawParagraph>,

    #[serde(default)]
    pub tables: Vec<RawTable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_count: Option<usize>,
}

/// Paragraph record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawParagraph {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,

    #[serde(default)]
    pub bold: bool,

    #[serde(default)]
    pub italic: bool,

    #[serde(default)]
    pub underline: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
}

impl RawParagraph {
    /// A paragraph with text and style only.
    pub fn styled(text: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_name: Some(style_name.into()),
            ..Default::default()
        }
    }
}

/// Table record. `rows` and `columns` are derived from `data` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,

    #[serde(default)]
    pub data: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
}

impl RawDocument {
    /// Parse a JSON snapshot.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        Ok(serde_json::from_slice(data)?)
    }

    /// Convert into the analysis model.
    ///
    /// Paragraph and cell text is cleaned; paragraphs left empty are dropped
    /// but the survivors keep their original position as `index`. Tables are
    /// skipped entirely when `options.extract_tables` is false.
    pub fn into_model(self, options: &LoadOptions) -> DocumentModel {
        let cleaner = TextCleaner::new(options.cleanup.clone());

        let paragraphs: Vec<Paragraph> = self
            .paragraphs
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let text = cleaner.clean(&raw.text);
                if text.trim().is_empty() {
                    return None;
                }
                let style_name = raw.style_name.unwrap_or_else(|| "Normal".to_string());
                let mut paragraph = Paragraph::with_style(index, text, style_name);
                paragraph.format = TextFormat {
                    bold: raw.bold,
                    italic: raw.italic,
                    underline: raw.underline,
                    font_name: raw.font_name,
                    font_size: raw.font_size,
                };
                paragraph.alignment = raw.alignment;
                Some(paragraph)
            })
            .collect();

        let tables: Vec<Table> = if options.extract_tables {
            self.tables
                .into_iter()
                .enumerate()
                .map(|(index, raw)| {
                    let data: Vec<Vec<String>> = raw
                        .data
                        .iter()
                        .map(|row| row.iter().map(|cell| cleaner.clean(cell)).collect())
                        .collect();
                    let mut table = Table::new(index, data);
                    if let Some(rows) = raw.rows {
                        table.rows = rows;
                    }
                    if let Some(columns) = raw.columns {
                        table.columns = columns;
                    }
                    table.style_name = raw.style_name;
                    table
                })
                .collect()
        } else {
            Vec::new()
        };

        log::debug!(
            "Converted snapshot: {} paragraphs, {} tables",
            paragraphs.len(),
            tables.len()
        );

        DocumentModel {
            metadata: self.metadata,
            paragraphs,
            tables,
            section_count: self.section_count.unwrap_or(1),
            loaded: true,
        }
    }
}

/// Loads JSON document snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotSource;

impl SnapshotSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for SnapshotSource {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn load_bytes(&self, data: &[u8], options: &LoadOptions) -> Result<DocumentModel> {
        Ok(RawDocument::from_json(data)?.into_model(options))
    }
}
