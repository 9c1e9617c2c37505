//! Table types.

use serde::{Deserialize, Serialize};

/// A table as a grid of cell text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Position among the document's tables
    pub index: usize,

    /// Number of rows
    pub rows: usize,

    /// Number of columns
    pub columns: usize,

    /// Cell text, row by row
    pub data: Vec<Vec<String>>,

    /// Table style name
    pub style_name: Option<String>,
}

impl Table {
    /// Create a table from a cell grid, deriving its dimensions.
    ///
    /// The column count is the widest row, so ragged grids are counted fully.
    pub fn new(index: usize, data: Vec<Vec<String>>) -> Self {
        let columns = data.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            index,
            rows: data.len(),
            columns,
            data,
            style_name: None,
        }
    }

    /// Create a table from string slices.
    pub fn from_rows<S: Into<String>>(
        index: usize,
        rows: impl IntoIterator<Item = impl IntoIterator<Item = S>>,
    ) -> Self {
        let data = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new(index, data)
    }

    /// Set the style name and return self.
    pub fn styled(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = Some(style_name.into());
        self
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Plain-text lines, one per row with non-empty cells joined by `" | "`.
    ///
    /// Rows without any text produce no line.
    pub fn text_lines(&self) -> Vec<String> {
        self.data
            .iter()
            .filter_map(|row| {
                let cells: Vec<&str> = row
                    .iter()
                    .map(|cell| cell.trim())
                    .filter(|cell| !cell.is_empty())
                    .collect();
                if cells.is_empty() {
                    None
                } else {
                    Some(cells.join(" | "))
                }
            })
            .collect()
    }
}
