//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Formats the built-in sources can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON document snapshot
    Snapshot,
    /// Markdown or plain text
    Markdown,
}

impl InputFormat {
    /// Extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Snapshot => "json",
            InputFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Snapshot => write!(f, "JSON snapshot"),
            InputFormat::Markdown => write!(f, "Markdown"),
        }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SNIFF_LEN: u64 = 512;

/// Detect the format of a file from its first bytes.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    BufReader::new(file).take(SNIFF_LEN).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format of in-memory data.
///
/// Data whose first non-whitespace byte (after an optional UTF-8 BOM) is `{`
/// is a snapshot; any other non-blank text is Markdown.
///
/// # Returns
/// * `Err(Error::UnknownFormat)` for empty or blank input
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        None => Err(Error::UnknownFormat),
        Some(b'{') => Ok(InputFormat::Snapshot),
        Some(_) => Ok(InputFormat::Markdown),
    }
}
