//! Rendering of analysis reports to JSON, Markdown and plain text.

mod json;
mod markdown;
mod options;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use text::{chapters_text, summary_text, to_text};

use crate::analysis::preview;
use crate::model::Chapter;

/// Format an integer with thousands separators, e.g. `12345` → `"12,345"`.
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Chapter preview cut to `max_chars`, or `None` when there is nothing to show.
pub(crate) fn chapter_preview(chapter: &Chapter, max_chars: usize) -> Option<String> {
    if chapter.content_preview.is_empty() {
        return None;
    }
    Some(preview(&chapter.content_preview, max_chars))
}
