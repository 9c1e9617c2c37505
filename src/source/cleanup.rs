//! Text normalization applied to every paragraph and cell at load time.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Options for text cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove C0/C1 control characters (tab, newline and carriage return are kept)
    pub strip_control_chars: bool,

    /// Collapse whitespace runs to a single space and trim
    pub collapse_whitespace: bool,
}

impl CleanupOptions {
    /// Keep the original whitespace; only normalize and strip control characters.
    pub fn preserve_whitespace() -> Self {
        Self {
            collapse_whitespace: false,
            ..Self::default()
        }
    }

    /// Leave text untouched.
    pub fn none() -> Self {
        Self {
            normalize_unicode: false,
            strip_control_chars: false,
            collapse_whitespace: false,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            strip_control_chars: true,
            collapse_whitespace: true,
        }
    }
}

fn control_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\x00-\x08\x0b\x0c\x0e-\x1f\x7f-\x84\x86-\x9f]").unwrap())
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Text cleanup pipeline.
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    options: CleanupOptions,
}

impl TextCleaner {
    /// Create a cleaner with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Clean a piece of text.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut result: String = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        // Whitespace first: \x0b and \x0c are whitespace and should become spaces
        if self.options.collapse_whitespace {
            result = whitespace_run().replace_all(&result, " ").into_owned();
        }

        if self.options.strip_control_chars {
            result = control_chars().replace_all(&result, "").into_owned();
        }

        if self.options.collapse_whitespace {
            result = result.trim().to_string();
        }

        result
    }
}

/// Clean text with the default options.
pub fn clean_text(text: &str) -> String {
    TextCleaner::default().clean(text)
}
