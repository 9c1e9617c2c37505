//! Analysis options and configuration.

/// Options for analyzing a loaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Words per estimated page
    pub words_per_page: usize,

    /// Reading speed in words per minute
    pub words_per_minute: usize,

    /// Sentence fragments must be longer than this many characters to count
    pub min_sentence_chars: usize,

    /// Length of each chapter's content preview
    pub preview_chars: usize,

    /// Length of the document text preview in the report
    pub text_preview_chars: usize,

    /// Include table rows in the raw text preview
    pub include_tables_in_text: bool,
}

impl AnalysisOptions {
    /// Create new analysis options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the words-per-page estimate.
    pub fn with_words_per_page(mut self, words: usize) -> Self {
        self.words_per_page = words.max(1);
        self
    }

    /// Set the reading speed.
    pub fn with_words_per_minute(mut self, words: usize) -> Self {
        self.words_per_minute = words.max(1);
        self
    }

    /// Set the minimum sentence length.
    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    /// Set the chapter preview length.
    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// Set the document text preview length.
    pub fn with_text_preview_chars(mut self, chars: usize) -> Self {
        self.text_preview_chars = chars;
        self
    }

    /// Include or exclude table rows from the text preview.
    pub fn with_tables_in_text(mut self, include: bool) -> Self {
        self.include_tables_in_text = include;
        self
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            words_per_page: 250,
            words_per_minute: 200,
            min_sentence_chars: 10,
            preview_chars: 200,
            text_preview_chars: 1000,
            include_tables_in_text: true,
        }
    }
}
