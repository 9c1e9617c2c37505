//! Rendering options and configuration.

/// Options for rendering analysis reports.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Include YAML frontmatter with document metadata (Markdown only)
    pub include_frontmatter: bool,

    /// Escape special Markdown characters in document text
    pub escape_special_chars: bool,

    /// Level-1 chapters listed in the chapter overview
    pub max_overview_chapters: usize,

    /// Chapters rendered with full details
    pub max_detailed_chapters: usize,

    /// Subsections listed per detailed chapter
    pub max_listed_subsections: usize,

    /// Show each detailed chapter's content preview
    pub include_chapter_previews: bool,

    /// Maximum characters of a chapter preview to show
    pub preview_chars: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude YAML frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set how many level-1 chapters the overview lists.
    pub fn with_max_overview_chapters(mut self, count: usize) -> Self {
        self.max_overview_chapters = count;
        self
    }

    /// Set how many chapters are rendered in detail.
    pub fn with_max_detailed_chapters(mut self, count: usize) -> Self {
        self.max_detailed_chapters = count;
        self
    }

    /// Set how many subsections are listed per chapter.
    pub fn with_max_listed_subsections(mut self, count: usize) -> Self {
        self.max_listed_subsections = count;
        self
    }

    /// Show or hide chapter previews.
    pub fn with_chapter_previews(mut self, include: bool) -> Self {
        self.include_chapter_previews = include;
        self
    }

    /// Set the preview length.
    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// Render every chapter and subsection in detail.
    pub fn exhaustive(mut self) -> Self {
        self.max_overview_chapters = usize::MAX;
        self.max_detailed_chapters = usize::MAX;
        self.max_listed_subsections = usize::MAX;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            escape_special_chars: true,
            max_overview_chapters: 10,
            max_detailed_chapters: 5,
            max_listed_subsections: 3,
            include_chapter_previews: true,
            preview_chars: 150,
        }
    }
}
