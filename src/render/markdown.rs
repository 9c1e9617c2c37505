//! Markdown rendering for analysis reports.

use crate::analysis::{level_statistics, Report, Summary};
use crate::error::Result;
use crate::model::Chapter;

use super::{chapter_preview, format_number, yes_no, RenderOptions};

/// Convert a report to Markdown.
pub fn to_markdown(report: &Report, options: &RenderOptions) -> Result<String> {
    MarkdownRenderer::new(options.clone()).render(report)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a report to Markdown.
    pub fn render(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&report.document_metadata.to_yaml_frontmatter());
            output.push('\n');
        }

        let title = report
            .summary
            .as_ref()
            .map(|s| s.document_overview.title.as_str())
            .or_else(|| report.document_metadata.title())
            .unwrap_or("Untitled");
        output.push_str(&format!("# Document Analysis: {}\n\n", self.escape(title)));
        output.push_str(&format!(
            "- **File:** {}\n- **Status:** {}\n- **Analyzed:** {}\n\n",
            self.escape(&report.metadata.file_path),
            report.metadata.status.as_str(),
            report.metadata.analysis_timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        ));

        if report.is_failed() {
            self.render_errors(&mut output, report);
            return Ok(output.trim().to_string());
        }

        if let Some(ref summary) = report.summary {
            self.render_summary(&mut output, summary);
        }
        self.render_chapters(&mut output, report.chapters());

        Ok(output.trim().to_string())
    }

    fn render_errors(&self, output: &mut String, report: &Report) {
        output.push_str("## Errors\n\n");
        for error in &report.errors {
            output.push_str(&format!(
                "- **{}:** {}\n",
                error.kind,
                self.escape(&error.message)
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, summary: &Summary) {
        let overview = &summary.document_overview;
        output.push_str("## Overview\n\n");
        output.push_str("| Property | Value |\n|---|---|\n");
        output.push_str(&format!("| Title | {} |\n", self.escape(&overview.title)));
        output.push_str(&format!("| Author | {} |\n", self.escape(&overview.author)));
        output.push_str(&format!("| Words | {} |\n", format_number(overview.total_words)));
        output.push_str(&format!("| Pages | {} |\n", overview.total_pages));
        output.push_str(&format!(
            "| Reading Time | {:.1} minutes |\n",
            overview.reading_time_minutes
        ));
        output.push_str(&format!(
            "| Complexity Score | {:.1}/10 |\n\n",
            overview.complexity_score
        ));

        let structure = &summary.structure_analysis;
        output.push_str("## Structure\n\n");
        output.push_str(&format!("- Chapters: {}\n", structure.total_chapters));
        output.push_str(&format!("- Paragraphs: {}\n", structure.total_paragraphs));
        output.push_str(&format!("- Headings: {}\n", structure.total_headings));
        output.push_str(&format!("- Tables: {}\n", structure.total_tables));
        output.push_str(&format!(
            "- Average paragraph length: {} words\n",
            structure.average_paragraph_length
        ));
        output.push_str(&format!(
            "- Subsections: {}\n",
            structure.chapter_structure.total_subsections
        ));
        for (level, count) in &structure.heading_levels {
            output.push_str(&format!("- Headings at `{}`: {}\n", level, count));
        }
        output.push('\n');

        let metrics = &summary.content_metrics;
        output.push_str("## Content Metrics\n\n");
        output.push_str(&format!("- Sentences: {}\n", metrics.total_sentences));
        output.push_str(&format!(
            "- Characters: {} ({} without spaces)\n",
            format_number(metrics.characters_with_spaces),
            format_number(metrics.characters_without_spaces)
        ));
        output.push_str(&format!(
            "- Average words per sentence: {}\n",
            metrics.average_words_per_sentence
        ));
        output.push_str(&format!(
            "- Estimated reading level: {}\n\n",
            metrics.estimated_reading_level
        ));

        let quality = &summary.quality_indicators;
        output.push_str("## Quality Indicators\n\n");
        output.push_str(&format!("- Has title: {}\n", yes_no(quality.has_title)));
        output.push_str(&format!("- Has author: {}\n", yes_no(quality.has_author)));
        output.push_str(&format!("- Has headings: {}\n", yes_no(quality.has_headings)));
        output.push_str(&format!("- Has tables: {}\n", yes_no(quality.has_tables)));
        output.push_str(&format!(
            "- Structure score: {:.1}/10\n\n",
            quality.structure_score
        ));
    }

    fn render_chapters(&self, output: &mut String, chapters: &[Chapter]) {
        if chapters.is_empty() {
            return;
        }

        output.push_str("## Chapters\n\n");
        output.push_str("| # | Title | Level | Words | Paragraphs | Tables | Subsections |\n");
        output.push_str("|---|---|---|---|---|---|---|\n");
        for chapter in chapters {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                chapter.chapter_number,
                self.escape(&chapter.title),
                chapter.level,
                format_number(chapter.word_count),
                chapter.paragraph_count,
                chapter.table_count,
                chapter.subsections.len(),
            ));
        }
        output.push('\n');

        output.push_str("## Chapter Details\n\n");
        for chapter in chapters.iter().take(self.options.max_detailed_chapters) {
            self.render_chapter(output, chapter);
        }
        if chapters.len() > self.options.max_detailed_chapters {
            output.push_str(&format!(
                "_... and {} more chapters._\n\n",
                chapters.len() - self.options.max_detailed_chapters
            ));
        }

        output.push_str("## Statistics by Level\n\n");
        output.push_str("| Level | Sections | Words | Avg Words |\n|---|---|---|---|\n");
        for stats in level_statistics(chapters) {
            output.push_str(&format!(
                "| {} | {} | {} | {:.0} |\n",
                stats.level,
                stats.count,
                format_number(stats.total_words),
                stats.average_words()
            ));
        }
        output.push('\n');
    }

    fn render_chapter(&self, output: &mut String, chapter: &Chapter) {
        output.push_str(&format!(
            "### {}. {}\n\n",
            chapter.chapter_number,
            self.escape(&chapter.title)
        ));
        output.push_str(&format!(
            "Level {} · {} words · {} paragraphs · {} tables\n\n",
            chapter.level,
            format_number(chapter.word_count),
            chapter.paragraph_count,
            chapter.table_count
        ));

        if chapter.has_subsections() {
            let limit = self.options.max_listed_subsections;
            for subsection in chapter.subsections.iter().take(limit) {
                output.push_str(&format!("- {}\n", self.escape(&subsection.title)));
            }
            if chapter.subsections.len() > limit {
                output.push_str(&format!(
                    "- ... and {} more\n",
                    chapter.subsections.len() - limit
                ));
            }
            output.push('\n');
        }

        if self.options.include_chapter_previews {
            if let Some(preview) = chapter_preview(chapter, self.options.preview_chars) {
                output.push_str(&format!("> {}\n\n", self.escape(&preview)));
            }
        }
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape Markdown special characters.
///
/// Only characters that are special anywhere in a line are escaped.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
