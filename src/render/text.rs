//! Plain-text rendering for analysis reports.

use crate::analysis::{level_statistics, Report};
use crate::error::Result;

use super::{chapter_preview, format_number, yes_no, RenderOptions};

const RULE: usize = 50;

/// Convert a report to plain text: the summary followed by the chapter analysis.
pub fn to_text(report: &Report, options: &RenderOptions) -> Result<String> {
    let mut output = summary_text(report);
    if report.is_success() {
        output.push('\n');
        output.push_str(&chapters_text(report, options));
    }
    Ok(output.trim_end().to_string())
}

/// Summary section: overview, structure, metrics and quality indicators.
///
/// Failed reports list their errors instead.
pub fn summary_text(report: &Report) -> String {
    let mut out = String::new();

    if report.is_failed() {
        out.push_str("Analysis failed!\n");
        for error in &report.errors {
            out.push_str(&format!("   Error: {}\n", error.message));
        }
        return out;
    }

    let Some(summary) = report.summary.as_ref() else {
        out.push_str("No summary available\n");
        return out;
    };
    let overview = &summary.document_overview;
    let structure = &summary.structure_analysis;
    let metrics = &summary.content_metrics;
    let quality = &summary.quality_indicators;

    out.push_str("COMPREHENSIVE DOCUMENT ANALYSIS\n");
    out.push_str(&"=".repeat(RULE));
    out.push('\n');

    out.push_str("\nDocument Overview:\n");
    out.push_str(&format!("   Title: {}\n", overview.title));
    out.push_str(&format!("   Author: {}\n", overview.author));
    out.push_str(&format!("   Words: {}\n", format_number(overview.total_words)));
    out.push_str(&format!("   Pages: {}\n", overview.total_pages));
    out.push_str(&format!("   Reading Time: {:.1} minutes\n", overview.reading_time_minutes));
    out.push_str(&format!("   Complexity Score: {:.1}/10\n", overview.complexity_score));

    out.push_str("\nStructure Analysis:\n");
    out.push_str(&format!("   Chapters: {}\n", structure.total_chapters));
    out.push_str(&format!("   Paragraphs: {}\n", structure.total_paragraphs));
    out.push_str(&format!("   Headings: {}\n", structure.total_headings));
    out.push_str(&format!("   Tables: {}\n", structure.total_tables));
    out.push_str(&format!(
        "   Avg Paragraph Length: {} words\n",
        structure.average_paragraph_length
    ));
    out.push_str(&format!(
        "   Subsections: {}\n",
        structure.chapter_structure.total_subsections
    ));
    out.push_str(&format!(
        "   Avg Subsections/Chapter: {}\n",
        structure.chapter_structure.average_subsections_per_chapter
    ));

    out.push_str("\nContent Metrics:\n");
    out.push_str(&format!("   Sentences: {}\n", metrics.total_sentences));
    out.push_str(&format!(
        "   Avg Words/Sentence: {}\n",
        metrics.average_words_per_sentence
    ));
    out.push_str(&format!(
        "   Estimated Reading Level: {}\n",
        metrics.estimated_reading_level
    ));

    out.push_str("\nQuality Indicators:\n");
    out.push_str(&format!("   Has Title: {}\n", yes_no(quality.has_title)));
    out.push_str(&format!("   Has Author: {}\n", yes_no(quality.has_author)));
    out.push_str(&format!("   Has Headings: {}\n", yes_no(quality.has_headings)));
    out.push_str(&format!("   Has Tables: {}\n", yes_no(quality.has_tables)));
    out.push_str(&format!("   Structure Score: {:.1}/10\n", quality.structure_score));

    out.push('\n');
    out.push_str(&"=".repeat(RULE));
    out.push('\n');
    out
}

/// Chapter-by-chapter section.
pub fn chapters_text(report: &Report, options: &RenderOptions) -> String {
    let chapters = report.chapters();
    let structure = &report.content_analysis.chapter_structure;
    let mut out = String::new();

    if chapters.is_empty() {
        out.push_str("No chapters detected in document\n");
        return out;
    }

    out.push_str("CHAPTER-BY-CHAPTER ANALYSIS\n");
    out.push_str(&"=".repeat(RULE));
    out.push('\n');

    out.push_str("\nStructure Overview:\n");
    out.push_str(&format!("   Total Chapters: {}\n", structure.total_chapters));
    out.push_str(&format!("   Total Subsections: {}\n", structure.total_subsections));
    out.push_str(&format!(
        "   Avg Subsections per Chapter: {}\n",
        structure.average_subsections_per_chapter
    ));

    out.push_str("\nChapter Overview:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');
    let main_chapters: Vec<_> = chapters.iter().filter(|c| c.level == 1).collect();
    for chapter in main_chapters.iter().take(options.max_overview_chapters) {
        out.push_str(&format!(
            "   • {} ({} words, {} paragraphs)\n",
            chapter.title, chapter.word_count, chapter.paragraph_count
        ));
    }
    if main_chapters.len() > options.max_overview_chapters {
        out.push_str(&format!(
            "   ... and {} more chapters\n",
            main_chapters.len() - options.max_overview_chapters
        ));
    }

    out.push_str("\nDetailed Chapter Analysis:\n");
    out.push_str(&"-".repeat(30));
    out.push('\n');

    for chapter in chapters.iter().take(options.max_detailed_chapters) {
        out.push_str(&format!("\nChapter {}: {}\n", chapter.chapter_number, chapter.title));
        out.push_str(&format!("   Level: {}\n", chapter.level));
        out.push_str(&format!("   Words: {}\n", format_number(chapter.word_count)));
        out.push_str(&format!("   Paragraphs: {}\n", chapter.paragraph_count));
        out.push_str(&format!("   Tables: {}\n", chapter.table_count));

        if chapter.has_subsections() {
            out.push_str(&format!("   Subsections ({}):\n", chapter.subsections.len()));
            for subsection in chapter.subsections.iter().take(options.max_listed_subsections) {
                out.push_str(&format!("     • {}\n", subsection.title));
            }
            if chapter.subsections.len() > options.max_listed_subsections {
                out.push_str(&format!(
                    "     ... and {} more\n",
                    chapter.subsections.len() - options.max_listed_subsections
                ));
            }
        }

        if options.include_chapter_previews {
            if let Some(preview) = chapter_preview(chapter, options.preview_chars) {
                out.push_str(&format!("   Preview: {}\n", preview));
            }
        }
    }

    if chapters.len() > options.max_detailed_chapters {
        out.push_str(&format!(
            "\n   ... and {} more chapters with detailed content\n",
            chapters.len() - options.max_detailed_chapters
        ));
        out.push_str("   (See full analysis in the saved JSON file)\n");
    }

    out.push_str("\nStatistics by Level:\n");
    out.push_str(&"-".repeat(25));
    out.push('\n');
    for stats in level_statistics(chapters) {
        out.push_str(&format!(
            "   Level {}: {} sections, avg {:.0} words each\n",
            stats.level,
            stats.count,
            stats.average_words()
        ));
    }

    out
}
