//! Integration tests for report rendering.

use wordscope::render::{
    chapters_text, from_json, summary_text, to_json, to_markdown, to_text, JsonFormat,
    RenderOptions,
};
use wordscope::{Analyzer, Error, Report, Wordscope};

const GUIDE: &[u8] = b"% Release Notes\n% Platform Team\n\n\
# Version 2\n\nThe second version adds streaming exports and faster imports.\n\n\
### Exports\n\nExports now stream directly to disk.\n\n\
### Imports\n\nImports are twice as fast on large files.\n\n\
### Fixes\n\nSeveral crashes on startup were fixed.\n\n\
### Removals\n\nThe legacy sync endpoint is gone.\n\n\
# Version 1\n\nThe first public release.\n\n\
| Feature | Status |\n|---|---|\n| Export | beta |\n";

fn report() -> Report {
    Analyzer::default().analyze_bytes(GUIDE, "md").unwrap()
}

#[test]
fn test_json_roundtrip_preserves_report() {
    let report = report();
    let json = to_json(&report, JsonFormat::Pretty).unwrap();
    let parsed = from_json(&json).unwrap();

    assert_eq!(parsed.metadata, report.metadata);
    assert_eq!(parsed.statistics.total_words, report.statistics.total_words);
    assert_eq!(parsed.content_analysis.paragraphs, report.content_analysis.paragraphs);
    assert_eq!(parsed.content_analysis.headings, report.content_analysis.headings);
    assert_eq!(parsed.chapters(), report.chapters());
    assert_eq!(parsed.processing_log, report.processing_log);
}

#[test]
fn test_json_field_names() {
    let json = to_json(&report(), JsonFormat::Compact).unwrap();
    assert!(!json.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["status"], "completed");
    assert!(value["metadata"]["analysis_timestamp"].is_string());
    assert_eq!(value["document_metadata"]["title"], "Release Notes");
    assert!(value["statistics"]["total_words"].as_u64().unwrap() > 0);
    assert_eq!(value["content_analysis"]["chapters"].as_array().unwrap().len(), 3);
    assert_eq!(value["content_analysis"]["paragraphs"][1]["chapter_number"], 1);
    assert!(value["content_analysis"]["paragraphs"][1]["chapter_title"].is_string());
    assert!(value["summary"]["content_metrics"]["estimated_reading_level"].is_string());
    assert!(value["summary"]["quality_indicators"]["has_author"].as_bool().unwrap());
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(from_json("not json").is_err());
}

#[test]
fn test_markdown_limits_subsections() {
    let md = to_markdown(&report(), &RenderOptions::default()).unwrap();

    assert!(md.contains("# Document Analysis: Release Notes"));
    assert!(md.contains("| Author | Platform Team |"));
    assert!(md.contains("- Exports\n"));
    assert!(md.contains("- Fixes\n"));
    assert!(!md.contains("- Removals\n"));
    assert!(md.contains("- ... and 1 more"));
    assert!(md.contains("| 1 | 3 |"));
}

#[test]
fn test_markdown_exhaustive_lists_everything() {
    let md = to_markdown(&report(), &RenderOptions::default().exhaustive()).unwrap();
    assert!(md.contains("- Removals\n"));
    assert!(!md.contains("more chapters"));
}

#[test]
fn test_text_sections() {
    let report = report();
    let summary = summary_text(&report);
    assert!(summary.contains("Title: Release Notes"));
    assert!(summary.contains("Author: Platform Team"));
    assert!(summary.contains("Chapters: 3"));
    assert!(summary.contains("Has Tables: Yes"));

    let chapters = chapters_text(&report, &RenderOptions::default());
    assert!(chapters.contains("Chapter 2: Version 2"));
    assert!(chapters.contains("Subsections (4):"));
    assert!(chapters.contains("     ... and 1 more"));
    assert!(chapters.contains("Level 1: 3 sections"));

    let full = to_text(&report, &RenderOptions::default()).unwrap();
    assert!(full.contains("COMPREHENSIVE DOCUMENT ANALYSIS"));
    assert!(full.contains("CHAPTER-BY-CHAPTER ANALYSIS"));
}

#[test]
fn test_failed_report_renders_everywhere() {
    let report = Analyzer::default().analyze_path("missing/notes.md");
    assert!(report.is_failed());

    let json = to_json(&report, JsonFormat::Pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["status"], "failed");
    assert_eq!(value["errors"][0]["type"], "FileValidationError");
    assert!(value.get("summary").is_none());

    let md = to_markdown(&report, &RenderOptions::default()).unwrap();
    assert!(md.contains("## Errors"));

    let text = to_text(&report, &RenderOptions::default()).unwrap();
    assert!(text.starts_with("Analysis failed!"));
}

#[test]
fn test_builder_renders_with_frontmatter() {
    let result = Wordscope::new().with_frontmatter().analyze_bytes(GUIDE, "md").unwrap();
    let md = result.to_markdown().unwrap();
    assert!(md.starts_with("---\ntitle: \"Release Notes\"\nauthor: \"Platform Team\""));
}

#[test]
fn test_builder_missing_file_is_error() {
    let result = Wordscope::new().analyze("missing/notes.md");
    assert!(matches!(result, Err(Error::Validation { .. })));
}
