//! Integration tests for the analysis pipeline.

use wordscope::analysis::{
    assign_paragraphs, assign_tables, bucket_size, build_summary, complexity_score,
    compute_statistics, count_sentences, extract_chapters, AnalysisOptions, ContentAssigner,
    ReadingLevel, StatisticsEngine, SummaryInput,
};
use wordscope::model::{Chapter, DocumentModel, Heading, Metadata, Paragraph, Table};
use wordscope::{analyze_document, Pipeline, ProcessingLog};

fn headings(entries: &[(u8, &str)]) -> Vec<Heading> {
    entries.iter()
        .enumerate()
        .map(|(i, (level, text))| Heading::new(i, *text, *level, i * 2))
        .collect()
}

fn paragraphs(count: usize) -> Vec<Paragraph> {
    (0..count)
        .map(|i| Paragraph::new(i, format!("paragraph number {}", i)))
        .collect()
}

fn chapters(count: usize) -> Vec<Chapter> {
    (1..=count)
        .map(|n| Chapter::new(n, format!("Chapter {}", n), 1, n * 10))
        .collect()
}

// ==================== Scenarios ====================

#[test]
fn test_scenario_a_subsection_nesting() {
    let result = extract_chapters(&headings(&[(1, "Intro"), (3, "Background"), (1, "Methods")]));

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].title, "Intro");
    assert_eq!(result[0].subsections.len(), 1);
    assert_eq!(result[0].subsections[0].title, "Background");
    assert_eq!(result[0].subsections[0].level, 3);
    assert_eq!(result[1].title, "Methods");
    assert!(result[1].subsections.is_empty());
}

#[test]
fn test_scenario_b_ordinal_bucketing() {
    assert_eq!(bucket_size(10, 3), 3);

    let assignment = assign_paragraphs(&paragraphs(10), chapters(3));
    let numbers: Vec<Option<usize>> = assignment.items.iter().map(|p| p.chapter_number).collect();
    assert_eq!(
        numbers,
        vec![
            Some(1), Some(1), Some(1),
            Some(2), Some(2), Some(2),
            Some(3), Some(3), Some(3), Some(3),
        ]
    );
    let counts: Vec<usize> = assignment.chapters.iter().map(|c| c.paragraph_count).collect();
    assert_eq!(counts, vec![3, 3, 4]);
}

#[test]
fn test_scenario_c_sentence_filtering() {
    assert_eq!(count_sentences("Hello world. This is a test! Really?", 10), 2);

    let mut doc = DocumentModel::new();
    doc.add_paragraph(Paragraph::new(0, "Hello world. This is a test! Really?"));
    let stats = compute_statistics(&doc, &AnalysisOptions::default());
    assert_eq!(stats.total_sentences, 2);
    assert_eq!(stats.total_words, 7);
}

#[test]
fn test_scenario_d_empty_document() {
    let report = analyze_document(&DocumentModel::new());

    assert!(report.is_success());
    assert_eq!(report.statistics, Default::default());
    assert_eq!(report.chapters().len(), 1);
    assert_eq!(report.chapters()[0].title, "Main Content");
    assert_eq!(report.chapters()[0].level, 1);
    assert_eq!(report.chapters()[0].start_position, 0);

    let quality = &report.summary.as_ref().unwrap().quality_indicators;
    assert!(!quality.has_title);
    assert!(!quality.has_author);
    assert!(!quality.has_headings);
    assert!(!quality.has_tables);
    assert_eq!(quality.structure_score, 0.0);
}

// ==================== Properties ====================

#[test]
fn test_chapters_never_empty_and_contiguous() {
    let cases: Vec<Vec<(u8, &str)>> = vec![
        vec![],
        vec![(4, "Orphan")],
        vec![(2, "A")],
        vec![(1, "A"), (2, "B"), (5, "c"), (1, "D"), (3, "e"), (2, "F")],
        vec![(0, "Title"), (1, "A")],
    ];

    for case in cases {
        let result = extract_chapters(&headings(&case));
        assert!(!result.is_empty());
        for (i, chapter) in result.iter().enumerate() {
            assert_eq!(chapter.chapter_number, i + 1);
        }
    }
}

#[test]
fn test_extract_chapters_idempotent() {
    let input = headings(&[(1, "A"), (3, "a1"), (2, "B"), (4, "b1"), (4, "b2")]);
    assert_eq!(extract_chapters(&input), extract_chapters(&input));
}

#[test]
fn test_assignment_conserves_counts() {
    for (n, k) in [(0, 1), (1, 1), (2, 5), (7, 3), (25, 4), (100, 7)] {
        let assignment = assign_paragraphs(&paragraphs(n), chapters(k));
        let total: usize = assignment.chapters.iter().map(|c| c.paragraph_count).sum();
        assert_eq!(total, n, "paragraphs n={} k={}", n, k);

        let tables: Vec<Table> = (0..n).map(|i| Table::from_rows(i, [vec!["x"]])).collect();
        let assignment = assign_tables(&tables, chapters(k));
        let total: usize = assignment.chapters.iter().map(|c| c.table_count).sum();
        assert_eq!(total, n, "tables n={} k={}", n, k);
    }
}

#[test]
fn test_assignment_without_chapters_is_unchanged() {
    let assignment = assign_paragraphs(&paragraphs(3), Vec::new());
    assert!(assignment.chapters.is_empty());
    assert_eq!(assignment.items.len(), 3);
    assert!(assignment.items.iter().all(|p| p.chapter_number.is_none()));
}

#[test]
fn test_content_preview_uses_first_non_empty_paragraph() {
    let input = vec![
        Paragraph::new(0, "   "),
        Paragraph::new(1, "a".repeat(250)),
        Paragraph::new(2, "later text"),
    ];
    let assignment = ContentAssigner::default().assign_paragraphs(&input, chapters(1));
    let preview = &assignment.chapters[0].content_preview;
    assert_eq!(preview.chars().count(), 203);
    assert!(preview.ends_with("..."));
}

#[test]
fn test_complexity_bounds() {
    assert_eq!(complexity_score(0, 5, 3, 1), 0.0);
    assert_eq!(complexity_score(100, 0, 3, 1), 0.0);

    for (words, sentences, paragraphs, headings) in
        [(1, 1, 1, 0), (50, 2, 1, 1), (5000, 10, 2, 0), (100_000, 1, 1, 0), (300, 30, 20, 20)]
    {
        let score = complexity_score(words, sentences, paragraphs, headings);
        assert!((0.0..=10.0).contains(&score), "score {} out of range", score);
    }
}

#[test]
fn test_pages_and_reading_time() {
    let engine = StatisticsEngine::default();
    let cases = [
        (1usize, 1usize, 0.01),
        (3, 1, 0.01),
        (9, 1, 0.04),
        (15, 1, 0.07),
        (21, 1, 0.1),
        (125, 1, 0.62),
        (375, 2, 1.88),
        (625, 2, 3.12),
        (1000, 4, 5.0),
    ];

    for (words, pages, minutes) in cases {
        let text = vec!["word"; words].join(" ");
        let stats = engine.compute(&[Paragraph::new(0, text)], &[], 1);
        assert_eq!(stats.total_pages, pages, "words={}", words);
        assert_eq!(stats.reading_time_minutes, minutes, "words={}", words);
    }
}

// ==================== Pipeline ====================

#[test]
fn test_pipeline_end_to_end() {
    let mut doc = DocumentModel::new();
    doc.metadata = Metadata {
        title: Some("Handbook".to_string()),
        author: Some("Ops Team".to_string()),
        ..Default::default()
    };
    doc.add_paragraph(Paragraph::title(0, "Handbook"));
    doc.add_paragraph(Paragraph::heading(1, "Onboarding", 1));
    for i in 2..8 {
        doc.add_paragraph(Paragraph::new(
            i,
            "New members get an account on the first day. They also get a mentor.",
        ));
    }
    doc.add_paragraph(Paragraph::heading(8, "Accounts", 3));
    doc.add_paragraph(Paragraph::heading(9, "Offboarding", 2));
    doc.add_paragraph(Paragraph::new(10, "Accounts are closed within one business day."));
    doc.add_table(Table::from_rows(0, [vec!["Step", "Owner"], vec!["Badge", "IT"]]));

    let mut log = ProcessingLog::new();
    let report = Pipeline::default().run(&doc, None, "handbook.md", &mut log);

    assert!(report.is_success());
    assert_eq!(report.metadata.file_path, "handbook.md");
    assert_eq!(report.statistics.total_headings, 4);
    assert_eq!(report.statistics.total_tables, 1);

    let titles: Vec<&str> = report.chapters().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Handbook", "Onboarding", "Offboarding"]);
    assert_eq!(report.chapters()[1].subsections[0].title, "Accounts");

    let paragraph_total: usize = report.chapters().iter().map(|c| c.paragraph_count).sum();
    assert_eq!(paragraph_total, doc.paragraphs.len());
    let table_total: usize = report.chapters().iter().map(|c| c.table_count).sum();
    assert_eq!(table_total, 1);

    let summary = report.summary.as_ref().unwrap();
    assert_eq!(summary.document_overview.title, "Handbook");
    assert_eq!(summary.document_overview.author, "Ops Team");
    assert_eq!(summary.structure_analysis.heading_levels["level_0"], 1);
    assert_eq!(summary.structure_analysis.heading_levels["level_3"], 1);
    assert!(summary.quality_indicators.has_tables);
    assert_eq!(
        summary.content_metrics.estimated_reading_level,
        ReadingLevel::from_complexity(report.statistics.complexity_score)
    );

    assert_eq!(log.len(), 7);
    assert_eq!(report.processing_log, log.entries());
}

#[test]
fn test_summary_defaults_for_missing_metadata() {
    let stats = Default::default();
    let metadata = Metadata::default();
    let summary = build_summary(&SummaryInput {
        stats: &stats,
        metadata: &metadata,
        paragraphs: &[],
        headings: &[],
        table_count: 0,
        chapters: &[],
    });

    assert_eq!(summary.document_overview.title, "Untitled");
    assert_eq!(summary.document_overview.author, "Unknown");
    assert_eq!(summary.content_metrics.estimated_reading_level, ReadingLevel::Elementary);
}
