//! Integration tests for the parser and presenters.
//!
//! Exercises the public parse/classify/render API end to end.

use assistant_core::parser::{
    NOT_AVAILABLE, RecordScanner, ScanState, UNKNOWN_TITLE, clean, is_paper_list, parse_records,
};
use assistant_core::present::{
    NO_PAPERS_MESSAGE, RECORD_DIVIDER, format_report, format_summary, to_table,
};
use assistant_core::{Presentation, present_response};

const SCENARIO_A: &str = "1. **Title**: Deep Learning Basics\nAuthors: J. Doe\nPublished: March 3, 2024\nSummary: An overview.\nhttps://arxiv.org/abs/1234.5678\n2. **Title**: Transformers Explained\nAuthors: A. Smith";

#[test]
fn test_scenario_a_two_labeled_records() {
    let records = parse_records(SCENARIO_A);
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.title, "Deep Learning Basics");
    assert_eq!(first.authors, "J. Doe");
    assert_eq!(first.published, "March 3, 2024");
    assert_eq!(first.summary, "An overview.");
    assert_eq!(first.url, "https://arxiv.org/abs/1234.5678");

    let second = &records[1];
    assert_eq!(second.title, "Transformers Explained");
    assert_eq!(second.authors, "A. Smith");
    assert!(second.published.is_empty());
    assert!(second.summary.is_empty());
    assert!(second.url.is_empty());
    assert!(second.categories.is_empty());
}

#[test]
fn test_scenario_b_bare_title_label_yields_nothing() {
    assert!(parse_records("Title: \n").is_empty());
}

#[test]
fn test_scenario_c_link_title_keeps_url_empty() {
    let records = parse_records("1. [Attention Is All You Need](https://arxiv.org/abs/1706.03762)");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Attention Is All You Need");
    assert!(records[0].url.is_empty());
}

#[test]
fn test_scenario_d_numbered_lines_are_a_list() {
    assert!(is_paper_list("1. Paper A\n2. Paper B\n3. Paper C"));
}

#[test]
fn test_boundary_count_matches_title_lines() {
    let text = "Intro line dropped\n1. **Bold**\n2. __Underscored__\n3. *Emphasis*\n4. plain numbered\nTitle: Labeled\n\nAuthors: X\n";
    assert_eq!(parse_records(text).len(), 5);
}

#[test]
fn test_plain_label_variants_each_open_a_record() {
    let records = parse_records("Title::Foo\nTitle :Bar\nTitle: : Baz");
    let titles: Vec<&str> = records.iter().map(|record| record.title.as_str()).collect();
    assert_eq!(titles, ["Foo", "Bar", "Baz"]);
}

#[test]
fn test_blank_lines_never_close_records() {
    let text = "1. **Paper**\n\n\nAuthors: Late Author\n\nhttps://arxiv.org/abs/9";
    let records = parse_records(text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].authors, "Late Author");
    assert_eq!(records[0].url, "https://arxiv.org/abs/9");
}

#[test]
fn test_duplicate_field_keeps_last_value() {
    let records = parse_records("1. **Paper**\nAuthors: First\nAuthors: Second");
    assert_eq!(records[0].authors, "Second");
}

#[test]
fn test_sentinel_title_never_empty() {
    let text = "1. ****\n2. \n3. [](https://arxiv.org/abs/1)\nTitle: real one";
    let records = parse_records(text);
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|record| !record.title.is_empty()));
    assert_eq!(records[0].title, UNKNOWN_TITLE);
    assert_eq!(records[1].title, UNKNOWN_TITLE);
    assert_eq!(records[3].title, "real one");
}

#[test]
fn test_classifier_agrees_with_parser() {
    let inputs = [
        SCENARIO_A,
        "Title: One\nTitle: Two",
        "  1. **Indented A**\n  2. **Indented B**",
    ];
    for input in inputs {
        assert!(parse_records(input).len() >= 2, "fixture should parse: {input}");
        assert!(is_paper_list(input), "classifier disagreed for: {input}");
    }
}

#[test]
fn test_single_record_is_not_a_list() {
    assert!(!is_paper_list("1. **Only One**\nAuthors: Somebody"));
    assert!(!is_paper_list("Just a paragraph about research."));
}

#[test]
fn test_empty_input_behaviors() {
    assert!(parse_records("").is_empty());
    assert!(!is_paper_list(""));
    assert_eq!(format_report(&[]), NO_PAPERS_MESSAGE);
    assert_eq!(format_summary(&[], 3), NO_PAPERS_MESSAGE);
    assert!(to_table(&[]).is_empty());
}

#[test]
fn test_field_precedence_summary_beats_url() {
    let records =
        parse_records("1. **Paper**\nSummary: see https://arxiv.org/abs/1 for details");
    assert_eq!(records[0].summary, "see https://arxiv.org/abs/1 for details");
    assert!(records[0].url.is_empty());
}

#[test]
fn test_published_requires_textual_month() {
    let records = parse_records("1. **Paper**\nPublished: 2024-03-03\n2. **Other**\nPublished: March 3rd, 2024");
    assert!(records[0].published.is_empty());
    assert_eq!(records[1].published, "March 3rd, 2024");
}

#[test]
fn test_clean_then_parse_escaped_upstream_answer() {
    let raw = r#"**Recent Papers**\n1. **Paper One**\n* Authors: A. B\n\"Summary\": quoted\n2. **Paper Two**"#;
    let cleaned = clean(raw);
    assert!(cleaned.starts_with("### **Recent Papers**\n"));
    assert!(cleaned.contains("- Authors: A. B"));

    let records = parse_records(&cleaned);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].authors, "A. B");
    assert_eq!(clean(&cleaned), cleaned);
}

#[test]
fn test_report_and_table_from_scenario_a() {
    let records = parse_records(SCENARIO_A);

    let report = format_report(&records);
    assert!(report.starts_with("**Title:** Deep Learning Basics\n\n**Authors:** J. Doe\n\n"));
    assert!(report.contains("**PDF Link:** https://arxiv.org/abs/1234.5678"));
    assert_eq!(report.matches(RECORD_DIVIDER).count(), 2);
    assert!(!report.contains("Categories"));

    let table = to_table(&records);
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].url, "https://arxiv.org/abs/1234.5678");
    assert_eq!(table[1].url, NOT_AVAILABLE);
}

#[test]
fn test_summary_limits_records() {
    let records = parse_records("1. A\n2. B\n3. C\n4. D");
    let summary = format_summary(&records, 3);
    assert!(summary.contains("Found 3 Recent Papers"));
    assert!(summary.contains("### 3. C"));
    assert!(!summary.contains("### 4. D"));
}

#[test]
fn test_scanner_state_machine_through_public_api() {
    let mut scanner = RecordScanner::new();
    scanner.feed_line("stray line");
    assert_eq!(scanner.state(), &ScanState::Idle);
    scanner.feed_line("1. **Open**");
    assert!(matches!(scanner.state(), ScanState::Open(record) if record.title == "Open"));
    scanner.feed_line("2. **Next**");
    assert_eq!(scanner.closed().len(), 1);
    assert_eq!(scanner.finish().len(), 2);
}

#[test]
fn test_present_response_parse_once_path() {
    match present_response(SCENARIO_A) {
        Presentation::Papers { records, table, report } => {
            assert_eq!(records.len(), 2);
            assert_eq!(table.len(), 2);
            assert_eq!(report, format_report(&records));
        }
        Presentation::Raw(_) => panic!("scenario A should present as papers"),
    }
}
