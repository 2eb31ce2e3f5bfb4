// End-to-end tests for ranking an on-disk corpus

use linkrank_core::pipeline::{RankOptions, RankProgressCallback, execute_rank};
use linkrank_core::report::{ReportData, ReportFormat, generate_report};
use linkrank_core::{RankConfig, RankError};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn write_page(dir: &Path, name: &str, links: &[&str]) {
    let body = format!(
        "#start Section-1\n{}\n#end Section-1\n#start Section-2\nsome words\n#end Section-2\n",
        links.join(" ")
    );
    fs::write(dir.join(format!("{}.txt", name)), body).unwrap();
}

fn write_corpus(pages: &[(&str, &[&str])]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let names: Vec<&str> = pages.iter().map(|(name, _)| *name).collect();
    fs::write(dir.path().join("collection.txt"), names.join(" ")).unwrap();
    for (name, links) in pages {
        write_page(dir.path(), name, links);
    }
    dir
}

fn options(dir: &TempDir, config: RankConfig, strict: bool) -> RankOptions {
    RankOptions {
        corpus_dir: dir.path().to_path_buf(),
        config,
        strict,
        show_progress: false,
    }
}

// ============================================================================
// Happy Path
// ============================================================================

#[test]
fn test_symmetric_corpus_ranks_evenly() {
    let dir = write_corpus(&[("url11", &["url12"]), ("url12", &["url11"])]);
    let outcome = execute_rank(options(&dir, RankConfig::new(0.85, 0.00001, 100), true), None).unwrap();

    assert_eq!(outcome.pages.len(), 2);
    assert_eq!(outcome.pages[0].url, "url11");
    assert_eq!(outcome.pages[1].url, "url12");
    for page in &outcome.pages {
        assert!((page.weight - 0.5).abs() < 1e-6);
        assert_eq!(page.out_degree, 1);
    }
    assert!(outcome.summary.converged);
    assert_eq!(outcome.stats.pages, 2);
    assert_eq!(outcome.stats.links, 2);
}

#[test]
fn test_duplicate_and_self_links_are_counted() {
    let dir = write_corpus(&[("a", &["b", "b", "a"]), ("b", &["a"])]);
    let outcome = execute_rank(options(&dir, RankConfig::default(), true), None).unwrap();

    assert_eq!(outcome.stats.links, 2);
    assert_eq!(outcome.stats.duplicate_links, 1);
    assert_eq!(outcome.stats.self_links, 1);
}

#[test]
fn test_progress_callback_receives_stages() {
    let dir = write_corpus(&[("a", &["b"]), ("b", &[])]);
    let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&messages);
    let callback: RankProgressCallback = Arc::new(move |msg: String| sink.lock().unwrap().push(msg));

    execute_rank(options(&dir, RankConfig::default(), true), Some(callback)).unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Loaded 2 page(s)"));
    assert!(messages[1].contains("1 link(s)"));
}

#[test]
fn test_outcome_feeds_text_report() {
    let dir = write_corpus(&[("url11", &["url12"]), ("url12", &["url11"])]);
    let outcome = execute_rank(options(&dir, RankConfig::default(), true), None).unwrap();

    let data = ReportData::from_outcome(&outcome, "corpus");
    let text = generate_report(&data, ReportFormat::Text).unwrap();
    assert_eq!(text, "url11 1 0.5000000\nurl12 1 0.5000000\n");
}

// ============================================================================
// Unknown Links
// ============================================================================

#[test]
fn test_unknown_link_skipped_when_lenient() {
    let dir = write_corpus(&[("a", &["b", "ghost"]), ("b", &["a"])]);
    let outcome = execute_rank(options(&dir, RankConfig::default(), false), None).unwrap();

    assert_eq!(outcome.stats.unknown_links, 1);
    assert_eq!(outcome.stats.links, 2);
    assert!(outcome.pages.iter().all(|p| p.url != "ghost"));
}

#[test]
fn test_unknown_link_fails_when_strict() {
    let dir = write_corpus(&[("a", &["b", "ghost"]), ("b", &["a"])]);
    let err = execute_rank(options(&dir, RankConfig::default(), true), None).unwrap_err();

    match err {
        RankError::UnknownNode(name) => assert_eq!(name, "ghost"),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_bad_config_rejected_before_reading_corpus() {
    let dir = TempDir::new().unwrap();
    // no collection.txt: a read would fail with a corpus error instead
    let err = execute_rank(options(&dir, RankConfig::new(1.5, 0.0001, 10), true), None).unwrap_err();
    assert!(matches!(err, RankError::Config(_)));
}

#[test]
fn test_missing_page_file_is_corpus_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("collection.txt"), "a b").unwrap();
    write_page(dir.path(), "a", &["b"]);

    let err = execute_rank(options(&dir, RankConfig::default(), false), None).unwrap_err();
    assert!(matches!(err, RankError::Corpus(_)));
}

#[test]
fn test_empty_collection_is_noop() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("collection.txt"), "").unwrap();

    let outcome = execute_rank(options(&dir, RankConfig::default(), true), None).unwrap();
    assert!(outcome.pages.is_empty());
    assert_eq!(outcome.summary.iterations, 0);
}
