use linkrank::handlers::*;
use linkrank_core::RankConfig;
use linkrank_core::aggregate::Aggregation;
use linkrank_core::pipeline::RankOptions;
use linkrank_core::report::ReportFormat;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

fn write_page(dir: &Path, name: &str, links: &str) {
    fs::write(
        dir.join(format!("{}.txt", name)),
        format!("#start Section-1\n{}\n#end Section-1\n", links),
    )
    .unwrap();
}

fn temp_file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_expand_path_without_tilde() {
    assert_eq!(expand_path("corpus/pages"), PathBuf::from("corpus/pages"));
}

#[test]
fn test_expand_path_with_tilde() {
    if std::env::var("HOME").is_ok() {
        let expanded = expand_path("~/corpus");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("corpus"));
    }
}

#[test]
fn test_parse_report_format() {
    assert_eq!(parse_report_format("json").unwrap(), ReportFormat::Json);
    assert_eq!(parse_report_format("markdown").unwrap(), ReportFormat::Markdown);

    let err = parse_report_format("html").unwrap_err();
    assert!(err.to_string().contains("Unknown report format"));
}

#[test]
fn test_run_rank_text_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("collection.txt"), "url11 url12").unwrap();
    write_page(dir.path(), "url11", "url12");
    write_page(dir.path(), "url12", "url11");

    let options = RankOptions {
        corpus_dir: dir.path().to_path_buf(),
        config: RankConfig::new(0.85, 0.00001, 50),
        strict: true,
        show_progress: false,
    };
    let (report, outcome) = run_rank(options, ReportFormat::Text, None).unwrap();

    assert_eq!(report, "url11 1 0.5000000\nurl12 1 0.5000000\n");
    assert!(outcome.summary.converged);
}

#[test]
fn test_run_rank_reports_context() {
    let dir = TempDir::new().unwrap();
    let options = RankOptions {
        corpus_dir: dir.path().to_path_buf(),
        config: RankConfig::default(),
        strict: false,
        show_progress: false,
    };

    let err = run_rank(options, ReportFormat::Text, None).unwrap_err();
    assert!(err.to_string().starts_with("Ranking corpus at"));
}

#[test]
fn test_run_search() {
    let rank_list = temp_file_with("url31 3 0.2623546\nurl21 1 0.1843112\nurl34 2 0.1200000\n");
    let index = temp_file_with("mars url34 url21\nrover url34\n");

    let terms = vec!["mars".to_string(), "rover".to_string()];
    let hits = run_search(rank_list.path(), index.path(), &terms, 30).unwrap();

    let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(urls, vec!["url34", "url21"]);
}

#[test]
fn test_run_search_missing_index() {
    let rank_list = temp_file_with("a 1 0.5\n");
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("invertedIndex.txt");

    let err = run_search(rank_list.path(), &missing, &["a".to_string()], 30).unwrap_err();
    assert!(err.to_string().contains("Failed to load inverted index"));
}

#[test]
fn test_run_aggregate() -> Result<(), Box<dyn std::error::Error>> {
    let first = temp_file_with("a b c\n");
    let second = temp_file_with("a\nb\nc\n");

    let files = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let aggregation = run_aggregate(&files, 10)?;

    assert!(aggregation.distance.abs() < 1e-12);
    assert_eq!(aggregation.order, vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn test_run_aggregate_needs_two_files() {
    let only = temp_file_with("a b\n");
    let err = run_aggregate(&[only.path().to_path_buf()], 10).unwrap_err();
    assert!(err.to_string().contains("At least two rank files"));
}

#[test]
fn test_run_aggregate_page_limit() {
    let first = temp_file_with("a b c\n");
    let second = temp_file_with("d\n");

    let files = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    assert!(run_aggregate(&files, 3).is_err());
}

#[test]
fn test_render_aggregation() {
    let aggregation = Aggregation {
        distance: 1.0 / 3.0,
        order: vec!["x".to_string(), "y".to_string()],
    };
    assert_eq!(render_aggregation(&aggregation), "0.3333333\nx\ny\n");
}
