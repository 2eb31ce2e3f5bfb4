use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use linkrank_core::aggregate::{Aggregation, FootruleInput, aggregate};
use linkrank_core::pipeline::{RankOptions, RankOutcome, RankProgressCallback, execute_rank};
use linkrank_core::report::{ReportData, ReportFormat, generate_report, save_report};
use linkrank_core::search::{SearchHit, search_pages, top_matches};
use linkrank_core::{RankConfig, RankedPage};
use linkrank_corpus::{read_inverted_index, read_rank_list, read_url_ranking};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn parse_report_format(raw: &str) -> Result<ReportFormat> {
    ReportFormat::from_str(raw).with_context(|| format!("Unknown report format '{}'", raw))
}

fn status(quiet: bool, msg: String) {
    if !quiet {
        eprintln!("{} {}", "→".blue(), msg);
    }
}

// Helper functions behind the subcommand handlers

/// Rank a corpus and render the report in `format`.
pub fn run_rank(
    options: RankOptions,
    format: ReportFormat,
    progress_callback: Option<RankProgressCallback>,
) -> Result<(String, RankOutcome)> {
    let corpus = options.corpus_dir.display().to_string();
    let outcome = execute_rank(options, progress_callback)
        .with_context(|| format!("Ranking corpus at {} failed", corpus))?;

    let data = ReportData::from_outcome(&outcome, &corpus);
    let report = generate_report(&data, format).context("Failed to render report")?;
    Ok((report, outcome))
}

/// Matching pages for `terms`, best first, at most `limit` of them.
pub fn run_search(
    rank_list: &Path,
    index: &Path,
    terms: &[String],
    limit: usize,
) -> Result<Vec<SearchHit>> {
    let pages: Vec<RankedPage> = read_rank_list(rank_list)
        .with_context(|| format!("Failed to load rank list {}", rank_list.display()))?
        .into_iter()
        .map(RankedPage::from)
        .collect();
    if pages.is_empty() {
        warn!("Rank list {} holds no pages", rank_list.display());
    }

    let index = read_inverted_index(index)
        .with_context(|| format!("Failed to load inverted index {}", index.display()))?;
    if index.is_empty() {
        warn!("Inverted index holds no terms");
    }

    let hits = search_pages(&pages, &index, terms);
    Ok(top_matches(&hits, limit).into_iter().cloned().collect())
}

/// Aggregate the url rankings stored in `files`.
pub fn run_aggregate(files: &[PathBuf], max_pages: usize) -> Result<Aggregation> {
    if files.len() < 2 {
        bail!("At least two rank files are needed, got {}", files.len());
    }

    let lists = files
        .iter()
        .map(|path| {
            read_url_ranking(path)
                .with_context(|| format!("Failed to load ranking {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let input = FootruleInput::new(&lists);
    Ok(aggregate(&input, max_pages)?)
}

/// Distance on the first line, then one url per line.
pub fn render_aggregation(aggregation: &Aggregation) -> String {
    let mut out = format!("{:.7}\n", aggregation.distance);
    for url in &aggregation.order {
        out.push_str(url);
        out.push('\n');
    }
    out
}

pub fn handle_rank(args: &ArgMatches, quiet: bool) -> Result<()> {
    let damping = *args
        .get_one::<f64>("DAMPING")
        .context("Missing damping factor")?;
    let min_diff = *args
        .get_one::<f64>("MIN_DIFF")
        .context("Missing minimum difference")?;
    let max_iterations = *args
        .get_one::<usize>("MAX_ITERATIONS")
        .context("Missing maximum iterations")?;
    let corpus_dir = args
        .get_one::<String>("corpus-dir")
        .map(|dir| expand_path(dir))
        .unwrap_or_else(|| PathBuf::from("."));
    let format = match args.get_one::<String>("format") {
        Some(raw) => parse_report_format(raw)?,
        None => ReportFormat::Text,
    };
    let output = args.get_one::<String>("output").map(|path| expand_path(path));
    let strict = args.get_flag("strict");

    let options = RankOptions {
        corpus_dir,
        config: RankConfig::new(damping, min_diff, max_iterations),
        strict,
        show_progress: !quiet,
    };
    let progress_callback: RankProgressCallback = Arc::new(move |msg: String| status(quiet, msg));

    let (report, outcome) = run_rank(options, format, (!quiet).then_some(progress_callback))?;

    match output {
        Some(path) => {
            save_report(&report, &path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            status(quiet, format!("Report saved to {}", path.display()));
        }
        None => print!("{}", report),
    }

    if !quiet {
        let summary = outcome.summary;
        eprintln!(
            "{} Ranked {} page(s) in {} iteration(s), diff {:.7}{}",
            "✓".green().bold(),
            outcome.pages.len(),
            summary.iterations,
            summary.final_diff,
            if summary.converged {
                String::new()
            } else {
                " (iteration cap reached)".yellow().to_string()
            }
        );
    }
    Ok(())
}

pub fn handle_search(args: &ArgMatches, quiet: bool) -> Result<()> {
    let terms: Vec<String> = args
        .get_many::<String>("TERM")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let rank_list = expand_path(
        args.get_one::<String>("rank-list")
            .context("Missing rank list path")?,
    );
    let index = expand_path(args.get_one::<String>("index").context("Missing index path")?);
    let limit = *args.get_one::<usize>("limit").context("Missing result limit")?;

    let matches = run_search(&rank_list, &index, &terms, limit)?;
    for hit in &matches {
        println!("{}", hit.url);
    }

    if !quiet {
        if matches.is_empty() {
            eprintln!("{} No pages matched", "⚠".yellow().bold());
        } else {
            eprintln!("{} {} page(s) matched", "✓".green().bold(), matches.len());
        }
    }
    Ok(())
}

pub fn handle_aggregate(args: &ArgMatches, quiet: bool) -> Result<()> {
    let files: Vec<PathBuf> = args
        .get_many::<String>("FILE")
        .map(|values| values.map(|raw| expand_path(raw)).collect())
        .unwrap_or_default();
    let max_pages = *args
        .get_one::<usize>("max-pages")
        .context("Missing page limit")?;

    status(quiet, format!("Aggregating {} ranking(s)", files.len()));
    let aggregation = run_aggregate(&files, max_pages)?;
    print!("{}", render_aggregation(&aggregation));
    Ok(())
}
