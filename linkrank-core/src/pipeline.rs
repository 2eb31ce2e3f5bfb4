use crate::error::Result;
use crate::ingest::{IngestStats, build_graph};
use crate::presenter::{RankedPage, rank_listing};
use crate::rank::{RankConfig, RankSummary, rank_with_observer};
use indicatif::{ProgressBar, ProgressStyle};
use linkrank_corpus::load_collection;
use std::path::PathBuf;
use std::sync::Arc;

/// Options for a full rank run over an on-disk corpus
#[derive(Debug, Clone)]
pub struct RankOptions {
    pub corpus_dir: PathBuf,
    pub config: RankConfig,
    /// Fail on links to pages outside the collection instead of skipping them
    pub strict: bool,
    pub show_progress: bool,
}

/// Everything a report needs about a finished run
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub pages: Vec<RankedPage>,
    pub summary: RankSummary,
    pub stats: IngestStats,
    pub config: RankConfig,
}

/// Callback for reporting pipeline stages
pub type RankProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

fn iteration_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Ranking...");
    pb
}

/// Load the corpus, build the graph, rank it and order the result.
pub fn execute_rank(
    options: RankOptions,
    progress_callback: Option<RankProgressCallback>,
) -> Result<RankOutcome> {
    let RankOptions {
        corpus_dir,
        config,
        strict,
        show_progress,
    } = options;

    // Reject bad parameters before touching the filesystem
    config.validate()?;

    let records = load_collection(&corpus_dir)?;
    if let Some(ref callback) = progress_callback {
        callback(format!(
            "Loaded {} page(s) from {}",
            records.len(),
            corpus_dir.display()
        ));
    }

    let (mut graph, stats) = build_graph(&records, strict)?;
    if let Some(ref callback) = progress_callback {
        callback(format!(
            "Built graph with {} page(s) and {} link(s)",
            graph.node_count(),
            stats.links
        ));
    }

    let progress_bar = show_progress.then(iteration_spinner);
    let result = rank_with_observer(&mut graph, &config, |iteration, diff| {
        if let Some(ref pb) = progress_bar {
            pb.set_message(format!("Iteration {} (diff {:.7})", iteration, diff));
            pb.tick();
        }
    });
    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }
    let summary = result?;

    Ok(RankOutcome {
        pages: rank_listing(&graph),
        summary,
        stats,
        config,
    })
}
