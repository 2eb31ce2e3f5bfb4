use crate::error::{RankError, Result};
use crate::graph::{LinkGraph, LinkOutcome};
use linkrank_corpus::PageRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Counters collected while building a graph from corpus records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    pub pages: usize,
    pub links: usize,
    pub duplicate_links: usize,
    pub self_links: usize,
    pub unknown_links: usize,
}

/// Build a graph from `records`.
///
/// Every record is registered before any link is added, so link order in the
/// corpus does not matter. A link to a page missing from the records fails the
/// build when `strict` is set and is skipped otherwise.
pub fn build_graph(records: &[PageRecord], strict: bool) -> Result<(LinkGraph, IngestStats)> {
    let mut graph = LinkGraph::with_capacity(records.len());
    let mut stats = IngestStats::default();

    for record in records {
        if graph.ensure_node(&record.url) {
            stats.pages += 1;
        }
    }

    for record in records {
        for target in &record.outlinks {
            match graph.link(&record.url, target) {
                Ok(LinkOutcome::Created) => stats.links += 1,
                Ok(LinkOutcome::AlreadyLinked) => stats.duplicate_links += 1,
                Ok(LinkOutcome::SelfLink) => {
                    debug!("Ignoring self link on {}", record.url);
                    stats.self_links += 1;
                }
                Err(RankError::UnknownNode(name)) if !strict => {
                    warn!("{} links to unknown page {}, skipping", record.url, name);
                    stats.unknown_links += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        "Built graph: {} page(s), {} link(s) ({} duplicate, {} self, {} unknown skipped)",
        stats.pages, stats.links, stats.duplicate_links, stats.self_links, stats.unknown_links
    );
    Ok((graph, stats))
}
