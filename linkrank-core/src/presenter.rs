//! Final ordering of ranked pages.

use crate::graph::LinkGraph;
use linkrank_corpus::RankListEntry;
use serde::{Deserialize, Serialize};

/// Snapshot of one page for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPage {
    pub url: String,
    pub out_degree: usize,
    pub weight: f64,
}

impl From<RankListEntry> for RankedPage {
    fn from(entry: RankListEntry) -> Self {
        Self {
            url: entry.url,
            out_degree: entry.out_degree,
            weight: entry.weight,
        }
    }
}

/// Every page of `graph`, heaviest first, equal weights in ascending url order.
/// The graph itself is not modified.
pub fn rank_listing(graph: &LinkGraph) -> Vec<RankedPage> {
    let mut pages: Vec<RankedPage> = graph
        .nodes()
        .iter()
        .map(|node| RankedPage {
            url: node.url().to_string(),
            out_degree: node.out_degree(),
            weight: node.weight(),
        })
        .collect();
    order_pages(&mut pages);
    pages
}

/// Two stable passes: by url, then by descending weight. The second pass
/// keeps the url order among equal weights.
pub fn order_pages(pages: &mut [RankedPage]) {
    pages.sort_by(|a, b| a.url.cmp(&b.url));
    pages.sort_by(|a, b| b.weight.total_cmp(&a.weight));
}

/// `<url> <outDegree> <weight>` with seven decimal places.
pub fn format_rank_line(page: &RankedPage) -> String {
    format!("{} {} {:.7}", page.url, page.out_degree, page.weight)
}
