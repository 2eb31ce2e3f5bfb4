//! Term search over a rank listing.

use crate::presenter::RankedPage;
use linkrank_corpus::InvertedIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Largest number of results printed by default.
pub const DEFAULT_RESULT_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub hits: usize,
    pub weight: f64,
}

/// Count, for every ranked page, how many postings of `terms` name it.
///
/// The result is ordered by hit count, descending. Pages with the same count
/// keep their order from `pages`, so ties fall back to rank order.
pub fn search_pages(pages: &[RankedPage], index: &InvertedIndex, terms: &[String]) -> Vec<SearchHit> {
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, page) in pages.iter().enumerate() {
        positions.entry(page.url.as_str()).or_default().push(idx);
    }

    let mut hits: Vec<SearchHit> = pages
        .iter()
        .map(|page| SearchHit {
            url: page.url.clone(),
            hits: 0,
            weight: page.weight,
        })
        .collect();

    for term in terms {
        for url in index.postings(term) {
            if let Some(slots) = positions.get(url.as_str()) {
                for &slot in slots {
                    hits[slot].hits += 1;
                }
            }
        }
    }

    hits.sort_by(|a, b| b.hits.cmp(&a.hits));
    hits
}

/// The first `limit` results that matched at least once.
pub fn top_matches(hits: &[SearchHit], limit: usize) -> Vec<&SearchHit> {
    hits.iter().take(limit).filter(|hit| hit.hits > 0).collect()
}
