//! Scaled-footrule rank aggregation.
//!
//! For a candidate ordering `P` of the union `C` of several rankings, the
//! distance is `sum over c in C, over each ranking t holding c, of
//! |t(c)/|t| - P(c)/|C||` with 1-based positions. The aggregate is the
//! ordering of least distance, found by trying every permutation.

use crate::error::{RankError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Candidate sets larger than this are refused unless the caller raises it.
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Rankings to aggregate, indexed by candidate.
#[derive(Debug, Clone)]
pub struct FootruleInput {
    candidates: Vec<String>,
    list_lens: Vec<usize>,
    /// `positions[list][candidate]` is the 1-based first position, if present.
    positions: Vec<Vec<Option<usize>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub distance: f64,
    pub order: Vec<String>,
}

impl FootruleInput {
    pub fn new(lists: &[Vec<String>]) -> Self {
        let mut candidates: Vec<String> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for url in lists.iter().flatten() {
            if !index.contains_key(url.as_str()) {
                index.insert(url.as_str(), candidates.len());
                candidates.push(url.clone());
            }
        }

        let positions = lists
            .iter()
            .map(|list| {
                let mut row = vec![None; candidates.len()];
                for (pos, url) in list.iter().enumerate() {
                    let slot = &mut row[index[url.as_str()]];
                    if slot.is_none() {
                        *slot = Some(pos + 1);
                    }
                }
                row
            })
            .collect();

        Self {
            list_lens: lists.iter().map(Vec::len).collect(),
            candidates,
            positions,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn list_count(&self) -> usize {
        self.list_lens.len()
    }

    /// Distance of an ordering given as candidate indices.
    pub fn distance(&self, order: &[usize]) -> f64 {
        let size = self.candidates.len() as f64;
        let mut total = 0.0;
        for (rank, &candidate) in order.iter().enumerate() {
            let placed = (rank + 1) as f64 / size;
            for (row, &len) in self.positions.iter().zip(&self.list_lens) {
                if let Some(pos) = row[candidate] {
                    total += (pos as f64 / len as f64 - placed).abs();
                }
            }
        }
        total
    }
}

/// Distance of an ordering given by url. Positions are scaled by the size of
/// the candidate set; urls outside it contribute nothing.
pub fn scaled_footrule(input: &FootruleInput, order: &[String]) -> f64 {
    let size = input.candidates.len() as f64;
    let mut total = 0.0;
    for (rank, url) in order.iter().enumerate() {
        let Some(candidate) = input.candidates.iter().position(|c| c == url) else {
            continue;
        };
        let placed = (rank + 1) as f64 / size;
        for (row, &len) in input.positions.iter().zip(&input.list_lens) {
            if let Some(pos) = row[candidate] {
                total += (pos as f64 / len as f64 - placed).abs();
            }
        }
    }
    total
}

fn permute(input: &FootruleInput, perm: &mut [usize], start: usize, best: &mut (f64, Vec<usize>)) {
    if start == perm.len() {
        let distance = input.distance(perm);
        if distance < best.0 {
            best.0 = distance;
            best.1 = perm.to_vec();
        }
        return;
    }
    for j in start..perm.len() {
        perm.swap(start, j);
        permute(input, perm, start + 1, best);
        perm.swap(start, j);
    }
}

/// Find the ordering of least scaled-footrule distance.
///
/// Permutations are visited in swap order starting from first-seen order;
/// the first one reaching the minimum wins.
pub fn aggregate(input: &FootruleInput, max_pages: usize) -> Result<Aggregation> {
    let n = input.candidates.len();
    if n == 0 {
        return Err(RankError::Aggregate("no pages to aggregate".to_string()));
    }
    if n > max_pages {
        return Err(RankError::Aggregate(format!(
            "{} distinct pages exceed the limit of {} for exhaustive aggregation",
            n, max_pages
        )));
    }

    info!(
        "Aggregating {} ranking(s) over {} page(s)",
        input.list_count(),
        n
    );
    let mut perm: Vec<usize> = (0..n).collect();
    let mut best = (f64::INFINITY, perm.clone());
    permute(input, &mut perm, 0, &mut best);
    debug!("Least distance {:.7}", best.0);

    Ok(Aggregation {
        distance: best.0,
        order: best.1.into_iter().map(|i| input.candidates[i].clone()).collect(),
    })
}
