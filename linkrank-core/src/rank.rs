//! Weighted rank propagation.
//!
//! The update for page `i` sums, over every page `j` linking to it,
//! `old(j) * Wout(j, i) * Win(j, i)` where the numerators come from the
//! *target's* degree counters and the denominators are the *source's*
//! aggregates computed once before iterating:
//!
//! - `Wout(j, i) = out(i) / wOut(j)`, or `0.5 / wOut(j)` when `out(i) == 0`
//! - `Win(j, i)  = in(i) / wIn(j)`
//!
//! The new weight is `d * raw(i) + (1 - d) / n`.

use crate::error::{RankError, Result};
use crate::graph::{LinkGraph, Node, NodeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Stand-in for the out-degree of a page without outbound links.
pub const DANGLING_SENTINEL: f64 = 0.5;

/// Parameters of one rank computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Share of weight propagated along links, in `(0, 1)`.
    pub damping: f64,
    /// Stop once the summed absolute weight change of a pass is at or below this.
    pub min_diff: f64,
    /// Upper bound on passes; at least one.
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            min_diff: 0.00001,
            max_iterations: 1000,
        }
    }
}

impl RankConfig {
    pub fn new(damping: f64, min_diff: f64, max_iterations: usize) -> Self {
        Self {
            damping,
            min_diff,
            max_iterations,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::Config(format!(
                "damping factor must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }
        if !(self.min_diff >= 0.0 && self.min_diff.is_finite()) {
            return Err(RankError::Config(format!(
                "minimum difference must be a non-negative number, got {}",
                self.min_diff
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::Config(
                "maximum iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// How a rank computation ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankSummary {
    pub iterations: usize,
    pub final_diff: f64,
    pub converged: bool,
}

fn outbound_sums(graph: &LinkGraph, term: impl Fn(&Node) -> f64) -> Vec<f64> {
    let nodes = graph.nodes();
    nodes
        .iter()
        .map(|node| node.links.iter().map(|v| term(&nodes[v])).sum())
        .collect()
}

/// Store in every page the sum of its outbound neighbours' out-degrees,
/// counting a neighbour without outbound links as [`DANGLING_SENTINEL`].
pub fn compute_w_out(graph: &mut LinkGraph) {
    let sums = outbound_sums(graph, |v| {
        if v.out_degree == 0 {
            DANGLING_SENTINEL
        } else {
            v.out_degree as f64
        }
    });
    for (node, sum) in graph.nodes_mut().iter_mut().zip(sums) {
        node.w_out = sum;
    }
}

/// Store in every page the sum of its outbound neighbours' in-degrees.
pub fn compute_w_in(graph: &mut LinkGraph) {
    let sums = outbound_sums(graph, |v| v.in_degree as f64);
    for (node, sum) in graph.nodes_mut().iter_mut().zip(sums) {
        node.w_in = sum;
    }
}

fn divisor(value: f64, term: &'static str, source: &Node, target: &Node) -> Result<f64> {
    if value == 0.0 || !value.is_finite() {
        return Err(RankError::DegenerateWeight {
            from_url: source.url().to_string(),
            to_url: target.url().to_string(),
            term,
            value,
        });
    }
    Ok(value)
}

/// Undamped incoming weight of page `id`, read from the previous pass.
pub fn raw_weight(graph: &LinkGraph, id: NodeId) -> Result<f64> {
    let target = graph
        .node(id)
        .ok_or_else(|| RankError::UnknownNode(format!("#{}", id)))?;

    let out_numerator = if target.out_degree == 0 {
        DANGLING_SENTINEL
    } else {
        target.out_degree as f64
    };
    let in_numerator = target.in_degree as f64;

    let mut sum = 0.0;
    for source_id in graph.inbound_ids(id) {
        let source = &graph.nodes()[source_id];
        let w_out = divisor(source.w_out, "wOut", source, target)?;
        let w_in = divisor(source.w_in, "wIn", source, target)?;
        sum += source.old_weight * (out_numerator / w_out) * (in_numerator / w_in);
    }
    Ok(sum)
}

/// Summed absolute change between the current and previous weights.
pub fn diff_pr(graph: &LinkGraph) -> f64 {
    graph
        .nodes()
        .iter()
        .map(|node| (node.weight - node.old_weight).abs())
        .sum()
}

/// Rank every page of `graph` in place.
pub fn rank(graph: &mut LinkGraph, config: &RankConfig) -> Result<RankSummary> {
    rank_with_observer(graph, config, |_, _| {})
}

/// Like [`rank`], calling `observer(iteration, diff)` after each pass.
pub fn rank_with_observer<F>(
    graph: &mut LinkGraph,
    config: &RankConfig,
    mut observer: F,
) -> Result<RankSummary>
where
    F: FnMut(usize, f64),
{
    config.validate()?;

    if graph.is_empty() {
        info!("Graph is empty, nothing to rank");
        return Ok(RankSummary {
            iterations: 0,
            final_diff: 0.0,
            converged: true,
        });
    }

    let n = graph.node_count();
    let initial = 1.0 / n as f64;
    for node in graph.nodes_mut() {
        node.weight = initial;
        node.old_weight = initial;
    }
    compute_w_out(graph);
    compute_w_in(graph);

    let teleport = (1.0 - config.damping) / n as f64;
    let mut diff = f64::INFINITY;
    let mut iterations = 0;

    while iterations < config.max_iterations && (iterations == 0 || diff > config.min_diff) {
        for id in 0..n {
            let raw = raw_weight(graph, id)?;
            graph.nodes_mut()[id].weight = config.damping * raw + teleport;
        }
        diff = diff_pr(graph);
        for node in graph.nodes_mut() {
            node.old_weight = node.weight;
        }
        iterations += 1;
        debug!("Iteration {}: diff {:.10}", iterations, diff);
        observer(iterations, diff);
    }

    let unreached = graph.nodes().iter().filter(|node| node.in_degree == 0).count();
    if unreached > 0 {
        debug!(
            "{} page(s) have no inbound links and settle at {:.7}",
            unreached, teleport
        );
    }

    let converged = diff <= config.min_diff;
    info!(
        "Ranked {} page(s) in {} iteration(s), diff {:.10}{}",
        n,
        iterations,
        diff,
        if converged { "" } else { " (iteration cap reached)" }
    );

    Ok(RankSummary {
        iterations,
        final_diff: diff,
        converged,
    })
}
