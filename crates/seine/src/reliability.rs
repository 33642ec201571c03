//! Terminal-pair network reliability under a diameter constraint.
//!
//! The query answers: with every edge independently operational with its own
//! probability, what is the probability that vertex [`SOURCE`] can still
//! reach every terminal within the diameter budget? Computed exactly by
//! enumerating edge-failure states, so runtime is exponential in the edge
//! count on dense graphs.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::traverse::{CostModel, best_first_masked};

/// The fixed source vertex of every reliability query.
pub const SOURCE: VertexId = 0;

/// Knobs of a reliability query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReliabilityOptions {
    /// How path costs are accumulated against the diameter budget.
    pub cost: CostModel,
    /// Upper bound on explored subproblems; exceeding it fails the query
    /// with [`Error::Exhausted`] rather than returning a partial sum.
    /// `None` means unbounded.
    pub max_subproblems: Option<u64>,
}

/// One enumeration state: the set of failed edges, plus the first edge index
/// a child state may additionally fail. Children only fail indices at or
/// past `next`, so every subset of the edge list is visited at most once.
struct Subproblem {
    removed: Vec<EdgeId>,
    next: EdgeId,
}

/// Probability that [`SOURCE`] reaches every terminal within `diameter`,
/// summed over all edge-failure states that keep the terminals in reach.
///
/// States are expanded depth-first from the no-failures state. A state whose
/// surviving edges already miss the requirement is pruned without
/// descendants: failing more edges can only lengthen or destroy paths, never
/// restore them.
pub fn reliability(
    graph: &Graph,
    diameter: f64,
    terminals: &[VertexId],
    options: ReliabilityOptions,
) -> Result<f64> {
    graph.require_nonempty()?;
    if !(diameter.is_finite() && diameter >= 0.0) {
        return Err(Error::Precondition {
            message: format!("Diameter {diameter} must be finite and non-negative"),
        });
    }
    if terminals.is_empty() {
        return Err(Error::Precondition {
            message: "Reliability query needs at least one terminal".to_string(),
        });
    }
    for &terminal in terminals {
        graph.require_vertex(terminal, "Terminal")?;
    }

    let edge_total = graph.edge_count();
    let mut mask = vec![false; edge_total];
    let mut worklist = vec![Subproblem {
        removed: Vec::new(),
        next: 0,
    }];
    let mut explored: u64 = 0;
    let mut probability = 0.0;

    while let Some(item) = worklist.pop() {
        explored += 1;
        if let Some(limit) = options.max_subproblems {
            if explored > limit {
                return Err(Error::Exhausted { explored, limit });
            }
        }

        mask.fill(false);
        for &e in &item.removed {
            mask[e] = true;
        }

        let reach = best_first_masked(graph, SOURCE, options.cost, Some(&mask));
        if !terminals.iter().all(|&t| reach.distances()[t] <= diameter) {
            continue;
        }

        probability += state_probability(graph, &mask);

        for e in item.next..edge_total {
            let mut removed = Vec::with_capacity(item.removed.len() + 1);
            removed.extend_from_slice(&item.removed);
            removed.push(e);
            worklist.push(Subproblem {
                removed,
                next: e + 1,
            });
        }
    }

    debug!(explored, probability, "reliability enumeration finished");
    Ok(probability.clamp(0.0, 1.0))
}

/// Exact probability of one edge-failure state: present edges contribute
/// their reliability, failed edges the complement.
fn state_probability(graph: &Graph, removed: &[bool]) -> f64 {
    graph
        .edges()
        .iter()
        .zip(removed)
        .map(|(edge, &failed)| {
            if failed {
                1.0 - edge.reliability()
            } else {
                edge.reliability()
            }
        })
        .product()
}
