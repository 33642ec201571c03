//! Depth-first traversal and best-first expansion.
//!
//! Traversal bookkeeping (visited set, parent links, tentative costs) lives
//! in per-call output values, never on the graph, so every query here is a
//! pure function of the graph and its parameters.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use crate::shortest_path::ShortestPaths;

/// How an edge is priced when accumulating path costs.
///
/// The diameter bound of a reliability query and the distances of a
/// shortest-path query are both expressed in the chosen model's unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    /// Every edge costs 1; a path's cost is its hop count.
    #[default]
    Hops,
    /// An edge costs its stored weight.
    Weight,
}

impl CostModel {
    pub(crate) fn edge_cost(self, edge: &Edge) -> f64 {
        match self {
            CostModel::Hops => 1.0,
            CostModel::Weight => edge.weight(),
        }
    }
}

/// What one depth-first sweep saw.
#[derive(Debug, Clone)]
pub struct DfsOutcome {
    visited: Vec<bool>,
    parents: Vec<Option<VertexId>>,
    cycle: bool,
}

impl DfsOutcome {
    fn fresh(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            parents: vec![None; n],
            cycle: false,
        }
    }

    pub fn visited(&self, v: VertexId) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&seen| seen).count()
    }

    /// The vertex `v` was first reached from, `None` for roots and
    /// unreached vertices.
    pub fn parent_of(&self, v: VertexId) -> Option<VertexId> {
        self.parents.get(v).copied().flatten()
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle
    }
}

/// Depth-first search from `start`, classifying back edges along the way.
pub fn depth_first(graph: &Graph, start: VertexId) -> Result<DfsOutcome> {
    graph.require_vertex(start, "Start")?;
    let mut outcome = DfsOutcome::fresh(graph.vertex_count());
    explore(graph, start, &mut outcome);
    Ok(outcome)
}

/// Whether the graph contains a cycle, checking every component.
pub fn has_cycle(graph: &Graph) -> Result<bool> {
    graph.require_nonempty()?;
    let mut outcome = DfsOutcome::fresh(graph.vertex_count());
    for v in 0..graph.vertex_count() {
        if !outcome.visited[v] {
            explore(graph, v, &mut outcome);
            if outcome.cycle {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Number of connected components: how many times a full depth-first sweep
/// has to restart.
pub fn component_count(graph: &Graph) -> Result<usize> {
    graph.require_nonempty()?;
    let mut outcome = DfsOutcome::fresh(graph.vertex_count());
    let mut components = 0;
    for v in 0..graph.vertex_count() {
        if !outcome.visited[v] {
            explore(graph, v, &mut outcome);
            components += 1;
        }
    }
    Ok(components)
}

fn explore(graph: &Graph, start: VertexId, outcome: &mut DfsOutcome) {
    let mut stack = vec![(start, None::<VertexId>)];
    while let Some((v, parent)) = stack.pop() {
        if outcome.visited[v] {
            continue;
        }
        outcome.visited[v] = true;
        outcome.parents[v] = parent;
        for next in graph.neighbors(v) {
            if !outcome.visited[next] {
                stack.push((next, Some(v)));
            } else if parent != Some(next) {
                // A visited neighbor other than the traversal parent closes
                // a cycle. Sound without edge bookkeeping: self-loops and
                // duplicate pairs are rejected at construction.
                outcome.cycle = true;
            }
        }
    }
}

/// Label-correcting best-first expansion from `start`.
///
/// Vertices are expanded cheapest-first (ties to the lowest id) and a
/// neighbor's tentative cost and parent are rewritten whenever a cheaper
/// route is found. Produces the same distances as
/// [`dijkstra`](crate::shortest_path::dijkstra).
pub fn best_first(graph: &Graph, start: VertexId, cost: CostModel) -> Result<ShortestPaths> {
    graph.require_vertex(start, "Start")?;
    Ok(best_first_masked(graph, start, cost, None))
}

/// [`best_first`] with an optional edge mask: edges whose index is flagged
/// in `removed` are skipped as if absent. The reliability enumerator's
/// reachability test.
pub(crate) fn best_first_masked(
    graph: &Graph,
    start: VertexId,
    cost: CostModel,
    removed: Option<&[bool]>,
) -> ShortestPaths {
    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut parents = vec![None; n];
    let mut frontier = BinaryHeap::new();
    distances[start] = 0.0;
    frontier.push(Candidate {
        cost: 0.0,
        vertex: start,
    });

    while let Some(Candidate { cost: reached, vertex }) = frontier.pop() {
        if reached > distances[vertex] {
            // Stale entry superseded by a cheaper relaxation.
            continue;
        }
        for &e in graph.incident_edges(vertex) {
            if removed.is_some_and(|mask| mask[e]) {
                continue;
            }
            let edge = &graph.edges()[e];
            let next = edge.other(vertex);
            let relaxed = reached + cost.edge_cost(edge);
            if relaxed < distances[next] {
                distances[next] = relaxed;
                parents[next] = Some(vertex);
                frontier.push(Candidate {
                    cost: relaxed,
                    vertex: next,
                });
            }
        }
    }

    ShortestPaths::new(start, distances, parents)
}

/// Frontier entry ordered for a min-heap: cheapest cost pops first, equal
/// costs pop the lowest vertex id first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    cost: f64,
    vertex: VertexId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}
