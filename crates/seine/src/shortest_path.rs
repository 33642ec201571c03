//! Single-source shortest paths.

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::traverse::CostModel;

/// Distances and parent links computed from a single source.
///
/// Unreachable vertices carry `+infinity` distance and no parent.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<f64>,
    parents: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: VertexId,
        distances: Vec<f64>,
        parents: Vec<Option<VertexId>>,
    ) -> Self {
        Self {
            source,
            distances,
            parents,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance per vertex id, `+infinity` where unreachable.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Cost of the cheapest path to `v`, `None` when `v` is unreachable or
    /// out of range.
    pub fn distance_to(&self, v: VertexId) -> Option<f64> {
        self.distances
            .get(v)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance_to(v).is_some()
    }

    /// The vertex preceding `v` on its cheapest path, `None` for the source
    /// and for unreachable vertices.
    pub fn parent_of(&self, v: VertexId) -> Option<VertexId> {
        self.parents.get(v).copied().flatten()
    }

    /// One cheapest path from the source to `v`, inclusive of both ends.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(v) {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while let Some(parent) = self.parents[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm with an explicit visited set: repeatedly settle the
/// unsettled vertex with the minimum tentative distance (ties to the lowest
/// id), relaxing its unsettled neighbors.
pub fn dijkstra(graph: &Graph, source: VertexId, cost: CostModel) -> Result<ShortestPaths> {
    graph.require_vertex(source, "Source")?;
    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut parents = vec![None; n];
    let mut settled = vec![false; n];
    distances[source] = 0.0;

    while let Some(current) = nearest_unsettled(&distances, &settled) {
        settled[current] = true;
        for &e in graph.incident_edges(current) {
            let edge = &graph.edges()[e];
            let next = edge.other(current);
            if settled[next] {
                continue;
            }
            let relaxed = distances[current] + cost.edge_cost(edge);
            if relaxed < distances[next] {
                distances[next] = relaxed;
                parents[next] = Some(current);
            }
        }
    }

    Ok(ShortestPaths::new(source, distances, parents))
}

/// Ascending scan with strict `<` to replace, so the lowest id wins ties.
fn nearest_unsettled(distances: &[f64], settled: &[bool]) -> Option<usize> {
    let mut best = None;
    for (v, &distance) in distances.iter().enumerate() {
        if settled[v] || !distance.is_finite() {
            continue;
        }
        match best {
            Some(b) if distances[b] <= distance => {}
            _ => best = Some(v),
        }
    }
    best
}
