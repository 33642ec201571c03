//! Undirected graph model: vertices, edges, and construction.
//!
//! Vertex ids are dense indices assigned at construction and never reused.
//! Edges are stored once with canonicalized endpoints (`a < b`); each vertex
//! keeps the indices of its incident edges in insertion order, so edge
//! iteration and neighbor iteration are deterministic.

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

/// Index into [`Graph::vertices`]. Stable for the life of the graph.
pub type VertexId = usize;

/// Index into [`Graph::edges`]. Stable for the life of the graph; the
/// reliability enumerator keys its removed-edge sets by this index.
pub type EdgeId = usize;

/// Falloff coefficient of the distance-derived mesh reliability
/// `1 - 0.001 * d^2`.
const MESH_FALLOFF: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    /// Incident edge indices in insertion order.
    incident: Vec<EdgeId>,
    /// Set only for graphs built from coordinates.
    position: Option<Point>,
}

impl Vertex {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// Reliability and weight of one edge.
///
/// `reliability` is the probability the edge is operational and must lie in
/// `[0, 1]`; `weight` must be finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAttrs {
    pub reliability: f64,
    pub weight: f64,
}

impl Default for EdgeAttrs {
    fn default() -> Self {
        Self {
            reliability: 1.0,
            weight: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
    reliability: f64,
    weight: f64,
}

impl Edge {
    /// Canonical endpoints, `a < b`.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    pub fn reliability(&self) -> f64 {
        self.reliability
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn touches(&self, v: VertexId) -> bool {
        v == self.a || v == self.b
    }

    /// The endpoint opposite `v`, which must be one of the endpoints.
    pub fn other(&self, v: VertexId) -> VertexId {
        debug_assert!(self.touches(v), "vertex {v} is not an endpoint");
        if v == self.a { self.b } else { self.a }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    edge_index: FxHashSet<(VertexId, VertexId)>,
}

impl Graph {
    /// A graph with `n` fresh vertices and no edges. The vertex count is
    /// fixed for the life of the graph.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            vertices: (0..n)
                .map(|id| Vertex {
                    id,
                    incident: Vec::new(),
                    position: None,
                })
                .collect(),
            edges: Vec::new(),
            edge_index: FxHashSet::default(),
        }
    }

    /// Builds a graph from explicit edge rows over `vertex_count` vertices.
    pub fn from_edge_list(
        vertex_count: usize,
        rows: &[(VertexId, VertexId, EdgeAttrs)],
    ) -> Result<Self> {
        let mut graph = Self::with_vertices(vertex_count);
        for &(u, v, attrs) in rows {
            graph.add_edge_with(u, v, attrs)?;
        }
        Ok(graph)
    }

    /// Builds the complete "wireless mesh" graph over the given coordinates:
    /// one vertex per point, one edge per vertex pair, with weight equal to
    /// the Euclidean distance and reliability `1 - 0.001 * d^2`.
    ///
    /// The derived reliability is clamped into `[0, 1]`: pairs further apart
    /// than `sqrt(1000)` get reliability 0 rather than a negative
    /// probability. Coordinates must be finite.
    pub fn from_coordinates(points: &[Point]) -> Result<Self> {
        for (id, point) in points.iter().enumerate() {
            if !(point.x.is_finite() && point.y.is_finite()) {
                return Err(Error::Domain {
                    message: format!(
                        "Coordinate {id} ({}, {}) is not finite",
                        point.x, point.y
                    ),
                });
            }
        }

        let mut graph = Self::with_vertices(points.len());
        for (id, point) in points.iter().enumerate() {
            graph.vertices[id].position = Some(*point);
        }
        for a in 0..points.len() {
            for b in (a + 1)..points.len() {
                let distance = points[a].distance(points[b]);
                graph.add_edge_with(
                    a,
                    b,
                    EdgeAttrs {
                        reliability: (1.0 - MESH_FALLOFF * distance * distance).clamp(0.0, 1.0),
                        weight: distance,
                    },
                )?;
            }
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex> {
        self.vertices.get(v)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order. The position of an edge in this slice
    /// is its [`EdgeId`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e)
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_index.contains(&canonical(u, v))
    }

    /// Indices of the edges incident to `v`, in insertion order. Empty for
    /// an out-of-range vertex.
    pub fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        self.vertices
            .get(v)
            .map(|vertex| vertex.incident.as_slice())
            .unwrap_or(&[])
    }

    /// Adjacent vertex ids of `v`, in edge insertion order.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incident_edges(v)
            .iter()
            .map(move |&e| self.edges[e].other(v))
    }

    /// Appends an edge with reliability 1 and weight 1.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId> {
        self.add_edge_with(u, v, EdgeAttrs::default())
    }

    /// Appends an edge, registering it in both endpoints' incident lists.
    ///
    /// Fails when an endpoint is out of range, `u == v`, the unordered pair
    /// already exists, or an attribute is outside its domain.
    pub fn add_edge_with(&mut self, u: VertexId, v: VertexId, attrs: EdgeAttrs) -> Result<EdgeId> {
        let n = self.vertices.len();
        if u >= n || v >= n {
            return Err(Error::Domain {
                message: format!("Edge ({u}, {v}) has an endpoint outside the {n}-vertex graph"),
            });
        }
        if u == v {
            return Err(Error::Domain {
                message: format!("Edge ({u}, {v}) is a self-loop"),
            });
        }
        if self.has_edge(u, v) {
            return Err(Error::Domain {
                message: format!("Edge ({u}, {v}) already exists"),
            });
        }
        if !(attrs.weight.is_finite() && attrs.weight >= 0.0) {
            return Err(Error::Domain {
                message: format!(
                    "Edge ({u}, {v}) weight {} must be finite and non-negative",
                    attrs.weight
                ),
            });
        }
        if !(attrs.reliability.is_finite() && (0.0..=1.0).contains(&attrs.reliability)) {
            return Err(Error::Domain {
                message: format!(
                    "Edge ({u}, {v}) reliability {} must lie in [0, 1]",
                    attrs.reliability
                ),
            });
        }

        let (a, b) = canonical(u, v);
        let id = self.edges.len();
        self.edges.push(Edge {
            a,
            b,
            reliability: attrs.reliability,
            weight: attrs.weight,
        });
        self.edge_index.insert((a, b));
        self.vertices[u].incident.push(id);
        self.vertices[v].incident.push(id);
        Ok(id)
    }

    pub(crate) fn require_nonempty(&self) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(Error::Precondition {
                message: "Query on an uninitialized graph (zero vertices)".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn require_vertex(&self, v: VertexId, role: &str) -> Result<()> {
        self.require_nonempty()?;
        if v >= self.vertices.len() {
            return Err(Error::Precondition {
                message: format!(
                    "{role} vertex {v} is outside the {}-vertex graph",
                    self.vertices.len()
                ),
            });
        }
        Ok(())
    }
}

fn canonical(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v { (u, v) } else { (v, u) }
}
