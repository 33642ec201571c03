#![forbid(unsafe_code)]

//! Undirected graphs with edge reliabilities, and the exact terminal-pair
//! network reliability of such graphs under a diameter constraint.
//!
//! `seine` also carries the supporting machinery the reliability query is
//! built from: depth-first connectivity and cycle queries, Dijkstra
//! shortest paths, a label-correcting best-first expansion, and CSV
//! ingestion of edge lists and coordinate meshes.
//!
//! Queries never mutate the graph: traversal state, removed-edge sets, and
//! cost policy all live in per-call values.

pub mod csv;
pub mod error;
pub mod graph;
pub mod reliability;
pub mod shortest_path;
pub mod traverse;

pub use csv::EdgeColumns;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeAttrs, EdgeId, Graph, Point, Vertex, VertexId};
pub use reliability::{ReliabilityOptions, reliability};
pub use shortest_path::{ShortestPaths, dijkstra};
pub use traverse::{CostModel, DfsOutcome, best_first, component_count, depth_first, has_cycle};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
