//! CSV ingestion: edge lists and coordinate lists.
//!
//! Rows are comma-separated with optional surrounding whitespace; blank
//! lines are skipped. Row numbers in errors are 1-based physical line
//! numbers, counting skipped lines.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{EdgeAttrs, Graph, Point, VertexId};

/// Column layout of an edge-list file. The caller declares the layout;
/// nothing is inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeColumns {
    /// `u, v`
    Bare,
    /// `u, v, weight`
    Weight,
    /// `u, v, reliability`
    Reliability,
    /// `u, v, reliability, weight` — reliability before weight.
    ReliabilityWeight,
}

impl EdgeColumns {
    fn arity(self) -> usize {
        match self {
            EdgeColumns::Bare => 2,
            EdgeColumns::Weight | EdgeColumns::Reliability => 3,
            EdgeColumns::ReliabilityWeight => 4,
        }
    }
}

/// Parses an edge list into a graph, sizing the graph as `max id + 1`.
/// Empty input yields an empty graph.
pub fn parse_edge_list(text: &str, columns: EdgeColumns) -> Result<Graph> {
    let mut rows = Vec::new();
    let mut max_id = None::<VertexId>;
    for (row, line) in numbered_rows(text) {
        let fields = split_fields(row, line, columns.arity())?;
        let u = parse_id(row, fields[0])?;
        let v = parse_id(row, fields[1])?;
        let attrs = match columns {
            EdgeColumns::Bare => EdgeAttrs::default(),
            EdgeColumns::Weight => EdgeAttrs {
                weight: parse_number(row, fields[2])?,
                ..EdgeAttrs::default()
            },
            EdgeColumns::Reliability => EdgeAttrs {
                reliability: parse_number(row, fields[2])?,
                ..EdgeAttrs::default()
            },
            EdgeColumns::ReliabilityWeight => EdgeAttrs {
                reliability: parse_number(row, fields[2])?,
                weight: parse_number(row, fields[3])?,
            },
        };
        max_id = max_id.max(Some(u.max(v)));
        rows.push((row, u, v, attrs));
    }

    let mut graph = Graph::with_vertices(max_id.map_or(0, |id| id + 1));
    for (row, u, v, attrs) in rows {
        graph
            .add_edge_with(u, v, attrs)
            .map_err(|error| at_row(row, error))?;
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

/// Parses `x, y` rows and builds the complete mesh over them with
/// [`Graph::from_coordinates`].
pub fn parse_coordinates(text: &str) -> Result<Graph> {
    let mut points = Vec::new();
    for (row, line) in numbered_rows(text) {
        let fields = split_fields(row, line, 2)?;
        points.push(Point {
            x: parse_number(row, fields[0])?,
            y: parse_number(row, fields[1])?,
        });
    }
    let graph = Graph::from_coordinates(&points)?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built mesh from coordinates"
    );
    Ok(graph)
}

/// Non-blank lines with their 1-based line numbers, trimmed.
fn numbered_rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn split_fields(row: usize, line: &str, arity: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != arity {
        return Err(Error::MalformedInput {
            row,
            message: format!(
                "Expected {arity} comma-separated fields, found {}",
                fields.len()
            ),
        });
    }
    Ok(fields)
}

fn parse_id(row: usize, field: &str) -> Result<VertexId> {
    field.parse().map_err(|_| Error::MalformedInput {
        row,
        message: format!("'{field}' is not a non-negative vertex id"),
    })
}

fn parse_number(row: usize, field: &str) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| Error::MalformedInput {
        row,
        message: format!("'{field}' is not a number"),
    })?;
    if !value.is_finite() {
        return Err(Error::MalformedInput {
            row,
            message: format!("'{field}' is not a finite number"),
        });
    }
    Ok(value)
}

/// Tags a construction failure with the row it came from.
fn at_row(row: usize, error: Error) -> Error {
    match error {
        Error::Domain { message } => Error::Domain {
            message: format!("Row {row}: {message}"),
        },
        other => other,
    }
}
