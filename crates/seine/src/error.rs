pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A CSV row that cannot be turned into an edge or a coordinate. `row`
    /// is the 1-based physical line number.
    #[error("Malformed input at row {row}: {message}")]
    MalformedInput { row: usize, message: String },

    /// A structurally valid request for an impossible graph mutation:
    /// out-of-range endpoint, self-loop, duplicate edge, or an edge
    /// attribute outside its domain.
    #[error("{message}")]
    Domain { message: String },

    /// A query issued against a graph that cannot answer it: empty graph,
    /// unknown source or terminal, invalid diameter.
    #[error("{message}")]
    Precondition { message: String },

    /// The reliability enumeration hit its configured subproblem budget
    /// before the state space was exhausted.
    #[error(
        "Reliability enumeration stopped after exploring {explored} subproblems (limit {limit}); the edge-failure state space is too large for exact enumeration"
    )]
    Exhausted { explored: u64, limit: u64 },
}
