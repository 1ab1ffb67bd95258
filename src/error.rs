//! Error types surfaced by graph construction and the centrality computations.

use std::io;

use thiserror::Error;

/// The error type for graph construction, partitioning and centrality queries.
///
/// All failures are fail-fast: a malformed edge record aborts the whole build
/// and no partial graph is returned.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge record that isn't exactly two parseable non-negative integers.
    #[error("malformed edge record on line {line}: {record:?}")]
    Parse { line: usize, record: String },

    /// A query against a node id that was never inserted into the graph.
    #[error("unknown node {0}")]
    UnknownNode(String),

    /// The graph contains no nodes, so there is nothing to partition.
    #[error("the graph is empty")]
    EmptyGraph,

    /// A damping factor outside the open interval (0, 1).
    #[error("alpha must lie in the open interval (0, 1), got {0}")]
    InvalidAlpha(f64),

    /// An I/O failure while reading the edge stream.
    #[error("i/o error while reading the edge list: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for centrality operations.
pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Builds an [`GraphError::UnknownNode`] from any vertex type used in a graph.
    pub(crate) fn unknown_node<T: std::fmt::Debug>(node: T) -> Self {
        Self::UnknownNode(format!("{node:?}"))
    }
}
