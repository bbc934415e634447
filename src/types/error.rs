//! Error types for the pathgraph library.

use thiserror::Error;

/// All errors that can occur in the pathgraph library.
///
/// Most failure modes here are non-exceptional and reported through `bool`
/// returns (duplicate vertex, duplicate or dangling edge). Only queries that
/// must distinguish "isolated vertex" from "unknown vertex" fail with an
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Adjacency was requested for a vertex that was never added.
    #[error("vertex {0} is not part of the graph")]
    VertexNotFound(String),
}

/// Convenience result type for pathgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
