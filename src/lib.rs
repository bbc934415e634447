//! pathgraph — generic undirected graph with single-path search.
//!
//! Stores vertices and their adjacency sets, supports incremental vertex and
//! edge insertion, adjacency queries, a deterministic debug rendering, and a
//! depth-first search returning one (not necessarily shortest) path between
//! two vertices.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{find_path, Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, RENDER_HEADER};
