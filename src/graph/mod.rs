//! The undirected graph — the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::find_path;
pub use undirected::Graph;
