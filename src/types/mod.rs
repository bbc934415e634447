//! Shared types for the pathgraph library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Header line of the debug rendering, kept byte-for-byte stable so that
/// tests can match the full dump.
pub const RENDER_HEADER: &str = "\n------GRAFO-------\nClave\tValor\n";
