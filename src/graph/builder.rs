//! Fluent API for building Graph instances.

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices are inserted before edges, so edges may be declared in any order
/// relative to their endpoints. Edges referencing vertices that were never
/// declared are skipped at build time, matching the non-exceptional failure
/// of [`Graph::add_edge`].
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Ord + Clone> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex.
    pub fn vertex(mut self, v: V) -> Self {
        self.vertices.push(v);
        self
    }

    /// Declare several vertices at once.
    pub fn vertices<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        self.vertices.extend(iter);
        self
    }

    /// Declare an undirected edge between two vertices.
    pub fn edge(mut self, v1: V, v2: V) -> Self {
        self.edges.push((v1, v2));
        self
    }

    /// Build the final graph.
    pub fn build(self) -> Graph<V> {
        let mut graph = Graph::new();
        for v in self.vertices {
            graph.add_vertex(v);
        }
        for (v1, v2) in self.edges {
            graph.add_edge(&v1, &v2);
        }
        graph
    }
}

impl<V: Ord + Clone> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
