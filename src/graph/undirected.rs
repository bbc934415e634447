//! Core graph structure — vertices with symmetric adjacency sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult, RENDER_HEADER};

use super::traversal;

/// An undirected graph over a generic vertex type `V`.
///
/// Each vertex maps to the set of vertices adjacent to it; an edge is stored
/// as two mirrored entries, one per endpoint. A vertex with no edges is
/// present with an empty set, which is distinct from the vertex being absent.
///
/// Sorted containers fix the iteration order by `V`'s total order, so both
/// the rendering and the path search are deterministic for a given edge set.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
}

impl<V> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord> Graph<V> {
    /// Add the vertex `v` with an empty adjacency set.
    ///
    /// Returns `true` if `v` was not already present, `false` otherwise
    /// (repeat insertion is a no-op).
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, BTreeSet::new());
        true
    }

    /// Add an undirected edge between `v1` and `v2`.
    ///
    /// Both endpoints must already exist as vertices; if either is missing,
    /// nothing is mutated and `false` is returned. Returns `true` if the edge
    /// was absent in both directions and has been inserted, `false` if it was
    /// already there. Self-loops are permitted and stored as a single entry
    /// in the vertex's own adjacency set.
    pub fn add_edge(&mut self, v1: &V, v2: &V) -> bool
    where
        V: Clone,
    {
        if !self.adjacency.contains_key(v1) || !self.adjacency.contains_key(v2) {
            return false;
        }
        let already_linked = self.adjacency[v1].contains(v2) || self.adjacency[v2].contains(v1);
        if already_linked {
            return false;
        }
        if let Some(adjacents) = self.adjacency.get_mut(v1) {
            adjacents.insert(v2.clone());
        }
        if let Some(adjacents) = self.adjacency.get_mut(v2) {
            adjacents.insert(v1.clone());
        }
        true
    }

    /// Whether `v` is a vertex of the graph.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// The adjacency set of `v`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] when `v` was never added, so
    /// callers can tell an isolated vertex (empty set) from an unknown one.
    pub fn adjacents_of(&self, v: &V) -> GraphResult<&BTreeSet<V>>
    where
        V: fmt::Debug,
    {
        self.adjacency
            .get(v)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{v:?}")))
    }

    /// Adjacency lookup without the error wrapping, for traversal internals.
    pub(crate) fn adjacents(&self, v: &V) -> Option<&BTreeSet<V>> {
        self.adjacency.get(v)
    }

    /// Find one path from `source` to `target`, or `None` if disconnected.
    ///
    /// See [`traversal::find_path`] for the search guarantees.
    pub fn find_path(&self, source: &V, target: &V) -> Option<Vec<V>>
    where
        V: Hash + Clone,
    {
        traversal::find_path(self, source, target)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Each undirected edge counts once; a self-loop also
    /// counts once.
    pub fn edge_count(&self) -> usize {
        let mirrored: usize = self
            .adjacency
            .iter()
            .map(|(v, adjacents)| adjacents.len() + usize::from(adjacents.contains(v)))
            .sum();
        mirrored / 2
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All vertices, in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }
}

impl<V: Ord + fmt::Display> Graph<V> {
    /// Deterministic, human-readable dump of the adjacency mapping.
    ///
    /// A header line, then one line per vertex: the vertex key, a tab, and
    /// its adjacents each followed by a space. This is a debug facility, not
    /// a serialization format.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<V: Ord + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RENDER_HEADER)?;
        for (vertex, adjacents) in &self.adjacency {
            write!(f, "{vertex}\t")?;
            for adjacent in adjacents {
                write!(f, "{adjacent} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
