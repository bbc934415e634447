//! Path search over the undirected graph (iterative DFS).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use log::debug;

use super::Graph;

/// Finds one path from `source` to `target` following existing edges.
///
/// Returns the sequence of vertices beginning with `source` and ending with
/// `target`, or `None` when no such path exists — including when either
/// endpoint is not a vertex of the graph. The path is valid but not
/// necessarily shortest. `source == target` on a known vertex yields the
/// single-element path.
///
/// The search is an iterative depth-first traversal with an explicit frontier
/// stack, so arbitrarily deep graphs do not risk call-stack overflow. Since
/// adjacency sets iterate in ascending order, repeated calls on the same
/// graph return the same path.
pub fn find_path<V>(graph: &Graph<V>, source: &V, target: &V) -> Option<Vec<V>>
where
    V: Ord + Hash + Clone,
{
    if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
        return None;
    }
    if source == target {
        return Some(vec![source.clone()]);
    }

    // Each discovered vertex records the predecessor it was first reached
    // through; a vertex enters the visited set the moment it is pushed, so it
    // is pushed at most once.
    let mut open: Vec<V> = vec![source.clone()];
    let mut trace: HashMap<V, V> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    visited.insert(source.clone());

    while let Some(current) = open.pop() {
        if current == *target {
            let path = rebuild_path(&trace, source, &current);
            debug!("path found with {} vertices", path.len());
            return Some(path);
        }
        if let Some(adjacents) = graph.adjacents(&current) {
            for adjacent in adjacents {
                if visited.insert(adjacent.clone()) {
                    trace.insert(adjacent.clone(), current.clone());
                    open.push(adjacent.clone());
                }
            }
        }
    }

    debug!("no path between the requested endpoints");
    None
}

/// Walks the trace backward from `target` to `source`, then reverses.
fn rebuild_path<V>(trace: &HashMap<V, V>, source: &V, target: &V) -> Vec<V>
where
    V: Hash + Eq + Clone,
{
    let mut path = vec![target.clone()];
    let mut cursor = target;
    while cursor != source {
        match trace.get(cursor) {
            Some(predecessor) => {
                path.push(predecessor.clone());
                cursor = predecessor;
            }
            // unreachable for vertices discovered by the search above
            None => break,
        }
    }
    path.reverse();
    path
}
