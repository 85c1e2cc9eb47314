//! The route graph: an undirected, weighted adjacency structure.
//!
//! # Representation
//!
//! The graph is a mapping from vertex to (mapping from adjacent vertex to
//! weight). Both maps are `BTreeMap`, so vertex enumeration is lexicographic
//! and stable across calls for a fixed insertion history.
//!
//! # Invariants
//!
//! - Adjacency symmetry: if B appears as a neighbor of A with weight W, then
//!   A appears as a neighbor of B with weight W.
//! - Re-inserting an existing pair overwrites the weight in both directions.
//! - Read paths (`edge_exists`, `edge_weight`, queries) never create
//!   entries; only `add_edge` uses the entry API.

use crate::dijkstra;
use crate::vertex::VertexId;
use std::collections::BTreeMap;

/// Edge weight and path-total type, interpreted as kilometres.
pub type Distance = u64;

/// An undirected, weighted graph of named locations.
///
/// Vertices exist only as edge endpoints. The graph is created empty, is
/// mutated only by [`add_edge`](RouteGraph::add_edge), and can be reset with
/// [`clear`](RouteGraph::clear); there is no single-edge or single-vertex
/// removal.
///
/// # Example
///
/// ```
/// use wayfind_graph::RouteGraph;
///
/// let mut graph = RouteGraph::new();
/// graph.add_edge("Delhi", "Mumbai", 1400);
/// graph.add_edge("Mumbai", "Chennai", 1330);
///
/// let path = graph.shortest_path("Delhi", "Chennai").unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(graph.path_distance("Delhi", "Chennai"), Some(2730));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, Distance>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the undirected edge `{src, dest}`.
    ///
    /// Both adjacency directions are written with the same weight. Endpoints
    /// that were not previously vertices are created as a side effect. This
    /// operation is total: any names and any weight are stored as given;
    /// callers are expected to reject empty names and zero weights before
    /// calling.
    pub fn add_edge(
        &mut self,
        src: impl Into<VertexId>,
        dest: impl Into<VertexId>,
        weight: Distance,
    ) {
        let src = src.into();
        let dest = dest.into();
        tracing::debug!(%src, %dest, weight, "adding edge");

        self.adjacency
            .entry(src.clone())
            .or_default()
            .insert(dest.clone(), weight);
        self.adjacency.entry(dest).or_default().insert(src, weight);
    }

    /// Whether `src` has an adjacency entry for `dest`.
    ///
    /// Returns `false` when either vertex is absent. Read-only: looking up
    /// unknown names never materializes them as vertices.
    pub fn edge_exists(&self, src: &str, dest: &str) -> bool {
        self.adjacency
            .get(src)
            .is_some_and(|neighbors| neighbors.contains_key(dest))
    }

    /// The stored weight of the edge `{src, dest}`, if present.
    pub fn edge_weight(&self, src: &str, dest: &str) -> Option<Distance> {
        self.adjacency
            .get(src)
            .and_then(|neighbors| neighbors.get(dest))
            .copied()
    }

    /// Every vertex with at least one recorded adjacency entry, in
    /// lexicographic order.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().cloned().collect()
    }

    /// Number of vertices currently in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Reset the graph to the empty state.
    pub fn clear(&mut self) {
        tracing::debug!(vertices = self.adjacency.len(), "clearing graph");
        self.adjacency.clear();
    }

    /// Minimum-total-weight path from `src` to `dest`.
    ///
    /// Runs Dijkstra's algorithm over the adjacency structure and
    /// reconstructs the path from the predecessor map. Returns `None` when
    /// no path exists, which covers unknown `src`, unknown `dest`, and
    /// endpoints in disconnected components.
    ///
    /// When `src == dest` the result is always `Some(vec![src])`, even for
    /// a name that was never an edge endpoint: an isolated name is trivially
    /// reachable from itself.
    pub fn shortest_path(&self, src: &str, dest: &str) -> Option<Vec<VertexId>> {
        dijkstra::shortest_path(&self.adjacency, src, dest)
    }

    /// Total weight of the shortest path from `src` to `dest`.
    ///
    /// `None` exactly when [`shortest_path`](RouteGraph::shortest_path)
    /// finds no path. The total is the sum of the stored weights between
    /// each consecutive pair along the returned path, so
    /// `path_distance(v, v)` is `Some(0)`.
    pub fn path_distance(&self, src: &str, dest: &str) -> Option<Distance> {
        let path = self.shortest_path(src, dest)?;
        let mut total: Distance = 0;
        for pair in path.windows(2) {
            total += self.edge_weight(pair[0].as_str(), pair[1].as_str())?;
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 7);

        assert!(graph.edge_exists("A", "B"));
        assert!(graph.edge_exists("B", "A"));
        assert_eq!(graph.edge_weight("A", "B"), Some(7));
        assert_eq!(graph.edge_weight("B", "A"), Some(7));
    }

    #[test]
    fn test_add_edge_overwrites_both_directions() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 7);
        graph.add_edge("B", "A", 12);

        assert_eq!(graph.edge_weight("A", "B"), Some(12));
        assert_eq!(graph.edge_weight("B", "A"), Some(12));
    }

    #[test]
    fn test_vertices_lexicographic() {
        let mut graph = RouteGraph::new();
        graph.add_edge("Mumbai", "Delhi", 1400);
        graph.add_edge("Bangalore", "Chennai", 350);

        let names: Vec<_> = graph.vertices().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Bangalore", "Chennai", "Delhi", "Mumbai"]);
    }

    #[test]
    fn test_lookups_do_not_create_vertices() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1);

        assert!(!graph.edge_exists("X", "Y"));
        assert_eq!(graph.edge_weight("X", "Y"), None);
        assert_eq!(graph.shortest_path("X", "Y"), None);

        let names: Vec<_> = graph.vertices().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);

        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.vertices().is_empty());
        assert!(!graph.edge_exists("A", "B"));
    }

    #[test]
    fn test_self_loop_degenerates_to_single_entry() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "A", 5);

        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.edge_exists("A", "A"));
        assert_eq!(graph.edge_weight("A", "A"), Some(5));
    }

    #[test]
    fn test_unusual_names_and_weights_are_stored() {
        // The core is total over its inputs; validation is the caller's job.
        let mut graph = RouteGraph::new();
        graph.add_edge("", "B", 0);

        assert!(graph.edge_exists("", "B"));
        assert_eq!(graph.edge_weight("B", ""), Some(0));
        assert_eq!(graph.path_distance("", "B"), Some(0));
    }

    #[test]
    fn test_path_distance_single_vertex_is_zero() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 9);

        assert_eq!(graph.path_distance("A", "A"), Some(0));
    }
}
