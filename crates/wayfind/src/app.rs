//! Application context for CLI command execution.
//!
//! The route graph is process-wide mutable state with a process-long
//! lifetime. Rather than a bare global, it is owned by an explicit [`App`]
//! context that the CLI execution path threads through every command, which
//! keeps tests isolated and leaves room for multiple instances later.

use crate::seed;
use wayfind_graph::RouteGraph;

/// Application context for CLI operations.
///
/// Owns the route graph for the duration of a run. All access is
/// single-threaded request/response: the CLI invokes one graph operation at
/// a time and renders its return value before the next.
#[derive(Debug, Default)]
pub struct App {
    graph: RouteGraph,
}

impl App {
    /// Create a context with the built-in route network installed.
    pub fn with_seed() -> Self {
        let mut graph = RouteGraph::new();
        seed::apply(&mut graph);
        tracing::debug!(vertices = graph.vertex_count(), "seeded route network");
        Self { graph }
    }

    /// Create a context with an empty graph.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get an immutable reference to the graph.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Get a mutable reference to the graph.
    pub fn graph_mut(&mut self) -> &mut RouteGraph {
        &mut self.graph
    }
}
