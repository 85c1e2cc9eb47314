//! The built-in route network installed at startup.
//!
//! The seed is a fixed sequence of edge insertions, nothing more; there is
//! no file format or persisted state behind it. `--no-seed` skips it.

use wayfind_graph::{Distance, RouteGraph};

/// Seed edges as (from, to, kilometres).
pub const SEED_EDGES: &[(&str, &str, Distance)] = &[
    ("Delhi", "Mumbai", 1400),
    ("Delhi", "Kolkata", 1500),
    ("Mumbai", "Chennai", 1330),
    ("Chennai", "Bangalore", 350),
    ("Kolkata", "Chennai", 1650),
    ("Kolkata", "Hyderabad", 1500),
    ("Hyderabad", "Bangalore", 570),
    ("Mumbai", "Bangalore", 980),
];

/// Apply the seed edges to a graph.
pub fn apply(graph: &mut RouteGraph) {
    for &(from, to, km) in SEED_EDGES {
        graph.add_edge(from, to, km);
    }
}
