//! Shortest-path search over the adjacency structure.
//!
//! This module implements Dijkstra's algorithm with a binary-heap frontier
//! and a predecessor map for path reconstruction. It operates on borrowed
//! `&str` keys throughout and only allocates `VertexId`s for the final path.

use crate::graph::Distance;
use crate::vertex::VertexId;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Minimum-total-weight path from `src` to `dest`, or `None` if unreachable.
///
/// Distances default to "infinite" for vertices with no table entry; `src`
/// is seeded to 0 whether or not it is a known vertex. The frontier may hold
/// duplicate entries for a vertex; entries whose distance is stale against
/// the live table are skipped at pop time.
pub(crate) fn shortest_path(
    adjacency: &BTreeMap<VertexId, BTreeMap<VertexId, Distance>>,
    src: &str,
    dest: &str,
) -> Option<Vec<VertexId>> {
    tracing::debug!(src, dest, "computing shortest path");

    let mut dist: HashMap<&str, Distance> = HashMap::new();
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<(Distance, &str)>> = BinaryHeap::new();

    dist.insert(src, 0);
    frontier.push(Reverse((0, src)));

    while let Some(Reverse((popped, current))) = frontier.pop() {
        if popped > best(&dist, current) {
            // Stale duplicate: a shorter route to `current` was found after
            // this entry was queued.
            continue;
        }

        // Unknown vertices have no adjacency entry and relax nothing.
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };

        for (neighbor, weight) in neighbors {
            // Saturating: an absurdly large weight must not wrap into a
            // spuriously short route.
            let alt = popped.saturating_add(*weight);
            if alt < best(&dist, neighbor.as_str()) {
                tracing::trace!(from = current, to = neighbor.as_str(), alt, "relaxed");
                dist.insert(neighbor.as_str(), alt);
                prev.insert(neighbor.as_str(), current);
                frontier.push(Reverse((alt, neighbor.as_str())));
            }
        }
    }

    reconstruct(&prev, src, dest)
}

/// Best known distance, defaulting to infinite for absent vertices.
fn best(dist: &HashMap<&str, Distance>, vertex: &str) -> Distance {
    dist.get(vertex).copied().unwrap_or(Distance::MAX)
}

/// Walk backward from `dest` through the predecessor map.
///
/// A vertex without a predecessor that is not `src` itself means no path
/// exists. When `src == dest` the walk terminates immediately and the path
/// is the single vertex, regardless of whether it appears in any edge.
fn reconstruct(prev: &HashMap<&str, &str>, src: &str, dest: &str) -> Option<Vec<VertexId>> {
    let mut path = Vec::new();
    let mut at = dest;
    while at != src {
        path.push(VertexId::from(at));
        at = prev.get(at).copied()?;
    }
    path.push(VertexId::from(src));
    path.reverse();
    Some(path)
}
