use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{LocationGraph, LocationId};
use crate::queue::MinQueue;

const UNREACHED: u64 = u64::MAX;

/// Outcome of a shortest-path query. Owns its path; holds no borrow of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Locations from source to destination inclusive.
    pub path: Vec<LocationId>,
    /// Sum of travel times along the path.
    pub total_time: u64,
    /// Sum of danger levels along the path.
    pub total_danger: u64,
    pub found: bool,
}

impl PathResult {
    /// Result for an unreachable or unknown destination.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the minimum travel-time path from `from` to `to` with Dijkstra's
/// algorithm.
///
/// Unknown endpoints and unreachable destinations yield a result with
/// `found == false`. Unlock requirements are ignored; callers that care about
/// lock state must filter the result themselves. Errors are only returned
/// when query buffers cannot be allocated.
pub fn find_path(graph: &LocationGraph, from: LocationId, to: LocationId) -> Result<PathResult> {
    let (Some(source), Some(target)) = (graph.slot_of(from), graph.slot_of(to)) else {
        warn!(from, to, "path requested between unknown locations");
        return Ok(PathResult::not_found());
    };

    if source == target {
        return Ok(PathResult {
            path: vec![from],
            total_time: 0,
            total_danger: 0,
            found: true,
        });
    }

    let search = dijkstra(graph, source, Some(target))?;
    if !search.visited[target] {
        debug!(from, to, "no path found");
        return Ok(PathResult::not_found());
    }

    let path = search.reconstruct(graph, source, target)?;
    let total_danger = path
        .windows(2)
        .filter_map(|pair| graph.find_edge(pair[0], pair[1]))
        .map(|edge| u64::from(edge.danger_level))
        .sum();

    let result = PathResult {
        total_time: search.distances[target],
        total_danger,
        path,
        found: true,
    };
    debug!(
        from,
        to,
        hops = result.hop_count(),
        total_time = result.total_time,
        total_danger = result.total_danger,
        "path found"
    );
    Ok(result)
}

/// Whether any finite-cost path joins `from` to `to`.
///
/// An engine failure is logged and treated as unreachable.
pub fn is_reachable(graph: &LocationGraph, from: LocationId, to: LocationId) -> bool {
    match find_path(graph, from, to) {
        Ok(result) => result.found,
        Err(err) => {
            warn!(from, to, error = %err, "reachability query failed");
            false
        }
    }
}

/// Every location reachable from `start`, including `start` itself, found
/// with one exhaustive sweep. Empty when `start` is unknown.
pub fn reachable_from(graph: &LocationGraph, start: LocationId) -> Result<HashSet<LocationId>> {
    let Some(source) = graph.slot_of(start) else {
        return Ok(HashSet::new());
    };

    let search = dijkstra(graph, source, None)?;
    Ok(search
        .visited
        .iter()
        .enumerate()
        .filter(|(_, visited)| **visited)
        .map(|(slot, _)| graph.id_at(slot))
        .collect())
}

/// Registered locations that cannot be reached from `start`, in registration
/// order.
pub fn unreachable_from(graph: &LocationGraph, start: LocationId) -> Result<Vec<LocationId>> {
    let reachable = reachable_from(graph, start)?;
    Ok(graph
        .all_locations()
        .into_iter()
        .filter(|id| !reachable.contains(id))
        .collect())
}

struct Search {
    distances: Vec<u64>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl Search {
    fn reconstruct(
        &self,
        graph: &LocationGraph,
        source: usize,
        target: usize,
    ) -> Result<Vec<LocationId>> {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(slot) = current {
            path.try_reserve(1).map_err(|_| Error::AllocationFailure {
                context: "reconstructing a path",
            })?;
            path.push(graph.id_at(slot));
            if slot == source {
                break;
            }
            current = self.predecessors[slot];
        }
        path.reverse();
        Ok(path)
    }
}

/// Run Dijkstra from `source`, stopping early once `target` is finalized.
fn dijkstra(graph: &LocationGraph, source: usize, target: Option<usize>) -> Result<Search> {
    let count = graph.location_count();
    let mut search = Search {
        distances: filled(count, UNREACHED)?,
        predecessors: filled(count, None)?,
        visited: filled(count, false)?,
    };

    // Each edge is relaxed at most once (from its finalized tail), so the
    // source plus one push per edge bounds the queue.
    let mut queue = MinQueue::try_with_capacity(count + graph.edge_count()).map_err(|_| {
        Error::AllocationFailure {
            context: "sizing the priority queue",
        }
    })?;

    search.distances[source] = 0;
    queue.push(graph.id_at(source), 0)?;

    while !queue.is_empty() {
        let (location, cost) = queue.pop_min()?;
        let Some(current) = graph.slot_of(location) else {
            continue;
        };
        if search.visited[current] {
            continue;
        }
        search.visited[current] = true;

        if Some(current) == target {
            break;
        }

        for edge in graph.edges_at(current) {
            let Some(next) = graph.slot_of(edge.to) else {
                continue;
            };
            if search.visited[next] {
                continue;
            }

            let candidate = cost + u64::from(edge.travel_time_hours);
            if candidate < search.distances[next] {
                search.distances[next] = candidate;
                search.predecessors[next] = Some(current);
                queue.push(edge.to, candidate)?;
            }
        }
    }

    Ok(search)
}

fn filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure {
            context: "allocating search buffers",
        })?;
    buffer.resize(len, value);
    Ok(buffer)
}
