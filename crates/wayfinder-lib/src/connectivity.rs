//! World-data sanity checks: is every location reachable from a start point?
//!
//! These run one search per location and are meant for offline validation of
//! small worlds, not for use while a game is being played.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::graph::{LocationGraph, LocationId};
use crate::path::{is_reachable, unreachable_from};

/// Verdict of a connectivity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectivityReport {
    pub start: LocationId,
    /// Number of registered locations considered.
    pub locations: usize,
    /// Locations found unreachable. The per-pair check stops at the first one.
    pub unreachable: Vec<LocationId>,
}

impl ConnectivityReport {
    pub fn is_connected(&self) -> bool {
        self.unreachable.is_empty()
    }

    /// First unreachable location in registration order, if any.
    pub fn first_unreachable(&self) -> Option<LocationId> {
        self.unreachable.first().copied()
    }
}

/// Whether every registered location is reachable from `start`.
pub fn validate_connectivity(graph: &LocationGraph, start: LocationId) -> bool {
    check_connectivity(graph, start).is_connected()
}

/// Run a path query from `start` to each registered location, stopping at the
/// first one that cannot be reached. An empty graph is connected.
pub fn check_connectivity(graph: &LocationGraph, start: LocationId) -> ConnectivityReport {
    let mut report = ConnectivityReport {
        start,
        locations: graph.location_count(),
        unreachable: Vec::new(),
    };

    for location in graph.all_locations() {
        if location == start {
            continue;
        }
        if !is_reachable(graph, start, location) {
            warn!(location, start, "location unreachable");
            report.unreachable.push(location);
            return report;
        }
    }

    info!(
        locations = report.locations,
        start, "all locations reachable"
    );
    report
}

/// Single-sweep variant of [`check_connectivity`] that reports every
/// unreachable location instead of stopping at the first.
pub fn check_connectivity_sweep(
    graph: &LocationGraph,
    start: LocationId,
) -> Result<ConnectivityReport> {
    let unreachable = if graph.contains(start) {
        unreachable_from(graph, start)?
    } else {
        graph.all_locations()
    };

    if unreachable.is_empty() {
        info!(locations = graph.location_count(), start, "all locations reachable");
    } else {
        warn!(count = unreachable.len(), start, "unreachable locations found");
    }

    Ok(ConnectivityReport {
        start,
        locations: graph.location_count(),
        unreachable,
    })
}
