use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Opaque location identifier. Names and descriptions live with the world data.
pub type LocationId = u32;

/// Directed connection between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: LocationId,
    pub to: LocationId,
    /// Primary cost used for path selection; always at least 1.
    pub travel_time_hours: u8,
    /// Secondary cost, accumulated along a chosen path but never used to pick one.
    pub danger_level: u8,
    /// External gating condition. Not consulted by the path engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_requirement: Option<String>,
}

impl Edge {
    /// Whether the connection is annotated with an unlock requirement.
    pub fn requires_unlock(&self) -> bool {
        self.unlock_requirement.is_some()
    }
}

/// Weighted directed graph of locations.
///
/// Locations are registered implicitly the first time an edge references them
/// and are never removed. Each location keeps its outgoing edges in
/// registration order; every query walks them newest first, so when several
/// edges join the same pair the most recently added one wins.
///
/// The graph performs no internal synchronisation. Hosts sharing it across
/// threads must not mutate it while queries are running.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    index: HashMap<LocationId, usize>,
    ids: Vec<LocationId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl LocationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `locations` entries before regrowth.
    pub fn with_capacity(locations: usize) -> Self {
        Self {
            index: HashMap::with_capacity(locations),
            ids: Vec::with_capacity(locations),
            adjacency: Vec::with_capacity(locations),
            edge_count: 0,
        }
    }

    /// Register a directed connection from `from` to `to`.
    ///
    /// Both endpoints become known locations. A zero travel time is rejected
    /// and leaves the graph untouched.
    pub fn add_edge(
        &mut self,
        from: LocationId,
        to: LocationId,
        travel_time: u8,
        danger: u8,
    ) -> Result<()> {
        if travel_time == 0 {
            warn!(from, to, "rejecting connection with zero travel time");
            return Err(Error::InvalidWeight { from, to });
        }

        // Reserve everything up front so a failed allocation cannot leave a
        // half-registered edge behind.
        let new_locations =
            usize::from(!self.contains(from)) + usize::from(from != to && !self.contains(to));
        self.reserve_locations(new_locations)?;
        if let Some(&slot) = self.index.get(&from) {
            self.adjacency[slot]
                .try_reserve(1)
                .map_err(|_| Error::AllocationFailure {
                    context: "growing an adjacency list",
                })?;
        }

        let slot = self.register(from);
        self.register(to);
        self.adjacency[slot].push(Edge {
            from,
            to,
            travel_time_hours: travel_time,
            danger_level: danger,
            unlock_requirement: None,
        });
        self.edge_count += 1;

        debug!(from, to, travel_time, danger, "added connection");
        Ok(())
    }

    /// Register `a -> b` followed by `b -> a` with identical figures.
    ///
    /// There is no rollback: if the second registration fails the first edge
    /// stays in the graph.
    pub fn add_bidirectional_edge(
        &mut self,
        a: LocationId,
        b: LocationId,
        travel_time: u8,
        danger: u8,
    ) -> Result<()> {
        self.add_edge(a, b, travel_time, danger)?;
        self.add_edge(b, a, travel_time, danger)
    }

    /// Attach an unlock requirement to the newest `from -> to` edge.
    pub fn set_unlock_requirement(
        &mut self,
        from: LocationId,
        to: LocationId,
        requirement: impl Into<String>,
    ) -> Result<()> {
        let Some(&slot) = self.index.get(&from) else {
            warn!(from, to, "cannot lock connection from unknown location");
            return Err(Error::EdgeNotFound { from, to });
        };

        let Some(edge) = self.adjacency[slot]
            .iter_mut()
            .rev()
            .find(|edge| edge.to == to)
        else {
            warn!(from, to, "connection not found");
            return Err(Error::EdgeNotFound { from, to });
        };

        let requirement = requirement.into();
        debug!(from, to, requirement = %requirement, "set unlock requirement");
        edge.unlock_requirement = Some(requirement);
        Ok(())
    }

    /// Whether at least one `from -> to` edge exists.
    pub fn has_edge(&self, from: LocationId, to: LocationId) -> bool {
        self.edges(from).any(|edge| edge.to == to)
    }

    /// Targets of every outgoing edge, newest first, duplicates included.
    pub fn neighbours(&self, from: LocationId) -> Vec<LocationId> {
        self.edges(from).map(|edge| edge.to).collect()
    }

    /// Snapshot of the newest `from -> to` edge.
    pub fn get_edge(&self, from: LocationId, to: LocationId) -> Option<Edge> {
        self.find_edge(from, to).cloned()
    }

    /// Outgoing edges of `from`, newest first. Empty for unknown locations.
    pub fn edges(&self, from: LocationId) -> std::iter::Rev<std::slice::Iter<'_, Edge>> {
        let edges = match self.index.get(&from) {
            Some(&slot) => self.adjacency[slot].as_slice(),
            None => &[],
        };
        edges.iter().rev()
    }

    /// Every registered location in first-registration order.
    pub fn all_locations(&self) -> Vec<LocationId> {
        self.ids.clone()
    }

    /// Whether `id` has been referenced by any edge.
    pub fn contains(&self, id: LocationId) -> bool {
        self.index.contains_key(&id)
    }

    /// Total number of directed edges ever registered.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn location_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn find_edge(&self, from: LocationId, to: LocationId) -> Option<&Edge> {
        self.edges(from).find(|edge| edge.to == to)
    }

    pub(crate) fn slot_of(&self, id: LocationId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn id_at(&self, slot: usize) -> LocationId {
        self.ids[slot]
    }

    pub(crate) fn edges_at(&self, slot: usize) -> std::iter::Rev<std::slice::Iter<'_, Edge>> {
        self.adjacency[slot].iter().rev()
    }

    fn register(&mut self, id: LocationId) -> usize {
        if let Some(&slot) = self.index.get(&id) {
            return slot;
        }
        let slot = self.ids.len();
        self.ids.push(id);
        self.adjacency.push(Vec::new());
        self.index.insert(id, slot);
        slot
    }

    fn reserve_locations(&mut self, additional: usize) -> Result<()> {
        if additional == 0 {
            return Ok(());
        }
        let failure = |_| Error::AllocationFailure {
            context: "registering locations",
        };
        self.ids.try_reserve(additional).map_err(failure)?;
        self.adjacency.try_reserve(additional).map_err(failure)?;
        self.index.try_reserve(additional).map_err(failure)?;
        Ok(())
    }
}
