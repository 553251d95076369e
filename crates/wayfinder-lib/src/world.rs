//! Static world data: location metadata plus the connections used to build a
//! [`LocationGraph`] at the start of each session.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::connectivity::{check_connectivity_sweep, ConnectivityReport};
use crate::error::{Error, Result};
use crate::graph::{LocationGraph, LocationId};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Location metadata owned by the world, not the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Connection as declared in world data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: LocationId,
    pub to: LocationId,
    pub travel_time: u8,
    #[serde(default)]
    pub danger: u8,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_requirement: Option<String>,
}

fn default_bidirectional() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct WorldFile {
    #[serde(default)]
    start: Option<LocationId>,
    #[serde(default)]
    locations: Vec<Location>,
    #[serde(default)]
    connections: Vec<Connection>,
}

/// Parsed world data with name and id lookups.
#[derive(Debug, Clone)]
pub struct World {
    pub start: Option<LocationId>,
    pub locations: HashMap<LocationId, Location>,
    pub connections: Vec<Connection>,
    name_to_id: HashMap<String, LocationId>,
}

impl World {
    /// Load world data from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::WorldNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        let world = Self::from_json_str(&raw)?;
        info!(
            locations = world.locations.len(),
            connections = world.connections.len(),
            "loaded world data from {}",
            path.display()
        );
        Ok(world)
    }

    /// Parse world data from a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: WorldFile = serde_json::from_str(raw)?;

        let mut locations = HashMap::with_capacity(file.locations.len());
        let mut name_to_id = HashMap::with_capacity(file.locations.len());
        for location in file.locations {
            if name_to_id
                .insert(location.name.to_lowercase(), location.id)
                .is_some()
            {
                return Err(Error::DuplicateLocationName {
                    name: location.name,
                });
            }
            let id = location.id;
            if locations.insert(id, location).is_some() {
                return Err(Error::DuplicateLocation { id });
            }
        }

        for (index, connection) in file.connections.iter().enumerate() {
            for id in [connection.from, connection.to] {
                if !locations.contains_key(&id) {
                    return Err(Error::UnknownConnectionEndpoint { index, id });
                }
            }
        }

        Ok(Self {
            start: file.start,
            locations,
            connections: file.connections,
            name_to_id,
        })
    }

    /// Register every declared connection into a fresh graph.
    ///
    /// Unlock requirements are attached to each direction that was registered.
    pub fn build_graph(&self) -> Result<LocationGraph> {
        self.build_graph_where(|_| true)
    }

    /// Like [`World::build_graph`] but skips connections rejected by `keep`.
    ///
    /// The path engine never consults unlock requirements, so callers that
    /// want lock-aware routing build a graph of only the passable connections.
    pub fn build_graph_where<F>(&self, keep: F) -> Result<LocationGraph>
    where
        F: Fn(&Connection) -> bool,
    {
        let mut graph = LocationGraph::with_capacity(self.locations.len());
        for (index, connection) in self.connections.iter().enumerate() {
            if !keep(connection) {
                debug!(index, "skipping filtered connection");
                continue;
            }
            let rejected = |source| Error::ConnectionRejected {
                index,
                source: Box::new(source),
            };
            let Connection {
                from,
                to,
                travel_time,
                danger,
                ..
            } = *connection;

            if connection.bidirectional {
                graph
                    .add_bidirectional_edge(from, to, travel_time, danger)
                    .map_err(rejected)?;
            } else {
                graph
                    .add_edge(from, to, travel_time, danger)
                    .map_err(rejected)?;
            }

            if let Some(requirement) = &connection.unlock_requirement {
                graph
                    .set_unlock_requirement(from, to, requirement.clone())
                    .map_err(rejected)?;
                if connection.bidirectional {
                    graph
                        .set_unlock_requirement(to, from, requirement.clone())
                        .map_err(rejected)?;
                }
            }
        }
        debug!(
            locations = graph.location_count(),
            edges = graph.edge_count(),
            "built location graph"
        );
        Ok(graph)
    }

    /// Declared locations that no connection in `graph` touches, by id.
    pub fn unplaced_locations(&self, graph: &LocationGraph) -> Vec<LocationId> {
        let mut unplaced: Vec<LocationId> = self
            .locations
            .keys()
            .copied()
            .filter(|id| !graph.contains(*id))
            .collect();
        unplaced.sort_unstable();
        unplaced
    }

    /// Sweep connectivity over every declared location, not only those the
    /// graph registered. Unplaced locations other than `start` are listed
    /// after the graph's unreachable ones.
    pub fn check_connectivity(
        &self,
        graph: &LocationGraph,
        start: LocationId,
    ) -> Result<ConnectivityReport> {
        let mut report = check_connectivity_sweep(graph, start)?;
        let unplaced = self.unplaced_locations(graph);
        report.locations += unplaced.len();
        for id in unplaced.into_iter().filter(|id| *id != start) {
            warn!(location = id, "location has no connections");
            report.unreachable.push(id);
        }
        Ok(report)
    }

    /// Lookup a location identifier by name, ignoring case.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(&name.to_lowercase()).copied()
    }

    /// Display name for a location id.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(&id).map(|location| location.name.as_str())
    }

    /// Resolve user input that is either a numeric id or a location name.
    pub fn resolve(&self, query: &str) -> Result<LocationId> {
        if let Ok(id) = query.trim().parse::<LocationId>() {
            if self.locations.contains_key(&id) {
                return Ok(id);
            }
        }
        self.location_id_by_name(query.trim())
            .ok_or_else(|| Error::UnknownLocation {
                name: query.to_string(),
                suggestions: self.fuzzy_location_matches(query, 3),
            })
    }

    /// Names that resemble `query`, best match first.
    pub fn fuzzy_location_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .values()
            .map(|location| {
                let score = strsim::jaro_winkler(&needle, &location.name.to_lowercase());
                (score, location.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
