//! Wayfinder library entry points.
//!
//! This crate maintains a weighted directed graph of locations, answers
//! shortest-path and reachability queries over it, and validates that a world
//! is fully navigable. World data (names, descriptions, declared connections)
//! is loaded separately and used to rebuild the graph each session. Consumers
//! such as the CLI should depend on the functions exported here instead of
//! reimplementing behaviour.

#![deny(warnings)]

pub mod connectivity;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod queue;
pub mod world;

pub use connectivity::{
    check_connectivity, check_connectivity_sweep, validate_connectivity, ConnectivityReport,
};
pub use dataset::{default_world_path, resolve_world_path, WORLD_ENV_VAR};
pub use error::{Error, Result};
pub use graph::{Edge, LocationGraph, LocationId};
pub use output::{DangerRating, RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_path, is_reachable, reachable_from, unreachable_from, PathResult};
pub use queue::{MinQueue, QueueError};
pub use world::{Connection, Location, World};
