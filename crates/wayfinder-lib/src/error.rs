use std::path::PathBuf;

use thiserror::Error;

use crate::graph::LocationId;
use crate::queue::QueueError;

/// Convenient result alias for the wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a connection is registered with a travel time of zero.
    #[error("invalid travel time for connection {from} -> {to}: must be at least 1 hour")]
    InvalidWeight { from: LocationId, to: LocationId },

    /// Raised when annotating a connection that has not been registered.
    #[error("no connection from {from} to {to}")]
    EdgeNotFound { from: LocationId, to: LocationId },

    /// Raised when graph storage or query buffers could not be grown.
    #[error("allocation failed while {context}")]
    AllocationFailure { context: &'static str },

    /// Raised when summarising a path result that holds no locations.
    #[error("path result was empty")]
    EmptyPath,

    /// Priority queue misuse during a traversal.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// World data could not be located at the resolved path.
    #[error("world data not found at {path}")]
    WorldNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for world data")]
    ProjectDirsUnavailable,

    /// Raised when a location name or id could not be found in the world data.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when world data declares the same location id twice.
    #[error("duplicate location id encountered: {id}")]
    DuplicateLocation { id: LocationId },

    /// Raised when world data declares the same location name twice.
    #[error("duplicate location name encountered: {name}")]
    DuplicateLocationName { name: String },

    /// Raised when a connection in the world data names an undeclared location.
    #[error("connection #{index} in world data references undeclared location {id}")]
    UnknownConnectionEndpoint { index: usize, id: LocationId },

    /// Raised when a connection in the world data cannot be registered.
    #[error("connection #{index} in world data was rejected")]
    ConnectionRejected {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for world data parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
