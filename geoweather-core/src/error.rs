//! Failure taxonomy for a fetch cycle
//!
//! Errors carry plain strings instead of the underlying library errors so they
//! can travel inside `Clone + PartialEq` actions.

use std::time::Duration;

use thiserror::Error;

/// Errors reported by the positioning capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("Geolocation is not supported on this host")]
    Unsupported,
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors from the weather request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Parse(String),
}

/// Any failure that ends a cycle in `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CycleError {
    /// Message surfaced to the user in the failed view.
    pub fn failure_message(&self) -> String {
        match self {
            CycleError::Locate(LocateError::Unsupported) => LocateError::Unsupported.to_string(),
            CycleError::Locate(e) => format!("Unable to retrieve your location: {e}"),
            CycleError::Fetch(e) => format!("Failed to fetch weather data: {e}"),
        }
    }
}
