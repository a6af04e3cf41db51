//! Application state - single source of truth
//!
//! Only the reducer mutates state. Components and the runtime read it.

use std::fmt;

use crate::model::WeatherSnapshot;

/// Generation number of a fetch cycle.
///
/// Every effect and every async result carries the cycle it was started for.
/// Results from any cycle other than the current one are stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleId(u64);

impl CycleId {
    /// No cycle has been started yet
    pub const NONE: CycleId = CycleId(0);
    pub const FIRST: CycleId = CycleId(1);

    pub fn next(self) -> Self {
        CycleId(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of the current fetch cycle. Exactly one variant is active.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    /// Locate or fetch in flight
    #[default]
    Pending,
    /// Cycle ended with an error; message is shown verbatim
    Failed(String),
    /// Cycle ended with a snapshot
    Ready(WeatherSnapshot),
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            FetchState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Everything the UI needs to render
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub fetch: FetchState,

    /// Current cycle; `CycleId::NONE` until mounted
    pub cycle: CycleId,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,

    /// Terminal dimensions (for sprite sizing)
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new() -> Self {
        Self {
            fetch: FetchState::Pending,
            cycle: CycleId::NONE,
            tick_count: 0,
            terminal_size: (80, 24), // updated on resize
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.cycle != CycleId::NONE
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
