//! Side effects requested by the reducer
//!
//! The reducer never performs I/O. It returns a
//! [`tui_dispatch::DispatchResult`] whose effects the runtime turns into tasks.
//! Effects carry the cycle they belong to so their results can be matched back
//! to it.

use crate::model::Coordinate;
use crate::state::CycleId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the locator for a fresh position
    Locate { cycle: CycleId },
    /// Request current conditions for a coordinate
    FetchWeather {
        cycle: CycleId,
        coordinate: Coordinate,
    },
}
