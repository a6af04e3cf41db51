//! Actions - everything that can change application state
//!
//! Naming follows the intent/result split:
//! - Intents: `Mount`, `WeatherFetch` (start a cycle)
//! - Results: `LocationDid*`, `WeatherDid*` (async outcome, tagged with the cycle)
//! - UI/global: `UiTerminalResize`, `Tick`, `Quit`

use crate::error::{FetchError, LocateError};
use crate::model::{Coordinate, WeatherSnapshot};
use crate::state::CycleId;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    /// The view came up; starts the first cycle
    #[action(category = "weather")]
    Mount,

    /// User asked to try again / refresh
    #[action(category = "weather")]
    WeatherFetch,

    /// Locator produced a coordinate
    #[action(category = "location")]
    LocationDidResolve {
        cycle: CycleId,
        coordinate: Coordinate,
    },

    /// Locator failed
    #[action(category = "location")]
    LocationDidError { cycle: CycleId, error: LocateError },

    /// Weather request succeeded and parsed
    #[action(category = "weather")]
    WeatherDidLoad {
        cycle: CycleId,
        snapshot: WeatherSnapshot,
    },

    /// Weather request failed
    #[action(category = "weather")]
    WeatherDidError { cycle: CycleId, error: FetchError },

    /// Terminal was resized - update sprite sizing
    #[action(category = "ui")]
    UiTerminalResize(u16, u16),

    /// Periodic tick for the loading animation
    Tick,

    /// Exit the application
    Quit,
}
