//! Core types and logic for geoweather
//!
//! Terminal-free and I/O-free: everything here can be exercised with plain
//! unit tests.
//!
//! # Pieces
//!
//! - [`model`]: `Coordinate`, `WeatherSnapshot` and display helpers
//! - [`classify`]: weather code → icon category / description rule tables
//! - [`state`]: `AppState`, `FetchState`, `CycleId`
//! - [`action`] / [`effect`]: what can happen, and what the runtime must do
//! - [`reducer`]: the fetch lifecycle state machine
//! - [`error`]: locate/fetch failure taxonomy and user-facing messages
//!
//! # Example
//!
//! ```
//! use geoweather_core::{reducer, Action, AppState, Effect};
//! use tui_dispatch::EffectStore;
//!
//! let mut store = EffectStore::new(AppState::default(), reducer);
//! let result = store.dispatch(Action::Mount);
//!
//! assert!(store.state().fetch.is_pending());
//! assert!(matches!(result.effects[..], [Effect::Locate { .. }]));
//! ```

pub mod action;
pub mod classify;
pub mod effect;
pub mod error;
pub mod model;
pub mod reducer;
pub mod state;

pub use action::{Action, ActionCategory};
pub use classify::{description, icon_category, IconCategory};
pub use effect::Effect;
pub use error::{CycleError, FetchError, LocateError};
pub use model::{compass_point, round_half_up, Coordinate, WeatherSnapshot};
pub use reducer::reducer;
pub use state::{AppState, CycleId, FetchState};
