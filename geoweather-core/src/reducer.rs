//! Reducer - the fetch lifecycle state machine
//!
//! ```text
//!   Mount ──► Pending ──LocationDidResolve──► (FetchWeather effect, still Pending)
//!               │  ▲                                   │
//!   LocationDidError                          WeatherDidLoad / WeatherDidError
//!               ▼  │ WeatherFetch                       ▼
//!            Failed ◄───────────────────────────── Ready / Failed
//! ```
//!
//! A cycle only starts from `Failed` or `Ready` (or on mount), so at most one
//! cycle is ever in flight. Results tagged with any other cycle are ignored.

use crate::action::Action;
use tui_dispatch::DispatchResult;

use crate::effect::Effect;
use crate::error::CycleError;
use crate::state::{AppState, CycleId, FetchState};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Intents =====
        Action::Mount => {
            if state.is_mounted() {
                return DispatchResult::unchanged();
            }
            start_cycle(state)
        }

        Action::WeatherFetch => {
            if state.fetch.is_pending() {
                tracing::debug!(cycle = %state.cycle, "cycle already in flight, ignoring fetch");
                return DispatchResult::unchanged();
            }
            start_cycle(state)
        }

        // ===== Async results =====
        Action::LocationDidResolve { cycle, coordinate } => {
            if !accepts(state, cycle) {
                return DispatchResult::unchanged();
            }
            DispatchResult::effect(Effect::FetchWeather { cycle, coordinate })
        }

        Action::LocationDidError { cycle, error } => {
            if !accepts(state, cycle) {
                return DispatchResult::unchanged();
            }
            fail(state, CycleError::Locate(error))
        }

        Action::WeatherDidLoad { cycle, snapshot } => {
            if !accepts(state, cycle) {
                return DispatchResult::unchanged();
            }
            state.fetch = FetchState::Ready(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError { cycle, error } => {
            if !accepts(state, cycle) {
                return DispatchResult::unchanged();
            }
            fail(state, CycleError::Fetch(error))
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.fetch.is_pending() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn start_cycle(state: &mut AppState) -> DispatchResult<Effect> {
    state.cycle = state.cycle.next();
    state.fetch = FetchState::Pending;
    tracing::info!(cycle = %state.cycle, "starting fetch cycle");
    DispatchResult::changed_with(Effect::Locate { cycle: state.cycle })
}

fn accepts(state: &AppState, cycle: CycleId) -> bool {
    let current = cycle == state.cycle && state.fetch.is_pending();
    if !current {
        tracing::debug!(
            result_cycle = %cycle,
            current_cycle = %state.cycle,
            "dropping stale result"
        );
    }
    current
}

fn fail(state: &mut AppState, error: CycleError) -> DispatchResult<Effect> {
    tracing::warn!(cycle = %state.cycle, error = %error, "fetch cycle failed");
    state.fetch = FetchState::Failed(error.failure_message());
    DispatchResult::changed()
}
