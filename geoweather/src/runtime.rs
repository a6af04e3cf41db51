//! Event/action loop
//!
//! 1. Event (keyboard, resize) -> `WeatherDisplay::handle_event` -> actions
//! 2. Actions dispatched to the store (logged by `LoggingMiddleware`)
//! 3. Reducer updates state and returns effects
//! 4. Effects spawn keyed tasks on the `TaskManager`; results come back as actions
//! 5. If state changed, re-render
//!
//! The loading animation is driven by a `"tick"` interval subscription.

use std::io;
use std::time::Duration;

use crossterm::event::KeyEventKind;
use geoweather_core::{Action, AppState, Effect, reducer};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_dispatch::{
    Component, EffectStoreWithMiddleware, EventKind, LoggingMiddleware, RawEvent, Subscriptions,
    TaskManager, process_raw_event, spawn_event_poller,
};

use crate::components::{WeatherDisplay, WeatherDisplayProps};
use crate::config::LOADING_ANIM_TICK_MS;
use crate::effects::{self, Services};

/// Timeout passed to each `crossterm::event::poll` call
const POLL_TIMEOUT: Duration = Duration::from_millis(10);
/// Sleep between poll batches
const LOOP_SLEEP: Duration = Duration::from_millis(16);

pub const TICK_SUBSCRIPTION: &str = "tick";

type Store = EffectStoreWithMiddleware<AppState, Action, Effect, LoggingMiddleware>;

pub struct Runtime {
    store: Store,
    services: Services,
    tasks: TaskManager<Action>,
    subscriptions: Subscriptions<Action>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_render: bool,
}

impl Runtime {
    pub fn new(state: AppState, services: Services) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            store: EffectStoreWithMiddleware::new(state, reducer, LoggingMiddleware::new()),
            services,
            tasks: TaskManager::new(action_tx.clone()),
            subscriptions: Subscriptions::new(action_tx.clone()),
            action_tx,
            action_rx,
            should_render: true,
        }
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn tasks(&self) -> &TaskManager<Action> {
        &self.tasks
    }

    pub fn subscriptions(&self) -> &Subscriptions<Action> {
        &self.subscriptions
    }

    /// Dispatch one action and start its effects. Returns whether state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            effects::handle_effect(effect, &self.services, &mut self.tasks);
        }
        result.changed
    }

    /// Wait for the next queued action (user intent, tick or task result).
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Run until `Action::Quit`. Tasks and subscriptions are cancelled on the way out.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, POLL_TIMEOUT, LOOP_SLEEP, cancel_token.clone());

        self.subscriptions.interval(
            TICK_SUBSCRIPTION,
            Duration::from_millis(LOADING_ANIM_TICK_MS),
            || Action::Tick,
        );
        let mut display = WeatherDisplay;

        let size = terminal.size()?;
        self.dispatch(Action::UiTerminalResize(size.width, size.height));

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    let props = WeatherDisplayProps {
                        state,
                        is_focused: true,
                    };
                    display.render(frame, frame.area(), props);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw) = event_rx.recv() => {
                    let event = process_raw_event(raw);
                    match event {
                        EventKind::Resize(width, height) => {
                            self.enqueue(Action::UiTerminalResize(width, height));
                            self.should_render = true;
                            continue;
                        }
                        // Release/repeat events would double up key presses
                        EventKind::Key(key) if key.kind != KeyEventKind::Press => continue,
                        _ => {}
                    }

                    let props = WeatherDisplayProps {
                        state: self.store.state(),
                        is_focused: true,
                    };
                    for action in display.handle_event(&event, props) {
                        self.enqueue(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        tracing::info!("quit requested");
                        break;
                    }
                    if self.dispatch(action) {
                        self.should_render = true;
                    }
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.subscriptions.cancel_all();
        self.tasks.cancel_all();

        Ok(())
    }
}
