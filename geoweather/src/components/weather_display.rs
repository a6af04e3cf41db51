//! Top-level weather view
//!
//! Owns the outer frame and key handling; delegates the content to
//! `WeatherBody` and the key hints to `HelpBar`.

use crossterm::event::{KeyCode, KeyModifiers};
use geoweather_core::{Action, AppState};
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};
use tui_dispatch::{Component, EventKind};

use super::{HelpBar, HelpBarProps, WeatherBody, WeatherBodyProps};

pub const ERROR_ICON: &str = "⚠️";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct WeatherDisplay;

impl Component for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    // `Self: 'a` keeps the props lifetime early-bound, as in the trait's
    // `Vec<impl Action>` signature
    fn handle_event<'a>(&mut self, event: &EventKind, props: Self::Props<'a>) -> Vec<Action>
    where
        Self: 'a,
    {
        if !props.is_focused {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![Action::Quit]
            }
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            // Try Again / Refresh; nothing to restart while a cycle is in flight
            KeyCode::Char('r') | KeyCode::F(5) | KeyCode::Enter
                if !props.state.fetch.is_pending() =>
            {
                vec![Action::WeatherFetch]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let loading_indicator = if state.fetch.is_pending() {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Weather{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Content (centered by WeatherBody)
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        WeatherBody.render(frame, chunks[0], WeatherBodyProps { state });
        HelpBar.render(frame, chunks[1], HelpBarProps { fetch: &state.fetch });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::{ActionAssertions, ActionAssertionsEq, RenderHarness, key};
    use geoweather_core::{FetchState, WeatherSnapshot};

    fn ready_state() -> AppState {
        AppState {
            fetch: FetchState::Ready(WeatherSnapshot {
                temperature: 22.5,
                apparent_temperature: 21.4,
                humidity: 45,
                precipitation: 0.0,
                weather_code: 0,
                wind_speed: 5.0,
                wind_direction: 0.0,
                surface_pressure: 1015.0,
                timezone: "Asia/Tokyo".into(),
            }),
            ..Default::default()
        }
    }

    fn press(component: &mut WeatherDisplay, state: &AppState, k: &str) -> Vec<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.handle_event(&EventKind::Key(key(k)), props)
    }

    #[test]
    fn test_handle_event_refresh() {
        let mut component = WeatherDisplay;
        let state = ready_state();

        let actions = press(&mut component, &state, "r");
        actions.assert_count(1);
        actions.assert_first(Action::WeatherFetch);

        press(&mut component, &state, "f5").assert_first(Action::WeatherFetch);
        press(&mut component, &state, "enter").assert_first(Action::WeatherFetch);
    }

    #[test]
    fn test_handle_event_retry_from_failed() {
        let mut component = WeatherDisplay;
        let state = AppState {
            fetch: FetchState::Failed("nope".into()),
            ..Default::default()
        };

        press(&mut component, &state, "r").assert_first(Action::WeatherFetch);
    }

    #[test]
    fn test_refresh_ignored_while_pending() {
        let mut component = WeatherDisplay;
        let state = AppState::default();

        press(&mut component, &state, "r").assert_empty();
    }

    #[test]
    fn test_handle_event_quit() {
        let mut component = WeatherDisplay;
        let state = AppState::default();

        press(&mut component, &state, "q").assert_first(Action::Quit);
        press(&mut component, &state, "esc").assert_first(Action::Quit);
        press(&mut component, &state, "ctrl+c").assert_first(Action::Quit);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = WeatherDisplay;
        let state = ready_state();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions = component.handle_event(&EventKind::Key(key("r")), props);
        actions.assert_empty();
    }

    #[test]
    fn test_resize_is_not_a_component_event() {
        let mut component = WeatherDisplay;
        let state = ready_state();
        let props = WeatherDisplayProps {
            state: &state,
            is_focused: true,
        };

        component
            .handle_event(&EventKind::Resize(10, 10), props)
            .assert_empty();
    }

    #[test]
    fn test_render_loading() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WeatherDisplay;
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Getting your location..."));
    }

    #[test]
    fn test_render_weather() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WeatherDisplay;
        let state = ready_state();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("23°C"));
        assert!(output.contains("Clear sky"));
        assert!(output.contains("Feels like 21°C"));
    }
}
