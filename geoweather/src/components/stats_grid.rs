//! Two-by-two grid of secondary readings (wind, humidity, pressure, precipitation)

use geoweather_core::{Action, WeatherSnapshot, compass_point, round_half_up};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::{Component, EventKind};


pub struct StatsGrid;

pub struct StatsGridProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

struct Stat {
    icon: &'static str,
    label: &'static str,
    value: String,
}

impl StatsGrid {
    /// Two rows of two lines, with a blank line between them
    pub const HEIGHT: u16 = 5;
    const CELL_WIDTH: u16 = 18;

    pub fn wind(snapshot: &WeatherSnapshot) -> String {
        format!(
            "{} km/h {}",
            round_half_up(snapshot.wind_speed),
            compass_point(snapshot.wind_direction)
        )
    }

    pub fn humidity(snapshot: &WeatherSnapshot) -> String {
        format!("{}%", snapshot.humidity)
    }

    pub fn pressure(snapshot: &WeatherSnapshot) -> String {
        format!("{} hPa", round_half_up(snapshot.surface_pressure))
    }

    /// Shown as delivered, no rounding
    pub fn precipitation(snapshot: &WeatherSnapshot) -> String {
        format!("{} mm", snapshot.precipitation)
    }

    fn stats(snapshot: &WeatherSnapshot) -> [Stat; 4] {
        [
            Stat {
                icon: "💨",
                label: "Wind Speed",
                value: Self::wind(snapshot),
            },
            Stat {
                icon: "💧",
                label: "Humidity",
                value: Self::humidity(snapshot),
            },
            Stat {
                icon: "⏲ ",
                label: "Pressure",
                value: Self::pressure(snapshot),
            },
            Stat {
                icon: "☔",
                label: "Precipitation",
                value: Self::precipitation(snapshot),
            },
        ]
    }
}

impl Component for StatsGrid {
    type Props<'a> = StatsGridProps<'a>;

    fn handle_event<'a>(&mut self, _event: &EventKind, _props: Self::Props<'a>) -> Vec<Action>
    where
        Self: 'a,
    {
        vec![]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

        let stats = Self::stats(props.snapshot);
        for (row, pair) in [rows[0], rows[2]].into_iter().zip(stats.chunks(2)) {
            let cells = Layout::horizontal([
                Constraint::Length(Self::CELL_WIDTH),
                Constraint::Length(Self::CELL_WIDTH),
            ])
            .flex(Flex::Center)
            .spacing(2)
            .split(row);

            for (cell, stat) in cells.iter().zip(pair) {
                let text = vec![
                    Line::from(vec![
                        Span::raw(stat.icon),
                        Span::styled(
                            format!(" {}", stat.label),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(Span::styled(
                        stat.value.clone(),
                        Style::default().fg(Color::White).bold(),
                    )),
                ];
                frame.render_widget(Paragraph::new(text), *cell);
            }
        }
    }
}
