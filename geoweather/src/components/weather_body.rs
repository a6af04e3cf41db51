use geoweather_core::{Action, AppState, FetchState, WeatherSnapshot, round_half_up};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::{Component, EventKind};

use super::{
    ERROR_ICON, SPINNERS, StatsGrid, StatsGridProps, TimezoneHeader, TimezoneHeaderProps,
};
use crate::sprites;

pub const LOADING_TEXT: &str = "Getting your location...";

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn handle_event<'a>(&mut self, _event: &EventKind, _props: Self::Props<'a>) -> Vec<Action>
    where
        Self: 'a,
    {
        vec![]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let blocks = blocks_for_state(props.state, area.width);

        let constraints = blocks.iter().map(|block| Constraint::Length(block.height()));
        let chunks = Layout::vertical(constraints).flex(Flex::Center).split(area);

        for (block, area) in blocks.into_iter().zip(chunks.iter().copied()) {
            block.render(frame, area);
        }
    }
}

enum BodyBlock<'a> {
    Line(Line<'static>),
    Wrapped { text: String, height: u16 },
    Sprite { art: Text<'static>, height: u16 },
    Header(&'a WeatherSnapshot),
    Stats(&'a WeatherSnapshot),
}

impl BodyBlock<'_> {
    fn height(&self) -> u16 {
        match self {
            BodyBlock::Line(_) => 1,
            BodyBlock::Wrapped { height, .. } | BodyBlock::Sprite { height, .. } => *height,
            BodyBlock::Header(_) => TimezoneHeader::HEIGHT,
            BodyBlock::Stats(_) => StatsGrid::HEIGHT,
        }
    }

    fn render(self, frame: &mut Frame, area: Rect) {
        match self {
            BodyBlock::Line(line) => {
                frame.render_widget(Paragraph::new(line), area);
            }
            BodyBlock::Wrapped { text, .. } => {
                let paragraph = Paragraph::new(text)
                    .style(Style::default().fg(Color::Rgb(200, 100, 100)))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, area);
            }
            BodyBlock::Sprite { art, .. } => {
                frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), area);
            }
            BodyBlock::Header(snapshot) => {
                TimezoneHeader.render(frame, area, TimezoneHeaderProps { snapshot });
            }
            BodyBlock::Stats(snapshot) => {
                StatsGrid.render(frame, area, StatsGridProps { snapshot });
            }
        }
    }
}

fn blocks_for_state(state: &AppState, width: u16) -> Vec<BodyBlock<'_>> {
    match &state.fetch {
        FetchState::Pending => {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            vec![
                blank_line(),
                BodyBlock::Line(
                    Line::from(vec![
                        Span::styled(spinner, Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!(" {LOADING_TEXT}"),
                            Style::default().fg(Color::Gray),
                        ),
                    ])
                    .centered(),
                ),
            ]
        }
        FetchState::Failed(message) => vec![
            blank_line(),
            BodyBlock::Line(Line::from(ERROR_ICON).centered()),
            BodyBlock::Line(
                Line::from(Span::styled("Error", Style::default().fg(Color::Red).bold()))
                    .centered(),
            ),
            BodyBlock::Wrapped {
                height: wrapped_height(message, width),
                text: message.clone(),
            },
            blank_line(),
            action_hint("Try Again"),
        ],
        FetchState::Ready(snapshot) => {
            let art = sprites::weather_sprite(snapshot.icon(), state.terminal_size);
            let sprite_height = art.lines.len() as u16;
            let temperature = round_half_up(snapshot.temperature);

            vec![
                BodyBlock::Header(snapshot),
                blank_line(),
                BodyBlock::Sprite {
                    art,
                    height: sprite_height,
                },
                blank_line(),
                BodyBlock::Line(
                    Line::from(Span::styled(
                        format!("{temperature}°C"),
                        Style::default().fg(temp_to_color(temperature)).bold(),
                    ))
                    .centered(),
                ),
                BodyBlock::Line(
                    Line::from(Span::styled(
                        snapshot.description(),
                        Style::default().fg(Color::Gray),
                    ))
                    .centered(),
                ),
                BodyBlock::Line(
                    Line::from(Span::styled(
                        format!(
                            "Feels like {}°C",
                            round_half_up(snapshot.apparent_temperature)
                        ),
                        Style::default().fg(Color::DarkGray),
                    ))
                    .centered(),
                ),
                blank_line(),
                BodyBlock::Stats(snapshot),
                blank_line(),
                action_hint("Refresh Weather"),
            ]
        }
    }
}

fn blank_line() -> BodyBlock<'static> {
    BodyBlock::Line(Line::from("").centered())
}

fn action_hint(label: &'static str) -> BodyBlock<'static> {
    BodyBlock::Line(
        Line::from(vec![
            Span::styled("[ ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" ] ", Style::default().fg(Color::DarkGray)),
            Span::styled(label, Style::default().fg(Color::White)),
        ])
        .centered(),
    )
}

/// Rows needed to show `text` wrapped at `width` columns (rough, by chars)
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let chars = text.chars().count().max(1);
    chars.div_ceil(width).min(usize::from(u16::MAX)) as u16
}

/// Get temperature-based color
fn temp_to_color(celsius: i64) -> Color {
    match celsius {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        31..=40 => Color::Rgb(255, 150, 80),  // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}
