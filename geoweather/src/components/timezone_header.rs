use geoweather_core::{Action, WeatherSnapshot};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::{Component, EventKind};


pub const LOCATION_ICON: &str = "📍 ";

pub struct TimezoneHeader;

pub struct TimezoneHeaderProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

impl TimezoneHeader {
    pub const HEIGHT: u16 = 2;
}

impl Component for TimezoneHeader {
    type Props<'a> = TimezoneHeaderProps<'a>;

    fn handle_event<'a>(&mut self, _event: &EventKind, _props: Self::Props<'a>) -> Vec<Action>
    where
        Self: 'a,
    {
        vec![]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let title = Line::from(Span::styled(
            "Current Weather",
            Style::default().fg(Color::White).bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let zone = Line::from(vec![
            Span::raw(LOCATION_ICON),
            Span::styled(
                props.snapshot.timezone_label(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(zone), chunks[1]);
    }
}
