use geoweather_core::{Action, FetchState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::{Component, EventKind};


pub struct HelpBar;

pub struct HelpBarProps<'a> {
    pub fetch: &'a FetchState,
}

impl HelpBar {
    /// Label of the restart key for the current state, if it does anything.
    pub fn restart_label(fetch: &FetchState) -> Option<&'static str> {
        match fetch {
            FetchState::Pending => None,
            FetchState::Failed(_) => Some(" try again  "),
            FetchState::Ready(_) => Some(" refresh  "),
        }
    }
}

impl Component for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn handle_event<'a>(&mut self, _event: &EventKind, _props: Self::Props<'a>) -> Vec<Action>
    where
        Self: 'a,
    {
        vec![]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key = Style::default().fg(Color::Cyan).bold();
        let hint = Style::default().fg(Color::DarkGray);

        let mut spans = vec![Span::raw(" ")];
        if let Some(label) = Self::restart_label(props.fetch) {
            spans.push(Span::styled("r", key));
            spans.push(Span::styled(label, hint));
        }
        spans.push(Span::styled("q", key));
        spans.push(Span::styled(" quit ", hint));

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
