//! Weather icon sprites, sized to the terminal
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! There is one sprite per icon category, in a small and a large variant.

use geoweather_core::IconCategory;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

mod sprite_data {
    pub mod clear {
        pub const SMALL: &str = include_str!("../sprites/clear/small.txt");
        pub const LARGE: &str = include_str!("../sprites/clear/large.txt");
    }
    pub mod cloudy {
        pub const SMALL: &str = include_str!("../sprites/cloudy/small.txt");
        pub const LARGE: &str = include_str!("../sprites/cloudy/large.txt");
    }
    pub mod rain {
        pub const SMALL: &str = include_str!("../sprites/rain/small.txt");
        pub const LARGE: &str = include_str!("../sprites/rain/large.txt");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// 3-4 lines, for compact terminals
    Small,
    /// 7 lines
    Large,
}

impl SpriteSize {
    /// Rows around the sprite in the ready view: border (2), help bar (1),
    /// header (2), spacers (4), temperature block (3), stats grid (5), hint (1).
    const CHROME_HEIGHT: u16 = 18;

    pub fn from_terminal_size(_width: u16, height: u16) -> Self {
        match height.saturating_sub(Self::CHROME_HEIGHT) {
            0..=6 => SpriteSize::Small,
            _ => SpriteSize::Large,
        }
    }
}

fn color(icon: IconCategory) -> Color {
    match icon {
        IconCategory::Clear => Color::Yellow,
        IconCategory::Cloudy => Color::Rgb(160, 160, 175),
        IconCategory::Rain => Color::Rgb(80, 140, 200),
    }
}

/// Sprite for an icon category at the size the terminal allows
pub fn weather_sprite(icon: IconCategory, terminal_size: (u16, u16)) -> Text<'static> {
    let size = SpriteSize::from_terminal_size(terminal_size.0, terminal_size.1);
    get_sprite(icon, size)
}

pub fn get_sprite(icon: IconCategory, size: SpriteSize) -> Text<'static> {
    let sprite = match (icon, size) {
        (IconCategory::Clear, SpriteSize::Small) => sprite_data::clear::SMALL,
        (IconCategory::Clear, SpriteSize::Large) => sprite_data::clear::LARGE,
        (IconCategory::Cloudy, SpriteSize::Small) => sprite_data::cloudy::SMALL,
        (IconCategory::Cloudy, SpriteSize::Large) => sprite_data::cloudy::LARGE,
        (IconCategory::Rain, SpriteSize::Small) => sprite_data::rain::SMALL,
        (IconCategory::Rain, SpriteSize::Large) => sprite_data::rain::LARGE,
    };

    let style = Style::default().fg(color(icon));
    sprite
        .lines()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect::<Vec<_>>()
        .into()
}
