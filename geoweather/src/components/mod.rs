//! UI components
//!
//! Components implement [`tui_dispatch::Component`] and stay pure: `render`
//! draws from props, `handle_event` turns input into actions. Only the
//! reducer changes state.

pub mod help_bar;
pub mod stats_grid;
pub mod timezone_header;
pub mod weather_body;
pub mod weather_display;

pub use help_bar::{HelpBar, HelpBarProps};
pub use stats_grid::{StatsGrid, StatsGridProps};
pub use timezone_header::{TimezoneHeader, TimezoneHeaderProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, SPINNERS, WeatherDisplay, WeatherDisplayProps};
