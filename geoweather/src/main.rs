//! geoweather - current weather for wherever you are
//!
//! # Usage
//!
//! ```sh
//! # Locate by public IP (default)
//! geoweather
//!
//! # Locate by city name, log to a file
//! geoweather --locator city --city Lisbon --log-file /tmp/geoweather.log
//!
//! # Fixed coordinates
//! geoweather --locator fixed --lat 50.45 --lon 30.52
//! ```

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use geoweather::api::WeatherClient;
use geoweather::config::{Args, Settings};
use geoweather::effects::Services;
use geoweather::runtime::Runtime;
use geoweather::{locate, logging};
use geoweather_core::{Action, AppState};
use ratatui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = Settings::try_from(args)?;

    logging::init(settings.log_file.as_deref()).context("could not open log file")?;

    let client = reqwest::Client::builder()
        .timeout(settings.request_timeout)
        .build()
        .context("could not build HTTP client")?;
    let locator = locate::from_settings(&settings.locator, client.clone());
    let weather = WeatherClient::with_client(client, settings.forecast_endpoint.clone());
    tracing::info!(
        locator = locator.name(),
        endpoint = weather.endpoint(),
        "starting"
    );
    let services = Services::new(locator, Arc::new(weather), settings.locate_timeout);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(AppState::new(), services);
    runtime.enqueue(Action::Mount);
    let result = runtime.run(&mut terminal).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    tracing::info!("exited");
    Ok(())
}
