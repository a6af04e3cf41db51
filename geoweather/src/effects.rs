//! Effect handling - turns reducer effects into spawned tasks
//!
//! Each task reports back with a result action tagged with the effect's
//! cycle; the reducer decides whether that result is still wanted.

use std::sync::Arc;
use std::time::Duration;

use geoweather_core::{Action, Effect};
use tui_dispatch::TaskManager;

use crate::api::WeatherSource;
use crate::locate::{self, Locator};

/// Task key for the in-flight locate; a new cycle replaces it
pub const LOCATE_TASK: &str = "locate";
/// Task key for the in-flight weather request
pub const WEATHER_TASK: &str = "weather";

/// External collaborators used by effects
#[derive(Clone)]
pub struct Services {
    pub locator: Arc<dyn Locator>,
    pub weather: Arc<dyn WeatherSource>,
    pub locate_timeout: Duration,
}

impl Services {
    pub fn new(
        locator: Arc<dyn Locator>,
        weather: Arc<dyn WeatherSource>,
        locate_timeout: Duration,
    ) -> Self {
        Self {
            locator,
            weather,
            locate_timeout,
        }
    }
}

pub fn handle_effect(effect: Effect, services: &Services, tasks: &mut TaskManager<Action>) {
    match effect {
        Effect::Locate { cycle } => {
            let locator = Arc::clone(&services.locator);
            let timeout = services.locate_timeout;
            tracing::debug!(%cycle, locator = locator.name(), "locating");

            tasks.spawn(LOCATE_TASK, async move {
                match locate::locate_with_timeout(locator.as_ref(), timeout).await {
                    Ok(coordinate) => Action::LocationDidResolve { cycle, coordinate },
                    Err(error) => Action::LocationDidError { cycle, error },
                }
            });
        }
        Effect::FetchWeather { cycle, coordinate } => {
            let weather = Arc::clone(&services.weather);
            tracing::debug!(
                %cycle,
                lat = coordinate.latitude,
                lon = coordinate.longitude,
                "fetching weather"
            );

            tasks.spawn(WEATHER_TASK, async move {
                match weather.current_weather(coordinate).await {
                    Ok(snapshot) => Action::WeatherDidLoad { cycle, snapshot },
                    Err(error) => Action::WeatherDidError { cycle, error },
                }
            });
        }
    }
}
