//! Open-Meteo API client
//!
//! Effects spawn calls into this module from async tasks; results come back to
//! the store as actions. Nothing here touches application state.

use std::time::Duration;

use async_trait::async_trait;
use geoweather_core::{Coordinate, FetchError, WeatherSnapshot};
use serde::Deserialize;

/// Fields requested in the `current` query parameter, in API order.
pub const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "precipitation",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
    "surface_pressure",
];

/// Anything that can produce current conditions for a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_weather(&self, coordinate: Coordinate) -> Result<WeatherSnapshot, FetchError>;
}

// ============================================================================
// Forecast API
// ============================================================================

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    timezone: String,
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: u8,
    apparent_temperature: f64,
    precipitation: f64,
    weather_code: i32,
    wind_speed_10m: f64,
    wind_direction_10m: f64,
    surface_pressure: f64,
}

impl From<ForecastResponse> for WeatherSnapshot {
    fn from(response: ForecastResponse) -> Self {
        let current = response.current;
        WeatherSnapshot {
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            humidity: current.relative_humidity_2m,
            precipitation: current.precipitation,
            weather_code: current.weather_code,
            wind_speed: current.wind_speed_10m,
            wind_direction: current.wind_direction_10m,
            surface_pressure: current.surface_pressure,
            timezone: response.timezone,
        }
    }
}

/// Client for the forecast endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WeatherClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn current_weather(&self, coordinate: Coordinate) -> Result<WeatherSnapshot, FetchError> {
        let current = CURRENT_FIELDS.join(",");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("current", current),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "forecast request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!(
            timezone = %parsed.timezone,
            code = parsed.current.weather_code,
            "forecast loaded"
        );
        Ok(parsed.into())
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Transport("request timed out".into())
    } else {
        FetchError::Transport(e.to_string())
    }
}

// ============================================================================
// Geocoding API
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoding service responded with HTTP {0}")]
    Status(u16),
    #[error("city not found: {0}")]
    NotFound(String),
}

/// Resolve a city name to coordinates (first match).
pub async fn geocode_city(
    client: &reqwest::Client,
    endpoint: &str,
    city: &str,
) -> Result<Coordinate, GeocodingError> {
    let response = client
        .get(endpoint)
        .query(&[("name", city), ("count", "1"), ("language", "en")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(GeocodingError::Status(response.status().as_u16()));
    }

    let data: GeocodingResponse = response.json().await?;

    data.results
        .and_then(|results| results.into_iter().next())
        .map(|r| Coordinate::new(r.latitude, r.longitude))
        .ok_or_else(|| GeocodingError::NotFound(city.to_string()))
}
