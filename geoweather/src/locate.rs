//! Positioning capability
//!
//! A [`Locator`] answers one question, "where are we right now?", and is asked
//! again on every fetch cycle. Nothing is cached between calls.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use geoweather_core::{Coordinate, LocateError};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::api::{self, GeocodingError};
use crate::config::LocatorSettings;

#[async_trait]
pub trait Locator: Send + Sync {
    /// Single-shot position lookup.
    async fn current_position(&self) -> Result<Coordinate, LocateError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Run a locator with an upper bound on how long it may take.
pub async fn locate_with_timeout(
    locator: &dyn Locator,
    timeout: Duration,
) -> Result<Coordinate, LocateError> {
    match tokio::time::timeout(timeout, locator.current_position()).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(locator = locator.name(), ?timeout, "locate timed out");
            Err(LocateError::Timeout(timeout))
        }
    }
}

/// Build the locator described by the settings.
pub fn from_settings(settings: &LocatorSettings, client: reqwest::Client) -> Arc<dyn Locator> {
    match settings {
        LocatorSettings::Ip { endpoint } => Arc::new(IpLocator::new(client, endpoint.clone())),
        LocatorSettings::City { name, endpoint } => {
            Arc::new(CityLocator::new(client, endpoint.clone(), name.clone()))
        }
        LocatorSettings::Fixed(coordinate) => Arc::new(FixedLocator(*coordinate)),
        LocatorSettings::Unsupported => Arc::new(UnsupportedLocator),
    }
}

// ============================================================================
// Fixed / unsupported
// ============================================================================

/// Always answers with the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub Coordinate);

#[async_trait]
impl Locator for FixedLocator {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        Ok(self.0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// No positioning capability on this host.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocator;

#[async_trait]
impl Locator for UnsupportedLocator {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        Err(LocateError::Unsupported)
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

// ============================================================================
// IP geolocation
// ============================================================================

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Approximate position from the public IP address (ip-api.com format).
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: reqwest::Client,
    endpoint: String,
}

impl IpLocator {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Locator for IpLocator {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(|e| LocateError::PositionUnavailable(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(LocateError::PermissionDenied(format!(
                    "lookup refused with HTTP {}",
                    response.status().as_u16()
                )));
            }
            status if !status.is_success() => {
                return Err(LocateError::PositionUnavailable(format!(
                    "lookup failed with HTTP {}",
                    status.as_u16()
                )));
            }
            _ => {}
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocateError::PositionUnavailable(e.to_string()))?;

        if body.status != "success" {
            let reason = body.message.unwrap_or_else(|| "lookup failed".into());
            return Err(LocateError::PositionUnavailable(reason));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) if Coordinate::new(lat, lon).is_valid() => {
                Ok(Coordinate::new(lat, lon))
            }
            _ => Err(LocateError::PositionUnavailable(
                "lookup returned no coordinates".into(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "ip"
    }
}

// ============================================================================
// City geocoding
// ============================================================================

/// Geocodes a fixed city name on every call.
#[derive(Debug, Clone)]
pub struct CityLocator {
    client: reqwest::Client,
    endpoint: String,
    city: String,
}

impl CityLocator {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            city: city.into(),
        }
    }
}

#[async_trait]
impl Locator for CityLocator {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        api::geocode_city(&self.client, &self.endpoint, &self.city)
            .await
            .map_err(|e| match e {
                GeocodingError::Status(code @ (401 | 403)) => {
                    LocateError::PermissionDenied(format!("geocoding refused with HTTP {code}"))
                }
                other => LocateError::PositionUnavailable(other.to_string()),
            })
    }

    fn name(&self) -> &'static str {
        "city"
    }
}
