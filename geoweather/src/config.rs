//! Command-line configuration
//!
//! Every flag has an environment fallback (`GEOWEATHER_*`). `Args` is the raw
//! clap surface; [`Settings`] is the validated form the rest of the app uses.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use geoweather_core::Coordinate;
use thiserror::Error;

pub const DEFAULT_FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOCODING_ENDPOINT: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_IP_ENDPOINT: &str = "http://ip-api.com/json/";

/// Loading spinner frame interval
pub const LOADING_ANIM_TICK_MS: u64 = 100;

/// Where the position comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocatorKind {
    /// IP-based geolocation
    Ip,
    /// Geocode `--city` on every refresh
    City,
    /// Use `--lat` / `--lon` as-is
    Fixed,
    /// No positioning capability
    None,
}

/// Current weather for wherever you are
#[derive(Parser, Debug, Clone)]
#[command(name = "geoweather", version)]
#[command(about = "Shows current weather conditions for your location")]
pub struct Args {
    /// Positioning strategy
    #[arg(long, value_enum, default_value = "ip", env = "GEOWEATHER_LOCATOR")]
    pub locator: LocatorKind,

    /// City name for `--locator city`
    #[arg(long, short, env = "GEOWEATHER_CITY")]
    pub city: Option<String>,

    /// Latitude for `--locator fixed`
    #[arg(long, allow_negative_numbers = true, env = "GEOWEATHER_LAT")]
    pub lat: Option<f64>,

    /// Longitude for `--locator fixed`
    #[arg(long, allow_negative_numbers = true, env = "GEOWEATHER_LON")]
    pub lon: Option<f64>,

    /// Forecast API endpoint
    #[arg(long, default_value = DEFAULT_FORECAST_ENDPOINT, env = "GEOWEATHER_ENDPOINT")]
    pub endpoint: String,

    /// IP geolocation endpoint
    #[arg(long, default_value = DEFAULT_IP_ENDPOINT, env = "GEOWEATHER_IP_ENDPOINT")]
    pub ip_endpoint: String,

    /// Geocoding endpoint for `--locator city`
    #[arg(long, default_value = DEFAULT_GEOCODING_ENDPOINT, env = "GEOWEATHER_GEOCODING_ENDPOINT")]
    pub geocoding_endpoint: String,

    /// Seconds to wait for a position
    #[arg(long, default_value = "10", env = "GEOWEATHER_LOCATE_TIMEOUT")]
    pub locate_timeout: u64,

    /// Seconds to wait for each HTTP request
    #[arg(long, default_value = "10", env = "GEOWEATHER_REQUEST_TIMEOUT")]
    pub request_timeout: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "GEOWEATHER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("--locator city requires --city")]
    MissingCity,
    #[error("--locator fixed requires both --lat and --lon")]
    MissingCoordinate,
    #[error("coordinate {0}, {1} is out of range")]
    InvalidCoordinate(f64, f64),
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validated locator selection
#[derive(Clone, Debug, PartialEq)]
pub enum LocatorSettings {
    Ip { endpoint: String },
    City { name: String, endpoint: String },
    Fixed(Coordinate),
    Unsupported,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub locator: LocatorSettings,
    pub forecast_endpoint: String,
    pub locate_timeout: Duration,
    pub request_timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.locate_timeout == 0 {
            return Err(ConfigError::ZeroTimeout("--locate-timeout"));
        }
        if args.request_timeout == 0 {
            return Err(ConfigError::ZeroTimeout("--request-timeout"));
        }

        let locator = match args.locator {
            LocatorKind::Ip => LocatorSettings::Ip {
                endpoint: args.ip_endpoint,
            },
            LocatorKind::City => {
                let name = args
                    .city
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .ok_or(ConfigError::MissingCity)?;
                LocatorSettings::City {
                    name,
                    endpoint: args.geocoding_endpoint,
                }
            }
            LocatorKind::Fixed => {
                let (Some(lat), Some(lon)) = (args.lat, args.lon) else {
                    return Err(ConfigError::MissingCoordinate);
                };
                let coordinate = Coordinate::new(lat, lon);
                if !coordinate.is_valid() {
                    return Err(ConfigError::InvalidCoordinate(lat, lon));
                }
                LocatorSettings::Fixed(coordinate)
            }
            LocatorKind::None => LocatorSettings::Unsupported,
        };

        Ok(Settings {
            locator,
            forecast_endpoint: args.endpoint,
            locate_timeout: Duration::from_secs(args.locate_timeout),
            request_timeout: Duration::from_secs(args.request_timeout),
            log_file: args.log_file,
        })
    }
}
