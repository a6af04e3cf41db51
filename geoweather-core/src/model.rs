//! Data model - coordinates and weather snapshots
//!
//! Values here are stored exactly as the API delivered them. Rounding and
//! other display transformations live in the `display_*` helpers and are only
//! applied when rendering.

use crate::classify::{self, IconCategory};

/// A geographic position produced by a locator for one fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True if both components are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Current conditions returned by one successful fetch.
///
/// Replaced wholesale on every successful cycle, never patched.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature at 2m, °C
    pub temperature: f64,
    /// Feels-like temperature, °C
    pub apparent_temperature: f64,
    /// Relative humidity at 2m, %
    pub humidity: u8,
    /// Precipitation, mm
    pub precipitation: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// Wind speed at 10m, km/h
    pub wind_speed: f64,
    /// Wind direction at 10m, degrees
    pub wind_direction: f64,
    /// Surface pressure, hPa
    pub surface_pressure: f64,
    /// IANA timezone name as reported by the API (e.g. `America/New_York`)
    pub timezone: String,
}

impl WeatherSnapshot {
    pub fn icon(&self) -> IconCategory {
        classify::icon_category(self.weather_code)
    }

    pub fn description(&self) -> &'static str {
        classify::description(self.weather_code)
    }

    /// Timezone name with underscores replaced by spaces.
    pub fn timezone_label(&self) -> String {
        self.timezone.replace('_', " ")
    }
}

/// Round to the nearest integer, with halves going toward positive infinity.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`. `f64::round` would give `-3`.
pub fn round_half_up(value: f64) -> i64 {
    // `value + 0.5` is inexact just below a half
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// 8-point compass label for a bearing in degrees.
pub fn compass_point(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + 22.5) / 45.0).floor() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}
