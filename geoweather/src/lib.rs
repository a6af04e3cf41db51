//! Terminal widget showing the current weather at the device's location.
//!
//! Each fetch cycle asks a [`locate::Locator`] for a fresh position, fetches
//! current conditions from Open-Meteo via [`api::WeatherClient`], and renders
//! one of three states: loading, error or weather.

pub mod api;
pub mod components;
pub mod config;
pub mod effects;
pub mod locate;
pub mod logging;
pub mod runtime;
pub mod sprites;
