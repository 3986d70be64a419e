//! Core library for the weather web app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client behind a provider trait
//! - Normalization of provider payloads into display-ready values
//!   (icon classes, rounding, clock strings, the date block)
//!
//! It is used by `weather-web`, but has no dependency on any HTTP server.

pub mod clock;
pub mod config;
pub mod icon;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod service;

pub use config::{Config, OpenWeatherConfig, ServerConfig};
pub use model::{DateInfo, DayStatus, DisplayWeather, RawWeatherPayload, WeatherQuery};
pub use normalize::{NormalizationError, normalize};
pub use provider::{OpenWeatherProvider, ProviderError, WeatherProvider};
pub use service::{WeatherError, WeatherService};
