//! Application state shared across handlers.

use weather_core::WeatherService;

/// Cheaply cloneable; holds no per-request or mutable data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub weather: WeatherService,
}

impl AppState {
    pub fn new(weather: WeatherService) -> Self {
        Self { weather }
    }
}
