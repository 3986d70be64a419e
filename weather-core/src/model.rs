use std::fmt;

use serde::Deserialize;

/// A location to look weather up for.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    Coordinates { latitude: f64, longitude: f64 },
    /// Free-text city name, forwarded verbatim to the provider.
    City(String),
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherQuery::Coordinates { latitude, longitude } => {
                write!(f, "lat={latitude}, lon={longitude}")
            }
            WeatherQuery::City(name) => write!(f, "city={name:?}"),
        }
    }
}

// Provider payload. Every field is optional here so that a body which parses
// but lacks data is reported by the normalizer with the missing JSON path.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeatherPayload {
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    pub main: Option<RawMain>,
    pub visibility: Option<f64>,
    pub wind: Option<RawWind>,
    pub sys: Option<RawSys>,
    pub name: Option<String>,
    /// Shift in seconds from UTC for the queried location.
    pub timezone: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCondition {
    pub icon: Option<String>,
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMain {
    pub temp: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWind {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSys {
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Coarse bucket of the serving process's local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Day,
    Night,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Day => "Day",
            DayStatus::Night => "Night",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wall-clock block attached to every rendered result.
#[derive(Debug, Clone, PartialEq)]
pub struct DateInfo {
    /// e.g. "June 5, 2024"
    pub date: String,
    /// e.g. "Wednesday, 2:45 PM"
    pub time: String,
    pub day_status: DayStatus,
}

/// Display-ready weather, produced by [`crate::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayWeather {
    pub location: String,
    pub country: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub weather_icon_class: &'static str,
    pub temperature: String,
    pub temp_min: String,
    pub temp_max: String,
    pub feels_like: String,
    pub humidity: Option<u8>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub visibility_km: Option<f64>,
    pub sunrise: String,
    pub sunset: String,
    pub utc_offset_secs: Option<i64>,
    pub date_info: DateInfo,
}
