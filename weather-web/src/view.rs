//! HTML views.
//!
//! Templates live in `templates/` and only see flat, pre-formatted strings;
//! every optional provider value is resolved to text here.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use weather_core::DisplayWeather;

const NOT_AVAILABLE: &str = "n/a";

/// Outcome of one lookup: exactly one of weather data or an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherView {
    Weather(DisplayWeather),
    Error(String),
}

/// Entry page: asks the browser for its position and offers a city search.
#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate;

#[derive(Template)]
#[template(path = "index.html")]
pub struct ResultTemplate {
    pub card: Option<WeatherCard>,
    pub error: Option<String>,
}

impl From<WeatherView> for ResultTemplate {
    fn from(view: WeatherView) -> Self {
        match view {
            WeatherView::Weather(data) => Self {
                card: Some(WeatherCard::from(data)),
                error: None,
            },
            WeatherView::Error(message) => Self {
                card: None,
                error: Some(message),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub place: String,
    pub icon_class: &'static str,
    pub condition: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub temp_min: String,
    pub temp_max: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
    pub visibility: String,
    pub sunrise: String,
    pub sunset: String,
    pub date: String,
    pub time: String,
    /// "day" or "night", used as a CSS class.
    pub theme: String,
}

impl From<DisplayWeather> for WeatherCard {
    fn from(data: DisplayWeather) -> Self {
        let place = match data.country {
            Some(country) if !country.is_empty() => format!("{}, {country}", data.location),
            _ => data.location,
        };

        Self {
            place,
            icon_class: data.weather_icon_class,
            condition: or_na(data.condition),
            description: or_na(data.description),
            temperature: data.temperature,
            feels_like: data.feels_like,
            temp_min: data.temp_min,
            temp_max: data.temp_max,
            humidity: or_na(data.humidity.map(|h| format!("{h}%"))),
            pressure: or_na(data.pressure.map(|p| format!("{p} hPa"))),
            wind_speed: or_na(data.wind_speed.map(|w| format!("{w} m/s"))),
            visibility: or_na(data.visibility_km.map(|v| format!("{v} km"))),
            sunrise: data.sunrise,
            sunset: data.sunset,
            date: data.date_info.date,
            time: data.date_info.time,
            theme: data.date_info.day_status.as_str().to_lowercase(),
        }
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render a template into an HTML response; a template failure is a 500.
pub fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render view");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
