//! HTTP request handlers
//!
//! Both form endpoints build a [`WeatherQuery`] and run it through the same
//! lookup pipeline. They differ only in how the query is built and in the
//! message shown when the lookup fails.

use axum::{
    Router,
    extract::State,
    response::Response,
    routing::{get, post},
};
use serde::Deserialize;
use weather_core::WeatherQuery;

use crate::{
    extract::{BodyRejection, FormOrJson},
    state::AppState,
    view::{LoadingTemplate, ResultTemplate, WeatherView, render},
};

pub const COORDINATES_FAILURE: &str = "Failed to get weather data";
pub const CITY_FAILURE: &str = "something went wrong, check for spelling mistakes and try again";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(loading_screen).post(by_coordinates))
        .route("/search", post(by_city))
        .with_state(state)
}

/// A coordinate as submitted: text from a form, text or a number from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct CoordinatesForm {
    #[serde(default)]
    pub latitude: Option<CoordinateInput>,
    #[serde(default)]
    pub longitude: Option<CoordinateInput>,
}

impl CoordinatesForm {
    /// Presence and numeric check only; range is left to the provider.
    pub fn into_query(self) -> Result<WeatherQuery, String> {
        Ok(WeatherQuery::Coordinates {
            latitude: parse_coordinate("latitude", self.latitude.as_ref())?,
            longitude: parse_coordinate("longitude", self.longitude.as_ref())?,
        })
    }
}

fn parse_coordinate(field: &str, input: Option<&CoordinateInput>) -> Result<f64, String> {
    let parsed = match input {
        None => return Err(format!("missing {field}")),
        Some(CoordinateInput::Number(v)) => Some(*v),
        Some(CoordinateInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(format!("missing {field}"));
            }
            text.parse::<f64>().ok()
        }
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{field} is not a number: {input:?}")),
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default, rename = "searchQueryInput")]
    pub search_query_input: String,
}

/// `GET /`
pub async fn loading_screen() -> Response {
    render(&LoadingTemplate)
}

/// `POST /` with `latitude` and `longitude`.
pub async fn by_coordinates(
    State(state): State<AppState>,
    body: Result<FormOrJson<CoordinatesForm>, BodyRejection>,
) -> Response {
    match body
        .map_err(|BodyRejection(reason)| reason)
        .and_then(|FormOrJson(form)| form.into_query())
    {
        Ok(query) => respond(&state, query).await,
        Err(reason) => {
            tracing::warn!(%reason, "rejected coordinates form");
            render(&ResultTemplate::from(WeatherView::Error(
                COORDINATES_FAILURE.to_string(),
            )))
        }
    }
}

/// `POST /search` with `searchQueryInput`.
pub async fn by_city(
    State(state): State<AppState>,
    body: Result<FormOrJson<SearchForm>, BodyRejection>,
) -> Response {
    match body {
        Ok(FormOrJson(form)) => respond(&state, WeatherQuery::City(form.search_query_input)).await,
        Err(BodyRejection(reason)) => {
            tracing::warn!(%reason, "rejected search form");
            render(&ResultTemplate::from(WeatherView::Error(CITY_FAILURE.to_string())))
        }
    }
}

async fn respond(state: &AppState, query: WeatherQuery) -> Response {
    let view = match state.weather.lookup(&query).await {
        Ok(data) => WeatherView::Weather(data),
        Err(error) => {
            tracing::warn!(%query, %error, "Failed to make request");
            WeatherView::Error(failure_message(&query).to_string())
        }
    };
    render(&ResultTemplate::from(view))
}

fn failure_message(query: &WeatherQuery) -> &'static str {
    match query {
        WeatherQuery::Coordinates { .. } => COORDINATES_FAILURE,
        WeatherQuery::City(_) => CITY_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(latitude: &str, longitude: &str) -> CoordinatesForm {
        CoordinatesForm {
            latitude: Some(CoordinateInput::Text(latitude.into())),
            longitude: Some(CoordinateInput::Text(longitude.into())),
        }
    }

    #[test]
    fn numeric_coordinates_become_a_query() {
        let query = form("51.5", " -0.12 ").into_query().unwrap();
        assert_eq!(
            query,
            WeatherQuery::Coordinates {
                latitude: 51.5,
                longitude: -0.12
            }
        );
    }

    #[test]
    fn json_numbers_and_strings_are_both_accepted() {
        let form: CoordinatesForm =
            serde_json::from_str(r#"{"latitude": 51.5, "longitude": "-0.12"}"#).unwrap();

        assert_eq!(
            form.into_query().unwrap(),
            WeatherQuery::Coordinates {
                latitude: 51.5,
                longitude: -0.12
            }
        );
    }

    #[test]
    fn absent_fields_are_missing() {
        let form = CoordinatesForm {
            latitude: None,
            longitude: Some(CoordinateInput::Number(1.0)),
        };
        assert_eq!(form.into_query().unwrap_err(), "missing latitude");
    }

    #[test]
    fn out_of_range_coordinates_are_forwarded() {
        assert!(form("123.0", "400").into_query().is_ok());
    }

    #[test]
    fn missing_or_non_numeric_coordinates_are_rejected() {
        assert_eq!(form("", "1").into_query().unwrap_err(), "missing latitude");
        assert!(form("1", "east").into_query().unwrap_err().contains("longitude"));
        assert!(form("NaN", "1").into_query().is_err());
        assert!(form("1", "inf").into_query().is_err());
    }

    #[test]
    fn each_query_kind_has_its_own_failure_message() {
        let coords = WeatherQuery::Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };
        assert_eq!(failure_message(&coords), "Failed to get weather data");
        assert_eq!(
            failure_message(&WeatherQuery::City("x".into())),
            "something went wrong, check for spelling mistakes and try again"
        );
    }
}
