use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::model::{RawWeatherPayload, WeatherQuery};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Failure talking to the upstream weather API.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request to weather provider failed: {0}")]
    Request(reqwest::Error),
    #[error("weather provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("weather provider returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

// The request URL carries the API key, so it is stripped before the error is
// stored or displayed.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.without_url())
    }
}

impl ProviderError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Request(e) if e.is_timeout())
    }
}

/// One outbound call per lookup; no retries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<RawWeatherPayload, ProviderError>;
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
