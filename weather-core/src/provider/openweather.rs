use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::OpenWeatherConfig,
    model::{RawWeatherPayload, WeatherQuery},
};

use super::{ProviderError, WeatherProvider, truncate_body};

/// Client for OpenWeather's current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    units: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, config: &OpenWeatherConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            units: config.units.clone(),
            http,
        })
    }

    fn location_params(query: &WeatherQuery) -> Vec<(&'static str, String)> {
        match query {
            WeatherQuery::Coordinates {
                latitude,
                longitude,
            } => vec![("lat", latitude.to_string()), ("lon", longitude.to_string())],
            WeatherQuery::City(name) => vec![("q", name.clone())],
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<RawWeatherPayload, ProviderError> {
        tracing::debug!(%query, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("appid", self.api_key.as_str()), ("units", self.units.as_str())])
            .query(&Self::location_params(query))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
