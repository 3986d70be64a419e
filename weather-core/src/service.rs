//! Resolve a query into display-ready weather: fetch, then normalize.

use std::sync::Arc;

use crate::{
    config::Config,
    model::{DisplayWeather, WeatherQuery},
    normalize::{NormalizationError, normalize},
    provider::{OpenWeatherProvider, ProviderError, WeatherProvider},
};

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

/// Stateless lookup pipeline shared by every request handler.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Build the service around the OpenWeather client described by `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key()?.to_owned();
        let provider = OpenWeatherProvider::new(api_key, &config.openweather)?;
        Ok(Self::new(Arc::new(provider)))
    }

    pub async fn lookup(&self, query: &WeatherQuery) -> Result<DisplayWeather, WeatherError> {
        let raw = self.provider.fetch(query).await?;
        Ok(normalize(raw)?)
    }
}
