use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{Config, model::ProviderPayload, provider::openweather::OpenWeatherFetcher};

pub mod openweather;

/// Why a lookup never produced a success payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered, but with a failure (bad city, bad key, ...).
    #[error("OpenWeather request failed with status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Failed to reach OpenWeather: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse OpenWeather JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of raw current-weather payloads for a city.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    /// `city` is already trimmed and non-empty.
    async fn fetch_weather(&self, city: &str) -> Result<ProviderPayload, FetchError>;
}

/// Construct the OpenWeather fetcher from config.
pub fn fetcher_from_config(config: &Config) -> anyhow::Result<OpenWeatherFetcher> {
    let api_key = config.require_api_key()?;

    let fetcher = match config.base_url.as_deref() {
        Some(base) => OpenWeatherFetcher::with_base_url(api_key.to_owned(), base),
        None => OpenWeatherFetcher::new(api_key.to_owned()),
    };

    Ok(fetcher)
}
