use thiserror::Error;

use crate::{
    model::WeatherReport,
    normalize::normalize,
    provider::{FetchError, WeatherFetcher},
};

/// Failure of a single city search, as the user sees it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("city name is empty")]
    EmptyInput,

    /// The provider rejected the lookup; `message` is its own wording.
    #[error("{message}")]
    Provider { message: String },

    /// Network or decode failure. Detail is kept for logs only.
    #[error("weather lookup failed: {0}")]
    Transport(String),
}

impl SearchError {
    /// Text to put in front of the user.
    pub fn user_message(&self) -> &str {
        match self {
            SearchError::EmptyInput => "Enter city name",
            SearchError::Provider { message } => message,
            SearchError::Transport(_) => "Failed to fetch weather data",
        }
    }
}

impl From<FetchError> for SearchError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Provider { message, .. } => SearchError::Provider { message },
            other => SearchError::Transport(other.to_string()),
        }
    }
}

/// Trim the raw input and reject blanks.
pub fn validate_city(city: &str) -> Result<&str, SearchError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyInput);
    }
    Ok(trimmed)
}

/// Validate, fetch and normalize. The normalizer only ever sees success payloads.
pub async fn search(
    fetcher: &dyn WeatherFetcher,
    city: &str,
) -> Result<WeatherReport, SearchError> {
    let city = validate_city(city)?;

    match fetcher.fetch_weather(city).await {
        Ok(payload) => Ok(normalize(&payload)),
        Err(FetchError::Provider { status, message }) => {
            tracing::warn!("OpenWeather rejected lookup for {city} ({status}): {message}");
            Err(SearchError::Provider { message })
        }
        Err(err) => {
            tracing::error!("Error in fetching data for {city}: {err}");
            Err(err.into())
        }
    }
}
