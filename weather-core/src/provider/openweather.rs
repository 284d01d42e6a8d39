use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::model::{ProviderErrorBody, ProviderPayload};

use super::{FetchError, WeatherFetcher};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherFetcher {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the fetcher at another host, e.g. a proxy or a local mock server.
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            endpoint: format!("{}/data/2.5/weather", base_url.trim_end_matches('/')),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    async fn fetch_weather(&self, city: &str) -> Result<ProviderPayload, FetchError> {
        tracing::debug!("Requesting current weather for {city}");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Provider {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        let value: Value = serde_json::from_str(&body)?;

        // The API occasionally reports failures in the body of a 200.
        if let Some(code) = embedded_failure_code(&value) {
            return Err(FetchError::Provider {
                status: code,
                message: provider_message(&body),
            });
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// Non-200 `cod` carried by an otherwise successful response.
fn embedded_failure_code(value: &Value) -> Option<u16> {
    let cod = value.get("cod")?;

    let code = match cod {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse::<u64>().ok(),
        _ => None,
    }
    .and_then(|c| u16::try_from(c).ok())
    .unwrap_or(0);

    (code != 200).then_some(code)
}

/// The provider's own `message`, or the raw body when there is none.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
