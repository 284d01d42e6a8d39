//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather fetcher and its raw payload model
//! - Normalization of payloads into display-ready reports
//! - The search entry point and the view state it updates
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod search;
pub mod view;

pub use config::Config;
pub use model::{IconFamily, IconKey, ProviderPayload, WeatherReport};
pub use normalize::normalize;
pub use provider::{FetchError, WeatherFetcher, fetcher_from_config};
pub use search::{SearchError, search, validate_city};
pub use view::{NOTICE_TTL, Session, SharedView, ViewState};
