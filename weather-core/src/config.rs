use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";

/// City looked up when none is given.
pub const FALLBACK_CITY: &str = "Noida";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "London"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,

    /// Alternative provider host, mostly useful for proxies and tests.
    pub base_url: Option<String>,

    pub default_city: Option<String>,
}

impl Config {
    /// Load config from disk, then let the environment override it.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Overlay non-empty values returned by `lookup` for the known variables.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name| lookup(name).filter(|v: &String| !v.trim().is_empty());

        if let Some(key) = non_empty(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_empty(BASE_URL_ENV) {
            self.base_url = Some(url);
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key for real lookups; its absence is fatal.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: run `weather configure` or set {API_KEY_ENV}."
                )
            })
    }

    pub fn default_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(FALLBACK_CITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn require_api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.require_api_key().unwrap_err();

        assert!(err.to_string().contains("No OpenWeather API key configured"));
        assert!(err.to_string().contains("weather configure"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cfg = Config { api_key: Some("  ".into()), ..Config::default() };
        assert!(cfg.require_api_key().is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config::from_toml("api_key = \"FILE_KEY\"\n").unwrap();
        cfg.apply_env(env(&[(API_KEY_ENV, "ENV_KEY"), (BASE_URL_ENV, "http://localhost:1")]));

        assert_eq!(cfg.require_api_key().unwrap(), "ENV_KEY");
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:1"));
    }

    #[test]
    fn empty_env_value_keeps_file_value() {
        let mut cfg = Config::from_toml("api_key = \"FILE_KEY\"\n").unwrap();
        cfg.apply_env(env(&[(API_KEY_ENV, "")]));

        assert_eq!(cfg.require_api_key().unwrap(), "FILE_KEY");
    }

    #[test]
    fn default_city_falls_back_to_noida() {
        assert_eq!(Config::default().default_city(), "Noida");

        let cfg = Config::from_toml("default_city = \"Lisbon\"\n").unwrap();
        assert_eq!(cfg.default_city(), "Lisbon");
    }

    #[test]
    fn toml_roundtrip_keeps_fields() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: None,
            default_city: Some("Lima".into()),
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back = Config::from_toml(&text).unwrap();

        assert_eq!(back.api_key.as_deref(), Some("KEY"));
        assert_eq!(back.default_city(), "Lima");
    }
}
