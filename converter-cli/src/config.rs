//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use anyhow::Context;
use converter_client::DEFAULT_BASE_URL;
use converter_hex::ControllerSettings;
use converter_types::CurrencyCode;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub default_from: CurrencyCode,
    pub default_to: CurrencyCode,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup("RATES_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let debounce_ms: u64 = lookup("CONVERTER_DEBOUNCE_MS")
            .unwrap_or_else(|| "1000".to_string())
            .parse()
            .context("CONVERTER_DEBOUNCE_MS must be a whole number of milliseconds")?;

        let timeout_secs: u64 = lookup("CONVERTER_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("CONVERTER_TIMEOUT_SECS must be a whole number of seconds")?;

        let default_from: CurrencyCode = lookup("CONVERTER_DEFAULT_FROM")
            .unwrap_or_else(|| "USD".to_string())
            .parse()
            .context("CONVERTER_DEFAULT_FROM")?;

        let default_to: CurrencyCode = lookup("CONVERTER_DEFAULT_TO")
            .unwrap_or_else(|| "INR".to_string())
            .parse()
            .context("CONVERTER_DEFAULT_TO")?;

        Ok(Self {
            api_url,
            debounce: Duration::from_millis(debounce_ms),
            request_timeout: Duration::from_secs(timeout_secs),
            default_from,
            default_to,
        })
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            debounce_window: self.debounce,
            default_source: self.default_from,
            default_target: self.default_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.debounce, Duration::from_millis(1000));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.default_from, CurrencyCode::USD);
        assert_eq!(config.default_to, CurrencyCode::INR);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("RATES_API_URL", "http://localhost:8080/latest"),
            ("CONVERTER_DEBOUNCE_MS", "250"),
            ("CONVERTER_DEFAULT_FROM", "eur"),
            ("CONVERTER_DEFAULT_TO", "GBP"),
        ])
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/latest");
        assert_eq!(config.debounce, Duration::from_millis(250));

        let settings = config.controller_settings();
        assert_eq!(settings.default_source, CurrencyCode::EUR);
        assert_eq!(settings.default_target, CurrencyCode::GBP);
        assert_eq!(settings.debounce_window, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_from(&[("CONVERTER_DEBOUNCE_MS", "soon")]).is_err());
        assert!(config_from(&[("CONVERTER_DEFAULT_TO", "XYZ")]).is_err());
    }
}
