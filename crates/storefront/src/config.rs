use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub search_debounce_ms: u64,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Result<Self> {
        let endpoint = std::env::var("BACKEND_ENDPOINT")
            .context("Missing environment variable: BACKEND_ENDPOINT")?;

        let search_debounce_ms = parse_u64(
            "SEARCH_DEBOUNCE_MS",
            std::env::var("SEARCH_DEBOUNCE_MS").ok(),
            DEFAULT_SEARCH_DEBOUNCE_MS,
        )?;

        let request_timeout_secs = parse_u64(
            "REQUEST_TIMEOUT_SECS",
            std::env::var("REQUEST_TIMEOUT_SECS").ok(),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            search_debounce_ms,
            request_timeout_secs,
            ..Self::new(&endpoint)
        })
    }

    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_u64(key: &str, raw: Option<String>, default: u64) -> Result<u64> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{key} must be a valid u64 integer")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash_and_uses_defaults() {
        let config = Config::new("http://localhost:8082/api/v1/");

        assert_eq!(config.endpoint, "http://localhost:8082/api/v1");
        assert_eq!(config.quiet_period(), Duration::from_millis(500));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn parse_u64_falls_back_to_default() {
        assert_eq!(parse_u64("SEARCH_DEBOUNCE_MS", None, 500).unwrap(), 500);
        assert_eq!(
            parse_u64("SEARCH_DEBOUNCE_MS", Some(" 250 ".into()), 500).unwrap(),
            250
        );
    }

    #[test]
    fn parse_u64_rejects_garbage() {
        let err = parse_u64("SEARCH_DEBOUNCE_MS", Some("soon".into()), 500).unwrap_err();

        assert_eq!(
            err.to_string(),
            "SEARCH_DEBOUNCE_MS must be a valid u64 integer"
        );
    }
}
