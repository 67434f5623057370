use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/search";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub max_results: usize,
    pub timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // SERPAPI_API_KEY is the name older deployments used for the same key.
        let api_key = get("SERPER_API_KEY").or_else(|| get("SERPAPI_API_KEY"));

        let endpoint = match get("SERPER_ENDPOINT") {
            Some(raw) => parse_endpoint(&raw)
                .context("Invalid value for environment variable SERPER_ENDPOINT")?,
            None => DEFAULT_ENDPOINT.to_string(),
        };
        let timeout_secs: u64 = parse_or_default(
            get("SEARCH_TIMEOUT_SECS"),
            "SEARCH_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            bail!("SEARCH_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            api_key,
            endpoint,
            max_results: parse_or_default(
                get("SEARCH_MAX_RESULTS"),
                "SEARCH_MAX_RESULTS",
                DEFAULT_MAX_RESULTS,
            )?,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr: parse_or_default(get("BIND_ADDR"), "BIND_ADDR", default_bind_addr())?,
        })
    }
}

/// Accepts only absolute http(s) URLs.
pub fn parse_endpoint(raw: &str) -> Result<String> {
    let url = reqwest::Url::parse(raw.trim())
        .with_context(|| format!("Search endpoint is not a valid URL: {raw}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("Search endpoint must use http or https: {raw}");
    }
    Ok(url.to_string())
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn parse_or_default<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for environment variable {key}: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERPER_API_KEY", "abc"),
            ("SERPER_ENDPOINT", "http://localhost:9999/search"),
            ("SEARCH_MAX_RESULTS", "5"),
            ("SEARCH_TIMEOUT_SECS", "3"),
            ("BIND_ADDR", "127.0.0.1:3000"),
        ])
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.endpoint, "http://localhost:9999/search");
        assert_eq!(config.max_results, 5);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_legacy_key_name() {
        let config = config_from(&[("SERPAPI_API_KEY", "legacy")]).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("legacy"));

        let config = config_from(&[("SERPAPI_API_KEY", "legacy"), ("SERPER_API_KEY", "new")]).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("new"));
    }

    #[test]
    fn test_blank_key_is_unset() {
        let config = config_from(&[("SERPER_API_KEY", "  ")]).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_invalid_number() {
        let err = config_from(&[("SEARCH_MAX_RESULTS", "ten")]).unwrap_err();
        assert!(format!("{err:#}").contains("SEARCH_MAX_RESULTS"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = config_from(&[("SEARCH_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(format!("{err:#}").contains("SEARCH_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let err = config_from(&[("SERPER_ENDPOINT", "google.serper.dev/search")]).unwrap_err();
        assert!(format!("{err:#}").contains("SERPER_ENDPOINT"));

        assert!(config_from(&[("SERPER_ENDPOINT", "ftp://example.com/search")]).is_err());
    }

    #[test]
    fn test_parse_endpoint() {
        assert_eq!(
            parse_endpoint(" http://127.0.0.1:9000/search ").unwrap(),
            "http://127.0.0.1:9000/search"
        );
        assert!(parse_endpoint("not a url").is_err());
        assert!(parse_endpoint("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_invalid_bind_addr() {
        assert!(config_from(&[("BIND_ADDR", "not-an-addr")]).is_err());
    }
}
