//! Connection settings for the hosted data store.
//!
//! Two values are required: the service endpoint and the public (anon)
//! access key. Missing either one is a startup failure; there is no
//! degraded mode without a data store.

use std::fmt;

use thiserror::Error;
use url::Url;

pub const ENDPOINT_VAR: &str = "SUPABASE_URL";
pub const ACCESS_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required setting `{0}`")]
    Missing(&'static str),

    #[error("Invalid data store endpoint `{value}`: {reason}")]
    InvalidEndpoint { value: String, reason: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct DataStoreConfig {
    /// Service root, always ending in `/` so relative joins stay below it.
    pub endpoint: Url,
    pub anon_key: String,
}

impl fmt::Debug for DataStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStoreConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

impl DataStoreConfig {
    pub fn new(endpoint: &str, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(ConfigError::Missing(ACCESS_KEY_VAR));
        }
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            anon_key,
        })
    }

    /// Resolve settings from the process environment (plus `.env` on native
    /// targets), then from values baked in at build time.
    ///
    /// On wasm only the build-time values exist.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            // A missing .env file is the normal case in deployments.
            let _ = dotenvy::dotenv();
        }

        Self::from_lookup(|name| runtime_value(name).or_else(|| compiled_value(name)))
    }

    /// Build from an arbitrary key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let endpoint = read(ENDPOINT_VAR)?;
        let anon_key = read(ACCESS_KEY_VAR)?;
        Self::new(&endpoint, anon_key)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        value: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_value(_name: &str) -> Option<String> {
    None
}

fn compiled_value(name: &str) -> Option<String> {
    let value = match name {
        ENDPOINT_VAR => option_env!("SUPABASE_URL"),
        ACCESS_KEY_VAR => option_env!("SUPABASE_ANON_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn resolves_both_values() {
        let config = DataStoreConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "https://demo.supabase.co"),
            (ACCESS_KEY_VAR, "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint.as_str(), "https://demo.supabase.co/");
        assert_eq!(config.anon_key, "anon-key");
    }

    #[test]
    fn missing_endpoint_is_reported_by_name() {
        let err =
            DataStoreConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "anon-key")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENDPOINT_VAR));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = DataStoreConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "https://demo.supabase.co"),
            (ACCESS_KEY_VAR, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(ACCESS_KEY_VAR));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = DataStoreConfig::new("ftp://demo.example", "key").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn keeps_sub_path_and_drops_query() {
        let config = DataStoreConfig::new("https://example.com/store?x=1", "key").unwrap();
        assert_eq!(config.endpoint.as_str(), "https://example.com/store/");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = DataStoreConfig::new("https://demo.supabase.co", "secret-key").unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret-key"));
    }
}
