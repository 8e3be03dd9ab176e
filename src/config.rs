use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_QUOTE_API_URL: &str = "https://dummyjson.com/quotes/random";
pub const DEFAULT_SPEECH_LANG: &str = "en-US";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub quote_api_url: String,
    pub speech_lang: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            quote_api_url: DEFAULT_QUOTE_API_URL.to_string(),
            speech_lang: DEFAULT_SPEECH_LANG.to_string(),
        }
    }
}

/// Looked up in order; the first file that loads wins.
#[cfg(target_arch = "wasm32")]
const CONFIG_PATHS: [&str; 2] = ["/config.json", "/assets/config.json"];

#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum ConfigError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("status {0}")]
    Status(u16),
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no config file found ({0})")]
    NotFound(String),
}

#[cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]
pub fn parse_runtime_config(body: &str) -> Result<RuntimeConfig, ConfigError> {
    Ok(serde_json::from_str(body)?)
}

/// Resolves once per page load. A missing or malformed config file is not
/// fatal: the page falls back to the built-in defaults.
pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        load_runtime_config().await.unwrap_or_else(|err| {
            tracing::warn!("config: {err}, using defaults");
            RuntimeConfig::default()
        })
    })
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let mut misses = Vec::new();
    for path in CONFIG_PATHS {
        match read_config_file(path).await {
            Ok(config) => {
                tracing::debug!("config: loaded {path}");
                return Ok(config);
            }
            // Dev servers answer unknown paths with index.html, so a decode
            // failure moves on to the next path too.
            Err(err) => misses.push(format!("{path}: {err}")),
        }
    }
    Err(ConfigError::NotFound(misses.join("; ")))
}

#[cfg(target_arch = "wasm32")]
async fn read_config_file(path: &str) -> Result<RuntimeConfig, ConfigError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| ConfigError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| ConfigError::Request(err.to_string()))?;
    parse_runtime_config(&body)
}

/// Outside the browser the same settings come from the environment.
#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let defaults = RuntimeConfig::default();
    Ok(RuntimeConfig {
        quote_api_url: std::env::var("QUOTE_API_URL").unwrap_or(defaults.quote_api_url),
        speech_lang: std::env::var("SPEECH_LANG").unwrap_or(defaults.speech_lang),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_runtime_config(r#"{"quote_api_url":"/api/quote"}"#).unwrap();
        assert_eq!(config.quote_api_url, "/api/quote");
        assert_eq!(config.speech_lang, DEFAULT_SPEECH_LANG);
    }

    #[test]
    fn empty_config_is_default() {
        let config = parse_runtime_config("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn malformed_config_is_a_decode_error() {
        let err = parse_runtime_config("<!doctype html>").unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    }
}
