use serde::Deserialize;
use std::env;
use thiserror::Error;

use crate::{
    sys_bot::bot_openai::{OPENAI_API_URL, OPENAI_MAX_TOKENS, OPENAI_MODEL},
    sys_core::core_logging::LogFormat,
    sys_resource::read_resource,
};

// Everything comes from the JSON config file except the API key,
// which is read from OPENAI_API_KEY, and an optional PORT override.

pub const DEFAULT_CONFIG_PATH: &str = "cfg/config.json";
pub const CONFIG_PATH_ENV: &str = "COURSELINE_CONFIG";
const API_KEY_ENV: &str = "OPENAI_API_KEY";
const PORT_ENV: &str = "PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format (expected JSON): {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("Environment variable {name} has an invalid value: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub openai_model: String,
    pub openai_max_tokens: u32,
    pub openai_api_url: String,
    pub instructions_path: Option<String>,
    pub catalog_path: Option<String>,
    pub log_format: LogFormat,
    #[serde(skip)]
    pub openai_api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            openai_model: OPENAI_MODEL.to_string(),
            openai_max_tokens: OPENAI_MAX_TOKENS,
            openai_api_url: OPENAI_API_URL.to_string(),
            instructions_path: Some("cfg/bots/instructions.txt".to_string()),
            catalog_path: None,
            log_format: LogFormat::Text,
            openai_api_key: String::new(),
        }
    }
}

impl AppConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Applies the environment on top of the file values: `PORT` overrides
    /// the port and `OPENAI_API_KEY` is required.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port.clone(),
            })?;
        }

        self.openai_api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingEnv(API_KEY_ENV))?;

        Ok(self)
    }
}

/// Load configuration:
/// - Reads the JSON config file at `path`.
/// - Reads `OPENAI_API_KEY` (required) and `PORT` from the process environment.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let contents = read_resource(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let parsed: AppConfig = serde_json::from_str(&contents)?;

    parsed.with_env(|name| env::var(name).ok())
}

pub fn config_path() -> String {
    env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.openai_model, OPENAI_MODEL);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn shipped_config_parses() {
        let config: AppConfig =
            serde_json::from_str(include_str!("../../cfg/config.json")).unwrap();
        assert_eq!(config.address(), "0.0.0.0:5000");
    }

    #[test]
    fn api_key_is_required() {
        let err = AppConfig::default().with_env(env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("OPENAI_API_KEY")));

        let err = AppConfig::default()
            .with_env(env_of(&[("OPENAI_API_KEY", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(_)));
    }

    #[test]
    fn env_overrides_port_and_sets_key() {
        let config = AppConfig::default()
            .with_env(env_of(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "9000")]))
            .unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::default()
            .with_env(env_of(&[("OPENAI_API_KEY", "k"), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: "PORT", .. }));
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let err = load_config("no/such/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
