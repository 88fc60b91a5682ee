/// Client configuration loader.
///
/// Sources, lowest to highest precedence:
/// 1. built-in defaults (production base URL, no timeout)
/// 2. an optional TOML file, e.g. `nfd.toml`:
///    ```toml
///    api_key = "..."
///    base_url = "https://api.nationalflooddata.com/v3"
///    timeout_secs = 30
///    ```
/// 3. environment variables `NFD_API_KEY`, `NFD_BASE_URL`, `NFD_TIMEOUT_SECS`
///    (a `.env` file in the working directory is loaded first).

use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;

pub const ENV_API_KEY: &str = "NFD_API_KEY";
pub const ENV_BASE_URL: &str = "NFD_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "NFD_TIMEOUT_SECS";

/// Configuration error with setup guidance.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "No API key configured.\n\n  \
         Set one of:\n  \
         - NFD_API_KEY in the environment or in .env\n  \
         - api_key in the configuration file (--config nfd.toml)"
    )]
    MissingApiKey,

    #[error("Invalid base URL {url:?}: {source}\n\n  Example: https://api.nationalflooddata.com/v3")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid NFD_TIMEOUT_SECS value {0:?}: expected a whole number of seconds")]
    InvalidTimeout(String),
}

/// Settings for one API account.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Default configuration for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Overrides fields from variables returned by `lookup`. Empty values are ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = key.trim().to_string();
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = url.trim().to_string();
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            self.timeout_secs = Some(secs);
        }
        Ok(self)
    }

    /// Checks the settings are usable before a client is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        url::Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Loads configuration from `path` (if given), `.env` and the process
/// environment, then validates it.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    dotenv::dotenv().ok();

    let base = match path {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    let config = base.apply_env(|name| env::var(name).ok())?;
    config.validate()?;
    Ok(config)
}
