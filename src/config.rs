//! Configuration for the DocQA client
//!
//! Settings come from, in increasing priority:
//! - built-in defaults
//! - `docqa.toml` in the current directory, or the file given with `--config`
//! - environment variables (`DOCQA_API_URL`, `DOCQA_TOKEN_FILE`, `.env` honoured)
//! - command line arguments

use crate::{DocqaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "docqa.toml";

/// Root configuration structure loaded from docqa.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocqaConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

// ============= API Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the DocQA service
    pub base_url: String,

    /// Request timeout in seconds. Unset means the HTTP client's defaults.
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// ============= Session Configuration =============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Where the access token is kept between runs
    pub token_file: Option<PathBuf>,
}

// ============= Logging Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl DocqaConfig {
    /// Load configuration from `path`, or from `docqa.toml` when present.
    ///
    /// An explicitly requested file must exist; a missing default file just
    /// means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                default.exists().then_some(default)
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    DocqaError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                let config = Self::parse(&content).map_err(|e| {
                    DocqaError::Config(format!("Failed to parse {}: {}", path.display(), e))
                })?;
                debug!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply command line / environment overrides.
    pub fn with_overrides(mut self, api_url: Option<String>, token_file: Option<PathBuf>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(path) = token_file {
            self.session.token_file = Some(path);
        }
        self
    }

    /// Token file location: configured path, else `<config dir>/docqa/token`.
    pub fn token_file(&self) -> PathBuf {
        self.session.token_file.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .map(|dir| dir.join("docqa"))
                .unwrap_or_else(|| PathBuf::from(".docqa"))
                .join("token")
        })
    }
}
