//! CLI Configuration
//!
//! Layered, lowest priority first: built-in defaults, `config/default`,
//! `config/local`, the `--config` file, `FRAUDSCOPE__SECTION__KEY`
//! environment variables. Command-line flags are applied on top by `main`.

use anyhow::Context;
use fraudscope_client::{ClientConfig, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend connection
    #[serde(default)]
    pub api: ApiSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report downloads
    #[serde(default)]
    pub downloads: DownloadSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Backend origin
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiSettings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::with_endpoint(&self.endpoint)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Log file used while the terminal dashboard owns the screen
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadSettings {
    /// Directory audit reports are written to
    #[serde(default = "default_download_dir")]
    pub dir: PathBuf,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            dir: default_download_dir(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("fraudscope.log")
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(Path::new(""), config_path)
    }

    /// Load with `config/default` and `config/local` looked up under `base`.
    ///
    /// Later sources win: the two defaults, then the explicit file, then
    /// `FRAUDSCOPE__*` variables.
    pub fn load_from(base: &Path, config_path: Option<&Path>) -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = base.join("config");
        let mut builder = config::Config::builder()
            .add_source(config::File::from(config_dir.join("default")).required(false))
            .add_source(config::File::from(config_dir.join("local")).required(false));

        // An explicitly named file must exist
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("FRAUDSCOPE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("failed to read configuration")?;
        config
            .try_deserialize()
            .context("invalid configuration")
    }
}
