//! Configuration module for bucketsort.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::library::Limits;
use crate::{BucketError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5174
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Image library configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    /// Root folder holding loose images and bucket subfolders.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Maximum number of photos per bucket.
    #[serde(default = "default_max_bucket_photos")]
    pub max_bucket_photos: u64,
    /// Maximum total bytes per bucket.
    #[serde(default = "default_max_bucket_bytes")]
    pub max_bucket_bytes: u64,
}

fn default_max_bucket_photos() -> u64 {
    1200
}

fn default_max_bucket_bytes() -> u64 {
    4 * 1024 * 1024 * 1024 // 4GiB
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: None,
            max_bucket_photos: default_max_bucket_photos(),
            max_bucket_bytes: default_max_bucket_bytes(),
        }
    }
}

impl LibraryConfig {
    /// Bucket caps as configured.
    pub fn limits(&self) -> Limits {
        Limits {
            max_bucket_photos: self.max_bucket_photos,
            max_bucket_bytes: self.max_bucket_bytes,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty means console only.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Web UI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Whether to serve the built browser client.
    #[serde(default)]
    pub serve_static: bool,
    /// Path to static files directory.
    #[serde(default = "default_static_path")]
    pub static_path: String,
}

fn default_static_path() -> String {
    "web/dist".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            cors_origins: vec![],
            serve_static: false,
            static_path: default_static_path(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Library configuration.
    #[serde(default)]
    pub library: LibraryConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web UI configuration.
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BucketError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    ///
    /// A missing file yields the defaults; any other read or parse failure is an error.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = match Self::load(path) {
            Ok(config) => config,
            Err(BucketError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BucketError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BUCKETSORT_ROOT`: root folder
    /// - `BUCKETSORT_MAX_BUCKET_PHOTOS`: photo cap per bucket
    /// - `BUCKETSORT_MAX_BUCKET_BYTES`: byte cap per bucket
    /// - `BUCKETSORT_HOST`: bind address
    /// - `BUCKETSORT_PORT`: listening port
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(root) = get("BUCKETSORT_ROOT") {
            self.library.root = Some(PathBuf::from(root));
        }
        if let Some(value) = get("BUCKETSORT_MAX_BUCKET_PHOTOS") {
            self.library.max_bucket_photos = parse_number("BUCKETSORT_MAX_BUCKET_PHOTOS", &value)?;
        }
        if let Some(value) = get("BUCKETSORT_MAX_BUCKET_BYTES") {
            self.library.max_bucket_bytes = parse_number("BUCKETSORT_MAX_BUCKET_BYTES", &value)?;
        }
        if let Some(host) = get("BUCKETSORT_HOST") {
            self.server.host = host;
        }
        if let Some(value) = get("BUCKETSORT_PORT") {
            self.server.port = parse_number("BUCKETSORT_PORT", &value)?;
        }

        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns an error if either bucket cap is zero.
    pub fn validate(&self) -> Result<()> {
        if self.library.max_bucket_photos == 0 {
            return Err(BucketError::Config(
                "max_bucket_photos must be greater than zero".to_string(),
            ));
        }
        if self.library.max_bucket_bytes == 0 {
            return Err(BucketError::Config(
                "max_bucket_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BucketError::Config(format!("{key} must be a number, got {value:?}")))
}
