//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `TODO_`, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/todo-service/config.toml
//! 4. System directory: /etc/todo-service/config.toml
//! 5. Default values
//!
//! `TODO_SERVICE__LOG_LEVEL=debug` sets `service.log_level`; a single `_`
//! stays part of the key name.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::model::TodoItem;

const APP_NAME: &str = "todo-service";
const ENV_PREFIX: &str = "TODO_";
const ENV_SPLIT: &str = "__";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,

    /// Item store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, reported by the health endpoints
    #[serde(default = "default_name")]
    pub name: String,

    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            timeout_secs: default_timeout(),
            environment: default_environment(),
        }
    }
}

impl ServiceConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable multi-line output
    Pretty,
}

/// CORS policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorsMode {
    /// Any origin, method and header
    #[default]
    Permissive,
    /// Same-origin only
    Restrictive,
    /// No CORS layer
    Disabled,
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Maximum request body size in megabytes
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// Convert handler panics into 500 responses
    #[serde(default = "default_true")]
    pub catch_panic: bool,

    /// Gzip response bodies
    #[serde(default = "default_true")]
    pub compression: bool,

    /// CORS policy
    #[serde(default)]
    pub cors_mode: CorsMode,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            catch_panic: true,
            compression: true,
            cors_mode: CorsMode::default(),
        }
    }
}

impl MiddlewareConfig {
    /// Body limit in bytes
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }
}

/// Item store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Items inserted with their own ids at startup
    #[serde(default)]
    pub seed: Vec<TodoItem>,
}

fn default_name() -> String {
    APP_NAME.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_true() -> bool {
    true
}

fn default_body_limit_mb() -> usize {
    10
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Config files are merged lowest priority first, so a value in
    /// `./config.toml` overrides the same value in the XDG or system file.
    /// Environment variables override all file-based configs.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in Self::find_config_paths().iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SPLIT))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Skips the search path. Environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SPLIT))
            .extract()?;

        Ok(config)
    }

    /// Config file locations, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME);
        if let Some(path) = xdg_dirs.find_config_file(CONFIG_FILE) {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc").join(APP_NAME).join(CONFIG_FILE));

        tracing::debug!(?paths, "Searching for config files");
        paths
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.name, "todo-service");
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.service.log_format, LogFormat::Json);
        assert_eq!(config.middleware.body_limit_bytes(), 10 * 1024 * 1024);
        assert_eq!(config.middleware.cors_mode, CorsMode::Permissive);
        assert!(config.store.seed.is_empty());
    }

    #[test]
    fn test_load_from_file_with_seed() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[service]
name = "todo-test"
log_format = "pretty"

[[store.seed]]
id = 1
name = "Task 1"
isComplete = true

[[store.seed]]
id = 2
name = "Task 2"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.service.name, "todo-test");
        assert_eq!(config.service.log_format, LogFormat::Pretty);
        assert_eq!(config.service.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.store.seed,
            vec![
                TodoItem::new(1, "Task 1", true),
                TodoItem::new(2, "Task 2", false),
            ]
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.service.name, "todo-service");
        assert!(config.store.seed.is_empty());
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[middleware]\ncors_mode = \"sometimes\"\n").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }
}
