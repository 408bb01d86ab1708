//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `ASPIRATION_*` environment overrides.

use crate::client::RemoteConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub remote: RemoteStoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// SQLite store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("aspiration-hub").to_string_lossy().to_string())
        .unwrap_or_else(|| "./aspiration_data".to_string())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// `data_dir` with a leading `~` resolved against the home directory
    pub fn data_path(&self) -> PathBuf {
        expand_home(&self.data_dir, dirs::home_dir())
    }
}

fn expand_home(dir: &str, home: Option<PathBuf>) -> PathBuf {
    let rest = match dir.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(dir),
    };

    match home {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => {
            tracing::warn!(data_dir = %dir, "No home directory, using data_dir as given");
            PathBuf::from(dir)
        }
    }
}

/// Data-store service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Empty list allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// When set, `/api/v1` requests must present this key
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".to_string(),
        "http://127.0.0.1:8080".to_string(),
    ]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            api_key: None,
        }
    }
}

impl ApiConfig {
    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where `hub-cli` finds the data store
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteStoreConfig {
    #[serde(default = "default_remote_url")]
    pub url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_remote_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_request_timeout() -> u64 {
    5000
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            url: default_remote_url(),
            api_key: None,
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl RemoteStoreConfig {
    pub fn client_config(&self) -> RemoteConfig {
        RemoteConfig {
            url: self.url.clone(),
            api_key: self.api_key.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("aspiration-hub").join("config.toml")),
            Some(PathBuf::from("/etc/aspiration-hub/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = var("ASPIRATION_DATA_DIR") {
            self.store.data_dir = data_dir;
        }

        if let Some(host) = var("ASPIRATION_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("ASPIRATION_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid ASPIRATION_API_PORT"),
            }
        }
        if let Some(key) = var("ASPIRATION_API_KEY") {
            self.api.api_key = Some(key).filter(|k| !k.is_empty());
        }

        if let Some(url) = var("ASPIRATION_REMOTE_URL") {
            self.remote.url = url;
        }
        if let Some(key) = var("ASPIRATION_REMOTE_KEY") {
            self.remote.api_key = Some(key).filter(|k| !k.is_empty());
        }

        if let Some(level) = var("ASPIRATION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("ASPIRATION_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    let data_dir = toml::Value::String(default_data_dir());

    format!(
        r#"# AspirationHub Configuration
#
# Environment variables override these settings:
# - ASPIRATION_DATA_DIR
# - ASPIRATION_API_HOST
# - ASPIRATION_API_PORT
# - ASPIRATION_API_KEY
# - ASPIRATION_REMOTE_URL
# - ASPIRATION_REMOTE_KEY
# - ASPIRATION_LOG_LEVEL
# - ASPIRATION_LOG_FORMAT

[store]
# Directory holding aspiration.db
data_dir = {data_dir}

[api]
# Data-store service host
host = "0.0.0.0"

# Data-store service port
port = 8090

# Allowed CORS origins (empty list allows any origin)
cors_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]

# Key required on /api/v1 requests, sent as `apikey` header or bearer token
# api_key = "anon-key"

[remote]
# Data store used by hub-cli
url = "http://localhost:8090"

# api_key = "anon-key"

# Request timeout in milliseconds
request_timeout_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.api.api_key, None);
        assert_eq!(config.remote.request_timeout_ms, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse("[api]\nport = 9000\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.api_key.as_deref(), Some("k"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("ASPIRATION_DATA_DIR", "/tmp/hub"),
            ("ASPIRATION_API_PORT", "7001"),
            ("ASPIRATION_REMOTE_URL", "http://store:8090"),
            ("ASPIRATION_REMOTE_KEY", "anon"),
            ("ASPIRATION_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.store.data_dir, "/tmp/hub");
        assert_eq!(config.api.port, 7001);
        assert_eq!(config.logging.format, "json");

        let remote = config.remote.client_config();
        assert_eq!(remote.url, "http://store:8090");
        assert_eq!(remote.api_key.as_deref(), Some("anon"));
    }

    #[test]
    fn test_generated_data_dir_is_resolved() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert!(!config.store.data_dir.starts_with('~'));
        assert_eq!(config.store.data_dir, default_data_dir());
    }

    #[test]
    fn test_leading_tilde_expands_to_home() {
        let home = Some(PathBuf::from("/home/ana"));

        assert_eq!(
            expand_home("~/.local/share/aspiration-hub", home.clone()),
            PathBuf::from("/home/ana/.local/share/aspiration-hub")
        );
        assert_eq!(expand_home("~", home.clone()), PathBuf::from("/home/ana"));
        assert_eq!(expand_home("./data", home.clone()), PathBuf::from("./data"));
        assert_eq!(expand_home("~other/data", home), PathBuf::from("~other/data"));
        assert_eq!(expand_home("~/data", None), PathBuf::from("~/data"));
    }

    #[test]
    fn test_cors_origins_default_matches_without_file() {
        let from_file = Config::parse("[api]\nport = 9000\n").unwrap();
        assert_eq!(from_file.api.cors_origins, ApiConfig::default().cors_origins);

        let open = Config::parse("[api]\ncors_origins = []\n").unwrap();
        assert!(open.api.cors_origins.is_empty());
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|k| (k == "ASPIRATION_API_PORT").then(|| "http".to_string()));
        assert_eq!(config.api.port, 8090);
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nport = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
