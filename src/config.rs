use crate::session::SessionConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "No configuration file found. Create a config.yaml file or set the \
         CONFIG_PATH environment variable. See config.example.yaml for an example."
    )]
    NotFound,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Session issuance settings
    pub session: SessionConfig,
    /// Optional static credential table; when absent, any password is accepted
    pub credentials: Option<HashMap<String, String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            session: SessionConfig::default(),
            credentials: None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr.parse::<SocketAddr>().map_err(|e| {
            ConfigError::Invalid(format!("listen_addr '{}': {}", self.listen_addr, e))
        })?;

        if self.session.duration_secs <= 0 {
            return Err(ConfigError::Invalid(format!(
                "session.duration_secs must be positive, got {}",
                self.session.duration_secs
            )));
        }

        Ok(())
    }
}

/// Load configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Arc<AppConfig>, ConfigError> {
    let path = path.as_ref();
    info!("Loading configuration from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let config: AppConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;

    info!(
        "Configuration loaded successfully (listen: {}, session duration: {}s)",
        config.listen_addr, config.session.duration_secs
    );

    Ok(Arc::new(config))
}

/// Load configuration with fallback options
pub fn load_config_with_fallback() -> Result<Arc<AppConfig>, ConfigError> {
    // Try loading from environment variable first
    if let Ok(config_path) = std::env::var("CONFIG_PATH") {
        match load_config(&config_path) {
            Ok(config) => return Ok(config),
            Err(e) => warn!(
                "Failed to load config from CONFIG_PATH ({}): {}",
                config_path, e
            ),
        }
    }

    // Try common config file locations
    let paths = vec!["config.yaml", "config.yml", "./config.yaml", "./config.yml"];

    for path in paths {
        if Path::new(path).exists() {
            match load_config(path) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from '{}': {}", path, e),
            }
        }
    }

    Err(ConfigError::NotFound)
}
