use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PRAKRITI_HOST is not an IP address: {0}")]
    InvalidHost(String),

    #[error("PRAKRITI_PORT is not a port number: {0}")]
    InvalidPort(String),

    #[error("PRAKRITI_LOG_FORMAT must be 'json' or 'pretty', got '{0}'")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory for the on-disk store. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host_raw = var("PRAKRITI_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match var("PRAKRITI_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let log_format = match var("PRAKRITI_LOG_FORMAT") {
            None => LogFormat::Json,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::InvalidLogFormat(raw)),
            },
        };

        Ok(Self {
            host,
            port,
            data_dir: var("PRAKRITI_DATA_DIR").map(PathBuf::from),
            log_format,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
