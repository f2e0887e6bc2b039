use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use advisor_engine::{ClientSettings, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "advisor.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.map(|timeout| timeout.as_secs()),
            max_response_bytes: client.max_response_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl AdvisorConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }
}

/// Loads the config from `explicit`, or from `./advisor.ron` when no path is
/// given. Only the implicit file may be missing.
pub fn load_config(explicit: Option<&Path>) -> Result<AdvisorConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(CONFIG_FILENAME),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            return Ok(AdvisorConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path,
        message: err.to_string(),
    })
}
