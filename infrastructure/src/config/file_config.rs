//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:3030"
    pub addr: SocketAddr,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            addr: ([127, 0, 0, 1], 3030).into(),
        }
    }
}

/// Raw data configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Optional JSON seed file; when absent the built-in samples are used
    pub seed_file: Option<PathBuf>,
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub data: FileDataConfig,
}
