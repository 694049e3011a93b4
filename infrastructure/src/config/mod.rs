//! Configuration loading.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileDataConfig, FileServerConfig};
pub use loader::ConfigLoader;
