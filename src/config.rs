//! Configuration for the inspector binary.
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML file,
//! then `ENVOVERLAY__*` environment variables (`__` separates nested keys).

pub mod facade;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Inspector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub logging: LoggingConfig,
}
