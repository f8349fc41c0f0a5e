//! ConfigLoader facade composing the configuration sources.

use super::sources::{environment, file};
use super::ToolConfig;
use crate::error::ToolError;
use config::{Config, Map};
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an optional file and the process environment.
    /// Precedence: defaults (lowest) -> file -> environment (highest).
    pub fn load(path: Option<&Path>) -> Result<ToolConfig, ToolError> {
        Self::load_with_env(path, None)
    }

    /// Load configuration with an explicit set of environment variables.
    pub fn load_with_env(
        path: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<ToolConfig, ToolError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = file::add_to_builder(builder, path);
        }
        let builder = environment::add_to_builder(builder, vars);

        let config: ToolConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
