//! Environment variable source: ENVOVERLAY__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;
use config::Map;

pub const PREFIX: &str = "ENVOVERLAY";
pub const SEPARATOR: &str = "__";

/// Add environment variable overlay to builder.
///
/// `vars` replaces the process environment when given.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<Map<String, String>>,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(PREFIX)
            .separator(SEPARATOR)
            .try_parsing(true)
            .source(vars),
    )
}
