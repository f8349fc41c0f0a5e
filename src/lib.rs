//! envoverlay: Environment Overrides for Command-Line Flags
//!
//! Fills every flag that was not given on the command line from an environment
//! variable named after it, so a program can be configured through arguments or
//! the environment interchangeably. Explicit arguments always win.
//!
//! ```
//! use envoverlay::{override_with, FlagSet};
//! use std::collections::HashMap;
//!
//! let mut flags = FlagSet::new("demo");
//! flags.define("host", "localhost".to_string(), "server host").unwrap();
//! flags.define("port", 8080_i64, "server port").unwrap();
//! flags.define("config-file", "config.toml".to_string(), "config file").unwrap();
//! flags.parse(["-port=7777"]).unwrap();
//!
//! let env: HashMap<String, String> = [
//!     ("APP_PORT".to_string(), "9090".to_string()),
//!     ("APP_CONFIG_FILE".to_string(), "my-config.toml".to_string()),
//! ]
//! .into_iter()
//! .collect();
//! override_with(&mut flags, "APP", &env).unwrap();
//!
//! assert_eq!(flags.get::<String>("host").as_deref(), Some("localhost"));
//! assert_eq!(flags.get::<i64>("port"), Some(7777));
//! assert_eq!(flags.get::<String>("config-file").as_deref(), Some("my-config.toml"));
//! ```

pub mod command_line;
pub mod config;
pub mod env;
pub mod error;
pub mod flag;
pub mod key;
pub mod logging;
pub mod overrider;
pub mod registry;
pub mod tooling;

pub use command_line::{command_line, override_command_line, parse_command_line};
pub use env::{EnvSource, ProcessEnv};
pub use error::{FlagError, OverrideError, ParseValueError};
pub use flag::{FlagSet, FlagType, Value};
pub use key::{env_key, normalize_prefix, SEPARATOR};
pub use overrider::{override_from_env, override_with};
pub use registry::{FlagInfo, FlagRegistry};
