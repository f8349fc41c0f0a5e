//! Error types for flag registries, environment overrides, and the inspector tool.

use thiserror::Error;

/// A string could not be converted into a flag's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}: {reason}")]
pub struct ParseValueError {
    /// Human readable name of the target type (e.g. "integer")
    pub expected: &'static str,
    /// Why the conversion failed
    pub reason: String,
}

impl ParseValueError {
    pub fn new(expected: &'static str, reason: impl Into<String>) -> Self {
        Self {
            expected,
            reason: reason.into(),
        }
    }
}

/// Errors raised by a flag registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),

    #[error("flag redefined: {0}")]
    Redefined(String),

    #[error("flag needs an argument: -{0}")]
    MissingArgument(String),

    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    #[error("invalid value \"{value}\" for flag -{name}: {source}")]
    InvalidValue {
        name: String,
        value: String,
        #[source]
        source: ParseValueError,
    },
}

/// Errors returned by an environment override pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error(
        "unable to set flag {flag} from environment variable {key}, which has a value of \"{value}\": {source}"
    )]
    Conversion {
        flag: String,
        key: String,
        value: String,
        #[source]
        source: FlagError,
    },
}

impl OverrideError {
    /// Name of the flag that failed to convert
    pub fn flag(&self) -> &str {
        match self {
            OverrideError::Conversion { flag, .. } => flag,
        }
    }

    /// Environment key the offending value was read from
    pub fn key(&self) -> &str {
        match self {
            OverrideError::Conversion { key, .. } => key,
        }
    }
}

/// Errors raised by the inspector tool's configuration and logging setup.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid flag declaration: {0}")]
    InvalidDeclaration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Flag(#[from] FlagError),

    #[error(transparent)]
    Override(#[from] OverrideError),
}

impl From<config::ConfigError> for ToolError {
    fn from(err: config::ConfigError) -> Self {
        ToolError::ConfigError(err.to_string())
    }
}
