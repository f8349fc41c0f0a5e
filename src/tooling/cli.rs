//! CLI Tooling
//!
//! The `envoverlay` inspector: declare flags on the command line, apply explicit
//! arguments and the environment overlay, and show where every value came from.

use crate::config::ConfigLoader;
use crate::env::EnvSource;
use crate::error::ToolError;
use crate::flag::{FlagSet, FlagType};
use crate::key::env_key;
use crate::overrider::override_with;
use crate::registry::FlagRegistry;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use super::format::{format_report_json, format_report_text};

/// envoverlay - show how environment variables overlay unset flags
#[derive(Parser, Debug)]
#[command(name = "envoverlay")]
#[command(about = "Show how environment variables overlay unset command-line flags")]
pub struct Cli {
    /// Environment variable prefix (a trailing '_' is added when missing)
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Flag declaration, repeatable
    #[arg(long = "flag", value_name = "NAME=TYPE[:DEFAULT]")]
    pub flags: Vec<FlagDeclaration>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Flag arguments to parse as explicit values, given after `--`
    #[arg(last = true, value_name = "FLAG_ARGS")]
    pub args: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Built-in flag types the inspector can declare
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Duration,
}

impl FromStr for FlagKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(FlagKind::Bool),
            "int" => Ok(FlagKind::Int),
            "uint" => Ok(FlagKind::Uint),
            "float" => Ok(FlagKind::Float),
            "string" => Ok(FlagKind::String),
            "duration" => Ok(FlagKind::Duration),
            other => Err(ToolError::InvalidDeclaration(format!(
                "unknown type \"{}\" (expected bool, int, uint, float, string or duration)",
                other
            ))),
        }
    }
}

/// `NAME=TYPE[:DEFAULT]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagDeclaration {
    pub name: String,
    pub kind: FlagKind,
    pub default: Option<String>,
}

impl FromStr for FlagDeclaration {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, kind_and_default) = s.split_once('=').ok_or_else(|| {
            ToolError::InvalidDeclaration(format!("\"{}\" is not NAME=TYPE[:DEFAULT]", s))
        })?;
        if name.is_empty() {
            return Err(ToolError::InvalidDeclaration(format!(
                "\"{}\" has an empty flag name",
                s
            )));
        }
        let (kind, default) = match kind_and_default.split_once(':') {
            Some((kind, default)) => (kind, Some(default.to_string())),
            None => (kind_and_default, None),
        };
        Ok(Self {
            name: name.to_string(),
            kind: kind.parse()?,
            default,
        })
    }
}

fn define_typed<T: FlagType + Default>(
    flags: &mut FlagSet,
    declaration: &FlagDeclaration,
) -> Result<(), ToolError> {
    let default = match &declaration.default {
        Some(raw) => T::parse_flag(raw).map_err(|e| {
            ToolError::InvalidDeclaration(format!(
                "default for {} is invalid: {}",
                declaration.name, e
            ))
        })?,
        None => T::default(),
    };
    flags.define(&declaration.name, default, "")?;
    Ok(())
}

impl FlagDeclaration {
    /// Register this declaration on `flags`.
    pub fn define(&self, flags: &mut FlagSet) -> Result<(), ToolError> {
        match self.kind {
            FlagKind::Bool => define_typed::<bool>(flags, self),
            FlagKind::Int => define_typed::<i64>(flags, self),
            FlagKind::Uint => define_typed::<u64>(flags, self),
            FlagKind::Float => define_typed::<f64>(flags, self),
            FlagKind::String => define_typed::<String>(flags, self),
            FlagKind::Duration => define_typed::<Duration>(flags, self),
        }
    }
}

/// Where a flag's final value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Explicit,
    Env,
    Default,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Explicit => "explicit",
            ValueSource::Env => "env",
            ValueSource::Default => "default",
        }
    }
}

/// One row of inspector output
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlagReport {
    pub name: String,
    pub key: String,
    pub value: String,
    pub default: String,
    pub source: ValueSource,
}

/// Build the declared flags, parse `cli.args`, overlay `env`, and report each flag.
pub fn inspect<E: EnvSource + ?Sized>(cli: &Cli, env: &E) -> Result<Vec<FlagReport>, ToolError> {
    let mut flags = FlagSet::new("envoverlay");
    for declaration in &cli.flags {
        declaration.define(&mut flags)?;
    }
    flags.parse(cli.args.iter().cloned())?;
    override_with(&mut flags, &cli.prefix, env)?;

    let mut reports = Vec::with_capacity(flags.len());
    flags.visit_all(&mut |flag| {
        let key = env_key(&cli.prefix, flag.name);
        let source = if flags.is_set(flag.name) {
            ValueSource::Explicit
        } else if env.lookup(&key).is_some() {
            ValueSource::Env
        } else {
            ValueSource::Default
        };
        reports.push(FlagReport {
            name: flag.name.to_string(),
            key,
            value: flag.value.to_string(),
            default: flag.default.to_string(),
            source,
        });
    });
    Ok(reports)
}

/// Run the inspector against `env` and render its output.
pub fn run<E: EnvSource + ?Sized>(cli: &Cli, env: &E) -> Result<String, ToolError> {
    let reports = inspect(cli, env)?;
    info!(
        flags = reports.len(),
        prefix = %cli.prefix,
        "Inspected environment overlay"
    );
    match cli.format {
        OutputFormat::Text => Ok(format_report_text(&reports)),
        OutputFormat::Json => format_report_json(&reports),
    }
}

/// Load the tool configuration named by `--config`, if any.
pub fn load_config(cli: &Cli) -> Result<crate::config::ToolConfig, ToolError> {
    ConfigLoader::load(cli.config.as_deref())
}
