//! Tooling
//!
//! The inspector command-line interface and its output formatting.

pub mod cli;
pub mod format;

pub use cli::{inspect, Cli, FlagDeclaration, FlagKind, FlagReport, OutputFormat, ValueSource};
