//! The process-wide command-line flag set.
//!
//! Programs that do not thread a [`FlagSet`] around can define flags on
//! [`command_line`], parse the process arguments with [`parse_command_line`], and
//! then call [`override_command_line`].

use crate::error::{FlagError, OverrideError};
use crate::flag::FlagSet;
use crate::overrider::override_from_env;
use parking_lot::{Mutex, MutexGuard};
use std::ffi::OsString;
use std::path::Path;
use std::sync::OnceLock;

static COMMAND_LINE: OnceLock<Mutex<FlagSet>> = OnceLock::new();

fn program_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "command-line".to_string())
}

/// Lock the process-wide flag set, creating it on first use.
///
/// The guard must be released before calling [`parse_command_line`] or
/// [`override_command_line`], which take the lock themselves.
pub fn command_line() -> MutexGuard<'static, FlagSet> {
    COMMAND_LINE
        .get_or_init(|| Mutex::new(FlagSet::new(program_name())))
        .lock()
}

/// Parse the process arguments, minus the program name, into [`command_line`].
///
/// Arguments that are not valid Unicode are converted lossily.
pub fn parse_command_line() -> Result<(), FlagError> {
    command_line().parse(lossy_arguments(std::env::args_os().skip(1)))
}

fn lossy_arguments<I>(arguments: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    arguments
        .into_iter()
        .map(|arg| match arg.into_string() {
            Ok(arg) => arg,
            Err(raw) => raw.to_string_lossy().into_owned(),
        })
        .collect()
}

/// Override unset flags of the process-wide flag set from the environment.
///
/// Call this only after [`parse_command_line`]. Before parsing, no flag is
/// recorded as explicitly set, so the environment would replace values the user
/// is about to pass on the command line.
pub fn override_command_line(prefix: &str) -> Result<(), OverrideError> {
    let mut flags = command_line();
    override_from_env(&mut *flags, prefix)
}
