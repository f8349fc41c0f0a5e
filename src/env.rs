//! Environment sources
//!
//! Read-only key lookup over an environment. [`ProcessEnv`] reads the real process
//! environment; maps stand in for a captured or synthetic one.

use std::collections::{BTreeMap, HashMap};

/// Read-only access to environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when the variable is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-Unicode values are handed on lossily; the flag's parser decides.
        std::env::var_os(key).map(|value| match value.into_string() {
            Ok(value) => value,
            Err(raw) => raw.to_string_lossy().into_owned(),
        })
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
