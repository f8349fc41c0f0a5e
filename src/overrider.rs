//! Environment overrides for unset flags
//!
//! A flag keeps an explicitly assigned value no matter what the environment says.
//! Every other flag is looked up under [`env_key`](crate::key::env_key) and, when the
//! variable exists, assigned through the flag's own conversion.

use crate::env::{EnvSource, ProcessEnv};
use crate::error::OverrideError;
use crate::key::env_key;
use crate::registry::FlagRegistry;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Set every flag in `registry` that was not explicitly assigned from the process
/// environment.
///
/// The variable consulted for flag `name` is `env_key(prefix, name)`, so prefix
/// `"APP"` and flag `config-file` read `APP_CONFIG_FILE`. Missing variables leave
/// the flag at its default.
///
/// The first value that fails to convert aborts the pass with
/// [`OverrideError::Conversion`]. Flags already updated stay updated. Flags are
/// visited in no particular order, so when several values are invalid any one of
/// them may be reported.
pub fn override_from_env<R>(registry: &mut R, prefix: &str) -> Result<(), OverrideError>
where
    R: FlagRegistry + ?Sized,
{
    override_with(registry, prefix, &ProcessEnv)
}

/// Same as [`override_from_env`], reading variables from `env`.
pub fn override_with<R, E>(registry: &mut R, prefix: &str, env: &E) -> Result<(), OverrideError>
where
    R: FlagRegistry + ?Sized,
    E: EnvSource + ?Sized,
{
    // Registries enumerate all flags and set flags, never unset ones.
    let mut unset: HashSet<String> = HashSet::new();
    registry.visit_all(&mut |info| {
        unset.insert(info.name.to_string());
    });
    registry.visit_set(&mut |info| {
        unset.remove(info.name);
    });

    for name in unset {
        let key = env_key(prefix, &name);
        let Some(value) = env.lookup(&key) else {
            trace!(flag = %name, key = %key, "No environment override");
            continue;
        };

        registry
            .apply(&name, &value)
            .map_err(|source| OverrideError::Conversion {
                flag: name.clone(),
                key: key.clone(),
                value: value.clone(),
                source,
            })?;
        debug!(flag = %name, key = %key, "Applied environment override");
    }

    Ok(())
}
