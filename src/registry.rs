//! Flag registry seam
//!
//! The override pass only needs three things from a registry: enumerate every flag,
//! enumerate the flags that were explicitly assigned, and assign a string to a flag
//! through that flag's own conversion. Any flag container can take part by
//! implementing [`FlagRegistry`].

use crate::error::FlagError;

/// Read-only view of a registered flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagInfo<'a> {
    pub name: &'a str,
    /// Current value, formatted by the flag's type
    pub value: &'a str,
    /// Default value, formatted by the flag's type
    pub default: &'a str,
    pub usage: &'a str,
}

/// A collection of named flags that can tell explicitly assigned flags apart from
/// flags still holding their default.
pub trait FlagRegistry {
    /// Visit every registered flag, set or not.
    fn visit_all(&self, f: &mut dyn FnMut(FlagInfo<'_>));

    /// Visit only the flags that were explicitly assigned.
    fn visit_set(&self, f: &mut dyn FnMut(FlagInfo<'_>));

    /// Convert `raw` with the flag's parser and store it.
    ///
    /// Unlike an explicit assignment, this must not mark the flag as set.
    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FlagError>;
}

impl<R: FlagRegistry + ?Sized> FlagRegistry for &mut R {
    fn visit_all(&self, f: &mut dyn FnMut(FlagInfo<'_>)) {
        (**self).visit_all(f)
    }

    fn visit_set(&self, f: &mut dyn FnMut(FlagInfo<'_>)) {
        (**self).visit_set(f)
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        (**self).apply(name, raw)
    }
}
