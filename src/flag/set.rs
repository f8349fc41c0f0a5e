//! FlagSet: an ordered registry of typed flags with command-line parsing.

use crate::error::FlagError;
use crate::registry::{FlagInfo, FlagRegistry};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::value::{FlagType, Typed, Value};

struct Flag {
    usage: String,
    value: Box<dyn Value>,
    /// Formatted current value, kept in step with `value`
    current: String,
    default: String,
}

impl Flag {
    fn info<'a>(&'a self, name: &'a str) -> FlagInfo<'a> {
        FlagInfo {
            name,
            value: &self.current,
            default: &self.default,
            usage: &self.usage,
        }
    }
}

/// A named set of flags.
///
/// Flags are defined up front, then populated from arguments with
/// [`FlagSet::parse`] or [`FlagSet::set`]. The set remembers which flags were
/// explicitly assigned so that later layers (such as environment overrides) only
/// touch flags still holding their default.
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Flag>,
    actual: BTreeSet<String>,
    args: Vec<String>,
    parsed: bool,
}

impl FlagSet {
    /// Create an empty flag set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: BTreeMap::new(),
            actual: BTreeSet::new(),
            args: Vec::new(),
            parsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Define a flag with a built-in type and default value.
    pub fn define<T: FlagType>(
        &mut self,
        name: &str,
        default: T,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.define_value(name, Box::new(Typed(default)), usage)
    }

    /// Define a flag backed by a custom [`Value`]; its current value is the default.
    pub fn define_value(
        &mut self,
        name: &str,
        value: Box<dyn Value>,
        usage: &str,
    ) -> Result<(), FlagError> {
        if name.is_empty() || name.starts_with('-') || name.contains('=') {
            return Err(FlagError::BadSyntax(format!(
                "flag name {:?} must be non-empty, not start with '-' and not contain '='",
                name
            )));
        }
        if self.flags.contains_key(name) {
            return Err(FlagError::Redefined(format!("{}: {}", self.name, name)));
        }

        let rendered = value.render();
        self.flags.insert(
            name.to_string(),
            Flag {
                usage: usage.to_string(),
                value,
                current: rendered.clone(),
                default: rendered,
            },
        );
        Ok(())
    }

    /// Current value of a flag defined with [`FlagSet::define`].
    ///
    /// Returns `None` if the flag is unknown or was defined with a different type.
    pub fn get<T: FlagType>(&self, name: &str) -> Option<T> {
        self.flags
            .get(name)?
            .value
            .as_any()
            .downcast_ref::<Typed<T>>()
            .map(|typed| typed.0.clone())
    }

    /// The underlying value of a flag, for custom [`Value`] types.
    pub fn value(&self, name: &str) -> Option<&dyn Value> {
        self.flags.get(name).map(|flag| flag.value.as_ref())
    }

    pub fn lookup(&self, name: &str) -> Option<FlagInfo<'_>> {
        self.flags
            .get_key_value(name)
            .map(|(key, flag)| flag.info(key))
    }

    /// Whether the flag was explicitly assigned through [`FlagSet::parse`] or [`FlagSet::set`].
    pub fn is_set(&self, name: &str) -> bool {
        self.actual.contains(name)
    }

    /// Assign a flag and mark it as explicitly set.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        self.assign(name, raw)?;
        self.actual.insert(name.to_string());
        Ok(())
    }

    fn assign(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| FlagError::UnknownFlag(name.to_string()))?;
        flag.value
            .set(raw)
            .map_err(|source| FlagError::InvalidValue {
                name: name.to_string(),
                value: raw.to_string(),
                source,
            })?;
        flag.current = flag.value.render();
        Ok(())
    }

    /// Parse flag arguments (without the program name).
    ///
    /// Accepted forms are `-name`, `--name`, `-name=value` and `-name value`. Bool
    /// flags only take a value through `=`. Parsing stops before the first non-flag
    /// argument or a lone `-`, and just after `--`. Whatever remains is available
    /// from [`FlagSet::args`].
    pub fn parse<I, S>(&mut self, arguments: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed = true;
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();

        let mut index = 0;
        while index < arguments.len() {
            let arg = &arguments[index];
            if arg.len() < 2 || !arg.starts_with('-') {
                break;
            }
            index += 1;

            let body = match arg.strip_prefix("--") {
                Some("") => break,
                Some(body) => body,
                None => &arg[1..],
            };
            if body.starts_with('-') || body.starts_with('=') {
                return Err(FlagError::BadSyntax(arg.clone()));
            }

            let (name, inline_value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            let is_bool = self
                .flags
                .get(name)
                .ok_or_else(|| FlagError::UnknownFlag(name.to_string()))?
                .value
                .is_bool_flag();

            let value = match inline_value {
                Some(value) => value.to_string(),
                None if is_bool => "true".to_string(),
                None => {
                    let next = arguments
                        .get(index)
                        .ok_or_else(|| FlagError::MissingArgument(name.to_string()))?;
                    index += 1;
                    next.clone()
                }
            };
            self.set(name, &value)?;
        }

        self.args = arguments[index..].to_vec();
        Ok(())
    }

    /// Whether [`FlagSet::parse`] has been called.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Arguments left over after flag parsing stopped.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field(
                "flags",
                &self
                    .flags
                    .iter()
                    .map(|(name, flag)| (name.as_str(), flag.current.as_str()))
                    .collect::<BTreeMap<_, _>>(),
            )
            .field("actual", &self.actual)
            .field("parsed", &self.parsed)
            .finish()
    }
}

impl FlagRegistry for FlagSet {
    fn visit_all(&self, f: &mut dyn FnMut(FlagInfo<'_>)) {
        for (name, flag) in &self.flags {
            f(flag.info(name));
        }
    }

    fn visit_set(&self, f: &mut dyn FnMut(FlagInfo<'_>)) {
        for name in &self.actual {
            if let Some((key, flag)) = self.flags.get_key_value(name) {
                f(flag.info(key));
            }
        }
    }

    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        self.assign(name, raw)
    }
}
