//! Flag values and their string conversions.

use crate::error::ParseValueError;
use std::any::Any;
use std::time::Duration;

use super::duration::{format_duration, parse_duration};

/// A mutable flag value that knows how to parse itself from a string.
///
/// Implement this directly for custom flag types and register them with
/// [`FlagSet::define_value`](super::FlagSet::define_value).
pub trait Value: Send + 'static {
    /// Parse `raw` and replace the current value.
    fn set(&mut self, raw: &str) -> Result<(), ParseValueError>;

    /// Current value as a string.
    fn render(&self) -> String;

    /// Bool flags may appear on the command line without an argument.
    fn is_bool_flag(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any;
}

/// Types with a built-in flag conversion.
///
/// Integers use literal syntax: an optional sign (signed types only), an optional
/// `0x`, `0o`, `0b` or leading-`0` (octal) base prefix, and `_` between digits.
pub trait FlagType: Clone + Send + 'static {
    /// Whether `-name` alone means "true"
    const IS_BOOL: bool = false;

    fn parse_flag(raw: &str) -> Result<Self, ParseValueError>;

    fn format_flag(&self) -> String;
}

/// [`Value`] adapter for any [`FlagType`].
#[derive(Debug, Clone, PartialEq)]
pub struct Typed<T>(pub T);

impl<T: FlagType> Value for Typed<T> {
    fn set(&mut self, raw: &str) -> Result<(), ParseValueError> {
        self.0 = T::parse_flag(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        self.0.format_flag()
    }

    fn is_bool_flag(&self) -> bool {
        T::IS_BOOL
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FlagType for bool {
    const IS_BOOL: bool = true;

    fn parse_flag(raw: &str) -> Result<Self, ParseValueError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ParseValueError::new(
                "boolean",
                format!("\"{}\" is not one of 1, t, true, 0, f, false", raw),
            )),
        }
    }

    fn format_flag(&self) -> String {
        self.to_string()
    }
}

impl FlagType for String {
    fn parse_flag(raw: &str) -> Result<Self, ParseValueError> {
        Ok(raw.to_string())
    }

    fn format_flag(&self) -> String {
        self.clone()
    }
}

impl FlagType for f64 {
    fn parse_flag(raw: &str) -> Result<Self, ParseValueError> {
        raw.trim()
            .parse::<f64>()
            .map_err(|e| ParseValueError::new("float", e.to_string()))
    }

    fn format_flag(&self) -> String {
        self.to_string()
    }
}

impl FlagType for Duration {
    fn parse_flag(raw: &str) -> Result<Self, ParseValueError> {
        parse_duration(raw)
    }

    fn format_flag(&self) -> String {
        format_duration(*self)
    }
}

/// Split a base prefix off an unsigned digit string: `0x`, `0o`, `0b`, or a
/// leading `0` for octal. The flag reports whether a prefix was present.
fn split_radix(digits: &str) -> (u32, &str, bool) {
    let lower = digits.get(..2).map(|p| p.to_ascii_lowercase());
    match lower.as_deref() {
        Some("0x") => (16, &digits[2..], true),
        Some("0o") => (8, &digits[2..], true),
        Some("0b") => (2, &digits[2..], true),
        _ if digits.len() > 1 && digits.starts_with('0') => (8, &digits[1..], true),
        _ => (10, digits, false),
    }
}

/// Parse an unsigned magnitude with integer-literal syntax.
///
/// Underscores may only separate digits, or follow a base prefix directly
/// (`0x_ff`). Signs are handled by the caller and rejected here.
fn parse_magnitude(digits: &str, expected: &'static str) -> Result<u128, ParseValueError> {
    let (radix, body, prefixed) = split_radix(digits);
    let body = match body.strip_prefix('_') {
        Some(rest) if prefixed => rest,
        _ => body,
    };
    if body.is_empty()
        || body.starts_with(['+', '-', '_'])
        || body.ends_with('_')
        || body.contains("__")
    {
        return Err(ParseValueError::new(expected, "invalid digit found in string"));
    }
    u128::from_str_radix(&body.replace('_', ""), radix)
        .map_err(|e| ParseValueError::new(expected, e.to_string()))
}

macro_rules! signed_flag_type {
    ($($ty:ty),*) => {$(
        impl FlagType for $ty {
            fn parse_flag(raw: &str) -> Result<Self, ParseValueError> {
                let raw = raw.trim();
                let (negative, digits) = match raw.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, raw.strip_prefix('+').unwrap_or(raw)),
                };
                let out_of_range = || {
                    ParseValueError::new("integer", format!("{} is out of range for {}", raw, stringify!($ty)))
                };
                let magnitude = i128::try_from(parse_magnitude(digits, "integer")?)
                    .map_err(|_| out_of_range())?;
                let value = if negative { -magnitude } else { magnitude };
                <$ty>::try_from(value).map_err(|_| out_of_range())
            }

            fn format_flag(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

macro_rules! unsigned_flag_type {
    ($($ty:ty),*) => {$(
        impl FlagType for $ty {
            fn parse_flag(raw: &str) -> Result<Self, ParseValueError> {
                let raw = raw.trim();
                let magnitude = parse_magnitude(raw, "unsigned integer")?;
                <$ty>::try_from(magnitude).map_err(|_| {
                    ParseValueError::new(
                        "unsigned integer",
                        format!("{} is out of range for {}", raw, stringify!($ty)),
                    )
                })
            }

            fn format_flag(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

signed_flag_type!(i32, i64);
unsigned_flag_type!(u16, u32, u64, usize);
