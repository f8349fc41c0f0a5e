//! Environment key derivation
//!
//! Maps a prefix and a flag name onto the environment variable consulted for that
//! flag: `upper(normalize(prefix) + name)` with every `-` replaced by `_`.
//! The mapping is part of the public contract; changing it breaks deployments.

use std::borrow::Cow;

/// Separator placed between a non-empty prefix and the flag name.
pub const SEPARATOR: char = '_';

/// Append [`SEPARATOR`] to a non-empty prefix that does not already end in one.
pub fn normalize_prefix(prefix: &str) -> Cow<'_, str> {
    if prefix.is_empty() || prefix.ends_with(SEPARATOR) {
        Cow::Borrowed(prefix)
    } else {
        Cow::Owned(format!("{}{}", prefix, SEPARATOR))
    }
}

/// Environment variable name for `name` under `prefix`.
///
/// Characters are uppercased one at a time; a character whose uppercase form is
/// more than one character (such as `ß`) is kept as is.
///
/// ```
/// use envoverlay::env_key;
///
/// assert_eq!(env_key("app", "config-file"), "APP_CONFIG_FILE");
/// assert_eq!(env_key("", "port"), "PORT");
/// ```
pub fn env_key(prefix: &str, name: &str) -> String {
    let prefix = normalize_prefix(prefix);
    let mut key = String::with_capacity(prefix.len() + name.len());
    key.push_str(&prefix);
    key.push_str(name);
    key.chars()
        .map(|c| match c {
            '-' => '_',
            c => upper_char(c),
        })
        .collect()
}

fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
