//! Display options passed to the terminal inside the File sequence.
//!
//! Keys and values are forwarded verbatim; the terminal decides what they
//! mean. The only option this crate adds itself is `inline=1`, which the
//! sequence builder always emits first.

use std::fmt;
use std::str::FromStr;

use crate::error::ImageError;

/// Option that is always emitted first.
pub const INLINE_OPTION: &str = "inline=1";

/// A single `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOption {
    pub key: String,
    pub value: String,
}

impl fmt::Display for DisplayOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl FromStr for DisplayOption {
    type Err = ImageError;

    /// Parse `KEY=VALUE`, splitting at the first `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(ImageError::InvalidOption(s.to_string())),
        }
    }
}

/// Insertion-ordered mapping of option names to values.
///
/// Setting a key that is already present replaces its value but keeps the
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    entries: Vec<DisplayOption>,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`DisplayOptions::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(DisplayOption { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayOption> {
        self.entries.iter()
    }

    /// Render the option list as it appears in the sequence, `inline=1` first.
    pub fn to_option_string(&self) -> String {
        let mut parts = Vec::with_capacity(self.entries.len() + 1);
        parts.push(INLINE_OPTION.to_string());
        parts.extend(self.entries.iter().map(ToString::to_string));
        parts.join(";")
    }
}

impl Extend<DisplayOption> for DisplayOptions {
    fn extend<T: IntoIterator<Item = DisplayOption>>(&mut self, iter: T) {
        for option in iter {
            self.set(option.key, option.value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DisplayOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.set(key, value);
        }
        options
    }
}
