//! Configuration management for the demo driver

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::Path;

impl Config {
    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Use `path` when given, otherwise the default location.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        io::parse(contents)
    }
}
