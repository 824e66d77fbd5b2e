//! Command handlers for the gtimg binaries.
//!
//! Each submodule backs one binary; `main` only parses arguments and
//! dispatches here.

pub mod demo;
pub mod show;
