//! gtimage - inline images for iTerm2/GT compatible terminals
//!
//! Encodes image files as base64 and wraps them in the
//! `ESC ] 1337 ; File=... BEL` sequence, plus the cursor helpers and the
//! scripted demo used by the `gtimg` and `gtimg-demo` binaries.

pub mod cli;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod demo;
pub mod encoder;
pub mod error;
pub mod options;
pub mod sequence;
pub mod utils;

pub use config::{Config, DemoConfig};
pub use demo::{Demo, ImageSet};
pub use encoder::{encode_file, load_payload, ImagePayload};
pub use error::ImageError;
pub use options::{DisplayOption, DisplayOptions};
pub use sequence::{build_sequence, display_image, write_sequence};
