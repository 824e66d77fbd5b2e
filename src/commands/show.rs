//! One-shot image display handler

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::{ImageCli, IMAGE_USAGE};
use crate::encoder::load_payload;
use crate::error::ImageError;
use crate::options::DisplayOptions;
use crate::sequence::write_sequence;

/// Build the option list for `cli`. `byte_len` is the raw file size.
///
/// Named flags come first in a fixed order, then `--option` entries in the
/// order given. An `--option` whose key matches a named flag overrides its
/// value in place.
pub fn options_for(cli: &ImageCli, byte_len: usize) -> DisplayOptions {
    let mut options = DisplayOptions::new();
    if cli.size {
        options.set("size", byte_len.to_string());
    }
    let named = [
        ("name", &cli.name),
        ("width", &cli.width),
        ("height", &cli.height),
        ("preserveAspectRatio", &cli.preserve_aspect_ratio),
    ];
    for (key, value) in named {
        if let Some(value) = value {
            options.set(key, value.as_str());
        }
    }
    options.extend(cli.options.iter().cloned());
    options
}

/// Encode the image named by `cli` and write its sequence to `out`.
///
/// Nothing is written unless the file was read successfully.
pub fn handle<W: Write>(cli: &ImageCli, out: &mut W) -> Result<()> {
    let path = cli
        .image_path
        .as_deref()
        .ok_or_else(|| ImageError::Usage(IMAGE_USAGE.to_string()))?;

    let payload = load_payload(path)?;
    let options = options_for(cli, payload.len());
    write_sequence(out, &payload.encode(), &options).context("Failed to write image sequence")?;
    Ok(())
}
