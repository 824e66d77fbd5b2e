//! File OSC sequence assembly.
//!
//! Wire format: `ESC ] 1337 ; File = inline=1;k=v;... : <base64> BEL`

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::encoder::load_payload;
use crate::error::ImageError;
use crate::options::DisplayOptions;

/// OSC introducer and command prefix.
pub const FILE_PREFIX: &str = "\x1b]1337;File=";

/// Bell terminator.
pub const BEL: char = '\x07';

/// Build the complete escape sequence for an already-encoded payload.
pub fn build_sequence(payload: &str, options: &DisplayOptions) -> String {
    let option_string = options.to_option_string();
    let mut seq =
        String::with_capacity(FILE_PREFIX.len() + option_string.len() + payload.len() + 2);
    seq.push_str(FILE_PREFIX);
    seq.push_str(&option_string);
    seq.push(':');
    seq.push_str(payload);
    seq.push(BEL);
    seq
}

/// Write the escape sequence to `out` and flush it.
pub fn write_sequence<W: Write>(
    out: &mut W,
    payload: &str,
    options: &DisplayOptions,
) -> io::Result<()> {
    debug!(
        options = options.len(),
        payload_chars = payload.len(),
        "Writing inline image sequence"
    );
    out.write_all(build_sequence(payload, options).as_bytes())?;
    out.flush()
}

/// Encode the file at `path` and write its sequence to `out`.
///
/// Nothing is written when the file cannot be loaded.
///
/// # Errors
/// - `ImageError::FileNotFound` / `ImageError::Io` - from loading the file
/// - `ImageError::Output` - writing to `out` failed
pub fn display_image<W: Write>(
    out: &mut W,
    path: &Path,
    options: &DisplayOptions,
) -> Result<(), ImageError> {
    let payload = load_payload(path)?.encode();
    write_sequence(out, &payload, options)?;
    Ok(())
}
