//! Image payload loading and base64 encoding.
//!
//! Files are read whole into memory and encoded with the standard base64
//! alphabet (with padding), which is what the File OSC sequence expects.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::debug;

use crate::error::ImageError;

/// Raw bytes of an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Number of raw (unencoded) bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base64-encode the payload.
    pub fn encode(&self) -> String {
        let encoded = BASE64.encode(&self.bytes);
        debug!(
            raw_bytes = self.bytes.len(),
            encoded_chars = encoded.len(),
            "Encoded image payload"
        );
        encoded
    }
}

/// Read the full contents of the file at `path`.
///
/// # Errors
/// - `ImageError::FileNotFound` - path is missing or not a regular file
/// - `ImageError::Io` - the file exists but could not be read
pub fn load_payload(path: &Path) -> Result<ImagePayload, ImageError> {
    if !path.is_file() {
        return Err(ImageError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        // Raced with a delete between the check and the read
        ErrorKind::NotFound => ImageError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ImageError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Loaded image file");
    Ok(ImagePayload::from_bytes(bytes))
}

/// Read a file and return its base64 encoding.
pub fn encode_file(path: &Path) -> Result<String, ImageError> {
    load_payload(path).map(|payload| payload.encode())
}
