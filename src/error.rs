//! Error types for image encoding and the demo driver.

use std::path::PathBuf;

/// Errors that can occur while loading, encoding or displaying images.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("No JPG or PNG images found in {}", path.display())]
    NoImagesFound { path: PathBuf },

    #[error("{0}")]
    Usage(String),

    #[error("Invalid display option '{0}': expected KEY=VALUE")]
    InvalidOption(String),

    #[error("Failed to write to terminal: {0}")]
    Output(#[from] std::io::Error),
}
