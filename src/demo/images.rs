//! Sample image discovery for the demo.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ImageError;

/// Extensions the demo picks up, in the order they are listed.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Images found in the demo directory.
///
/// All `.jpg` files come first, then all `.png` files, each group sorted by
/// file name. Dotfiles count; subdirectories are skipped. Never empty.
#[derive(Debug, Clone)]
pub struct ImageSet {
    images: Vec<PathBuf>,
}

impl ImageSet {
    /// Scan `dir` for sample images.
    ///
    /// # Errors
    /// - `ImageError::DirectoryNotFound` - `dir` is not a directory
    /// - `ImageError::NoImagesFound` - no `.jpg`/`.png` files directly inside
    /// - `ImageError::Io` - the directory could not be listed
    pub fn discover(dir: &Path) -> Result<Self, ImageError> {
        if !dir.is_dir() {
            return Err(ImageError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let io_err = |source| ImageError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut candidates = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() {
                candidates.push(path);
            }
        }

        let mut images = Vec::new();
        for ext in IMAGE_EXTENSIONS {
            let suffix = format!(".{}", ext);
            let mut group: Vec<PathBuf> = candidates
                .iter()
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(&suffix))
                })
                .cloned()
                .collect();
            group.sort();
            images.extend(group);
        }

        if images.is_empty() {
            return Err(ImageError::NoImagesFound {
                path: dir.to_path_buf(),
            });
        }

        debug!(dir = %dir.display(), count = images.len(), "Discovered demo images");
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.images
    }

    /// The image used by single-image phases.
    pub fn sample(&self) -> &Path {
        &self.images[0]
    }

    /// The first two images, if there are at least two.
    pub fn pair(&self) -> Option<(&Path, &Path)> {
        match self.images.as_slice() {
            [first, second, ..] => Some((first, second)),
            _ => None,
        }
    }
}
