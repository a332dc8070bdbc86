use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a cleaning run.
#[derive(Error, Debug)]
pub enum CleanError {
    /// A root or class directory does not exist or cannot be listed.
    #[error("cannot read directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file that failed validation could not be removed.
    #[error("failed to remove {path}: {source}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single candidate was rejected. Every variant leads to the file being removed.
#[derive(Error, Debug)]
pub enum ValidationFailure {
    #[error("file name {name:?} has no extension")]
    MalformedName { name: String },

    #[error("cannot open file: {0}")]
    Open(#[source] io::Error),

    #[error("cannot decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// Decoded, but the data stops before the end-of-image marker.
    #[error("{format:?} image file is truncated")]
    Truncated { format: image::ImageFormat },
}

impl From<io::Error> for ValidationFailure {
    fn from(e: io::Error) -> Self {
        ValidationFailure::Open(e)
    }
}

impl From<image::ImageError> for ValidationFailure {
    fn from(e: image::ImageError) -> Self {
        ValidationFailure::Decode(e)
    }
}
