//! Dataset hygiene for image classification corpora.
//!
//! A dataset is laid out as `split/class/file` (for example `train/cat/0001.jpg`).
//! [`DatasetCleaner`] opens every file under each class directory, checks that
//! it decodes and converts to RGB, and deletes the ones that do not. Files with
//! an excluded extension (label sheets such as `.tsv`) are left alone.

pub mod check;
pub mod config;
pub mod data;
pub mod error;
pub mod progress;

use std::path::PathBuf;

pub use config::{CleanerConfig, DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_ROOTS};
pub use data::{CleanReport, DatasetCleaner};
pub use error::{CleanError, ValidationFailure};

/// Cleans `roots` in one shot with the default excluded extensions.
/// Use [`DatasetCleaner`] to change exclusions or silence progress output.
pub fn clean_dataset<I, P>(roots: I) -> Result<CleanReport, CleanError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    DatasetCleaner::new(CleanerConfig::new(roots)).run()
}
