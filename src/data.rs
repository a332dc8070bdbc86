use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::check::{path_extension, verify_image};
use crate::config::CleanerConfig;
use crate::error::{CleanError, ValidationFailure};
use crate::progress::Progress;

/// What a run did to the dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Candidates that decoded and converted to RGB.
    pub kept: usize,
    /// Candidates skipped because their extension is excluded.
    pub skipped: usize,
    /// Files deleted after failing validation, in the order they were removed.
    pub removed: Vec<PathBuf>,
    /// Extensions of every kept candidate.
    pub seen_extensions: BTreeSet<String>,
}

impl CleanReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

enum Verdict {
    Keep(String),
    Skip,
    Remove(ValidationFailure),
}

/// Walks `root/<class>/<file>` for every configured root and deletes every
/// file that does not decode as an image.
///
/// The walk is exactly two levels deep. Anything below a class directory is a
/// candidate, directories included; nothing is recursed into further.
pub struct DatasetCleaner {
    config: CleanerConfig,
}

impl DatasetCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    /// Runs the cleaner over all roots in order.
    ///
    /// Every root is listed before any file is touched, so an unreadable root
    /// aborts the run with nothing deleted. Per-file failures are handled by
    /// removing the file; only directory access and deletion errors are
    /// returned.
    pub fn run(&self) -> Result<CleanReport, CleanError> {
        let mut progress = Progress::stderr(self.config.show_progress);
        let result = self.run_with(&mut progress);
        progress.finish();
        result
    }

    pub(crate) fn run_with<W: Write>(&self, progress: &mut Progress<W>) -> Result<CleanReport, CleanError> {
        let splits = self
            .config
            .roots
            .iter()
            .map(|root| list_dir(root).map(|entries| (root, entries)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = CleanReport::default();
        for (root, entries) in splits {
            log::info!("Cleaning split {}", root.display());
            let removed_before = report.removed.len();

            for class_dir in entries.into_iter().filter(|p| p.is_dir()) {
                for candidate in list_dir(&class_dir)? {
                    self.process(&candidate, progress, &mut report)?;
                }
            }

            log::info!(
                "Finished {}: {} removed",
                root.display(),
                report.removed.len() - removed_before
            );
        }

        log::info!(
            "Kept {}, removed {}, skipped {}; extensions seen: {:?}",
            report.kept,
            report.removed.len(),
            report.skipped,
            report.seen_extensions
        );
        Ok(report)
    }

    fn process<W: Write>(
        &self,
        path: &Path,
        progress: &mut Progress<W>,
        report: &mut CleanReport,
    ) -> Result<(), CleanError> {
        progress.update(path);

        match self.judge(path) {
            Verdict::Keep(ext) => {
                log::debug!("Valid image: {}", path.display());
                report.kept += 1;
                report.seen_extensions.insert(ext);
            }
            Verdict::Skip => {
                log::debug!("Skipping excluded file: {}", path.display());
                report.skipped += 1;
            }
            Verdict::Remove(failure) => {
                log::warn!("Removing {}: {}", path.display(), failure);
                progress.removing(path, &failure);
                fs::remove_file(path).map_err(|source| CleanError::Deletion {
                    path: path.to_path_buf(),
                    source,
                })?;
                report.removed.push(path.to_path_buf());
            }
        }
        Ok(())
    }

    fn judge(&self, path: &Path) -> Verdict {
        let ext = match path_extension(path) {
            Ok(ext) => ext,
            Err(failure) => return Verdict::Remove(failure),
        };
        if self.config.is_excluded(&ext) {
            return Verdict::Skip;
        }
        match verify_image(path) {
            Ok(()) => Verdict::Keep(ext),
            Err(failure) => Verdict::Remove(failure),
        }
    }
}

/// Lists the immediate entries of `dir`. Entries are sorted so runs are reproducible.
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, CleanError> {
    let access = |source| CleanError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = fs::read_dir(dir)
        .map_err(access)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(access)?;
    paths.sort();
    Ok(paths)
}
