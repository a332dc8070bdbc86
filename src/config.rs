use std::collections::BTreeSet;
use std::path::PathBuf;

/// Split directories cleaned when no roots are given.
pub const DEFAULT_ROOTS: [&str; 3] = [
    "medium10000_twoClasses/train/",
    "medium10000_twoClasses/val/",
    "medium10000_twoClasses/test/",
];

/// Extensions that are never opened or removed (label/metadata files).
pub const DEFAULT_EXCLUDED_EXTENSIONS: [&str; 1] = ["tsv"];

/// Settings for a [`DatasetCleaner`](crate::DatasetCleaner) run.
#[derive(Clone, Debug)]
pub struct CleanerConfig {
    pub roots: Vec<PathBuf>,
    pub excluded_extensions: BTreeSet<String>,
    /// Rewrite a single progress line on stderr for every candidate.
    pub show_progress: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOTS)
    }
}

impl CleanerConfig {
    /// Config for the given roots with the default excluded extensions.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            show_progress: true,
        }
    }

    pub fn with_excluded_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn is_excluded(&self, extension: &str) -> bool {
        self.excluded_extensions.contains(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleanerConfig::default();
        assert_eq!(config.roots.len(), 3);
        assert_eq!(config.roots[0], PathBuf::from("medium10000_twoClasses/train/"));
        assert!(config.is_excluded("tsv"));
        assert!(!config.is_excluded("jpg"));
        assert!(config.show_progress);
    }

    #[test]
    fn test_roots_keep_order() {
        let config = CleanerConfig::new(["b", "a", "c"]);
        let roots: Vec<_> = config.roots.iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(roots, ["b", "a", "c"]);
    }

    #[test]
    fn test_excluded_match_is_exact() {
        let config = CleanerConfig::new(["data"]).with_excluded_extensions(["txt", "csv"]);
        assert!(config.is_excluded("csv"));
        assert!(!config.is_excluded("tsv"));
        assert!(!config.is_excluded("CSV"));
    }
}
