use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Console output of a run: one progress line rewritten in place, plus a
/// diagnostic line for every removed file.
pub struct Progress<W: Write> {
    out: W,
    enabled: bool,
    // Width of the last progress line, so a shorter one can blank it out.
    last_width: usize,
}

impl Progress<io::Stderr> {
    pub fn stderr(enabled: bool) -> Self {
        Self::new(io::stderr(), enabled)
    }
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled, last_width: 0 }
    }

    /// Overwrites the current progress line with `path`.
    pub fn update(&mut self, path: &Path) {
        if !self.enabled {
            return;
        }
        let line = format!("** Path: {} **", path.display());
        let width = line.chars().count();
        let pad = self.last_width.saturating_sub(width);
        // Console write errors are ignored.
        let _ = write!(self.out, "\r{}{}", line, " ".repeat(pad));
        let _ = self.out.flush();
        self.last_width = width;
    }

    /// Reports a file that failed validation and is about to be removed.
    /// Always printed, even with progress disabled.
    pub fn removing(&mut self, path: &Path, reason: &dyn Display) {
        if self.last_width > 0 {
            let _ = writeln!(self.out);
            self.last_width = 0;
        }
        let _ = writeln!(self.out, "** Error while processing {}: {}... removing file **", path.display(), reason);
        let _ = self.out.flush();
    }

    /// Terminates the progress line so later output starts on a fresh line.
    pub fn finish(&mut self) {
        if self.last_width > 0 {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
            self.last_width = 0;
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(progress: Progress<Vec<u8>>) -> String {
        String::from_utf8(progress.into_inner()).unwrap()
    }

    #[test]
    fn test_update_rewrites_same_line() {
        let mut progress = Progress::new(Vec::new(), true);
        progress.update(Path::new("train/cat/long_name.jpg"));
        progress.update(Path::new("train/cat/a.jpg"));
        let out = output(progress);

        assert!(!out.contains('\n'));
        assert_eq!(out.matches('\r').count(), 2);
        assert!(out.ends_with(' '));
    }

    #[test]
    fn test_disabled_progress_prints_only_diagnostics() {
        let mut progress = Progress::new(Vec::new(), false);
        progress.update(Path::new("train/cat/a.jpg"));
        progress.removing(Path::new("train/cat/b.jpg"), &"cannot decode image");
        progress.finish();
        let out = output(progress);

        assert!(!out.contains("a.jpg"));
        assert_eq!(out, "** Error while processing train/cat/b.jpg: cannot decode image... removing file **\n");
    }

    #[test]
    fn test_diagnostic_starts_on_new_line() {
        let mut progress = Progress::new(Vec::new(), true);
        progress.update(Path::new("val/dog/x.png"));
        progress.removing(Path::new("val/dog/x.png"), &"bad");
        let out = output(progress);

        assert!(out.starts_with("\r** Path: val/dog/x.png **\n** Error while processing"));
    }

    #[test]
    fn test_finish_ends_line_once() {
        let mut progress = Progress::new(Vec::new(), true);
        progress.update(Path::new("a.png"));
        progress.finish();
        progress.finish();
        assert!(output(progress).ends_with("**\n"));
    }
}
