use std::fmt;
use std::path::{Path, PathBuf};

/// What happened to one visited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Extension not eligible; never read.
    Excluded,
    /// Eligible, but the content had no occurrence to replace.
    Skipped,
    /// Eligible and changed. `written` is false in dry-run mode.
    Changed { written: bool },
}

impl FileOutcome {
    /// Prefix used for the per-file verbose line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excluded => "EXCLUDED",
            Self::Skipped => "SKIPPED",
            Self::Changed { .. } => "FILE",
        }
    }

    /// One verbose line for `path`, e.g. `FILE: docs/index.md`.
    #[must_use]
    pub fn line(self, path: &Path) -> String {
        format!("{}: {}", self.label(), path.display())
    }
}

/// Aggregate result of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Regular files handed to the rewriter.
    pub scanned: usize,
    pub excluded: usize,
    pub skipped: usize,
    /// Files that changed (or would change, in dry-run mode).
    pub changed: usize,
    /// Files actually written back to disk.
    pub written: usize,
    /// Paths of changed files, sorted.
    pub changed_paths: Vec<PathBuf>,
}

impl RunReport {
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<(PathBuf, FileOutcome)>) -> Self {
        let mut report = Self {
            scanned: outcomes.len(),
            ..Self::default()
        };
        for (path, outcome) in outcomes {
            match outcome {
                FileOutcome::Excluded => report.excluded += 1,
                FileOutcome::Skipped => report.skipped += 1,
                FileOutcome::Changed { written } => {
                    report.changed += 1;
                    if written {
                        report.written += 1;
                    }
                    report.changed_paths.push(path);
                }
            }
        }
        report.changed_paths.sort();
        report
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scanned={} excluded={} skipped={} changed={} written={}",
            self.scanned, self.excluded, self.skipped, self.changed, self.written
        )
    }
}
