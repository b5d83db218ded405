// src/presentation.rs
use crate::error::AppError;
use change_version_engine::progress::ProgressSink;
use change_version_engine::stats::FileOutcome;
use std::io::Write;
use std::path::Path;

/// Prints the per-file verbose lines (`EXCLUDED:`, `SKIPPED:`, `FILE:`) to
/// stdout as the engine decides them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn on_file(&self, path: &Path, outcome: FileOutcome) -> std::io::Result<()> {
        writeln!(std::io::stdout().lock(), "{}", outcome.line(path))
    }
}

/// Print a fatal error the way the user expects to see it.
pub fn print_error(err: &AppError) {
    match err {
        AppError::Usage { .. } => eprintln!("{err}"),
        AppError::Engine(e) if e.is_traversal() => {
            eprintln!("ERROR while traversing directory!:");
            eprintln!("{e}");
        }
        _ => eprintln!("Application Error: {err}"),
    }
}
