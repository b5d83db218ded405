// crates/engine/src/progress.rs
use crate::stats::FileOutcome;
use std::path::Path;

/// Receives the per-file verbose lines as decisions are made.
///
/// For a changed file the call happens before the write, so the line is
/// emitted even when the write then fails.
pub trait ProgressSink: Send + Sync {
    /// # Errors
    /// A failing sink ends the run like any other I/O error.
    fn on_file(&self, path: &Path, outcome: FileOutcome) -> std::io::Result<()>;
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _path: &Path, _outcome: FileOutcome) -> std::io::Result<()> {
        Ok(())
    }
}
