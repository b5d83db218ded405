use crate::config::{InclusionSet, RunMode};
use crate::error::{EngineError, Result};
use crate::matcher::LiteralReplacer;
use crate::progress::ProgressSink;
use crate::stats::FileOutcome;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Rewrite a single file in place.
///
/// Files whose extension is not eligible are reported as excluded without any
/// I/O. Eligible files are read whole, substituted, and written back only when
/// the bytes changed and `mode.dry_run` is off.
///
/// With `mode.verbose` the outcome goes to `progress` as soon as it is known,
/// which for a changed file is before the write.
///
/// # Errors
/// Read and write failures are returned as [`EngineError::FileRead`] and
/// [`EngineError::FileWrite`], a failing sink as [`EngineError::Progress`].
/// Callers treat all of them as fatal.
pub fn rewrite_file(
    path: &Path,
    included: &InclusionSet,
    replacer: &LiteralReplacer,
    mode: RunMode,
    progress: &dyn ProgressSink,
) -> Result<FileOutcome> {
    let report = |outcome: FileOutcome| -> Result<FileOutcome> {
        if mode.verbose {
            progress
                .on_file(path, outcome)
                .map_err(|e| EngineError::Progress {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(outcome)
    };

    if !included.allows(path) {
        return report(FileOutcome::Excluded);
    }

    let original = fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let updated = match replacer.replace_all(&original) {
        Cow::Borrowed(_) => return report(FileOutcome::Skipped),
        Cow::Owned(bytes) if bytes == original => return report(FileOutcome::Skipped),
        Cow::Owned(bytes) => bytes,
    };

    let outcome = report(FileOutcome::Changed {
        written: !mode.dry_run,
    })?;
    if mode.dry_run {
        return Ok(outcome);
    }

    fs::write(path, &updated).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(outcome)
}
