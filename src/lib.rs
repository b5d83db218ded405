// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod presentation;

use crate::args::Args;
use crate::error::Result;
use change_version_engine::progress::ProgressSink;
use change_version_engine::stats::RunReport;

/// Validate `args`, then rewrite the tree under the current directory.
///
/// `received` is the raw argument list, reported back on a usage error.
/// Verbose lines go to `progress`.
///
/// # Errors
/// Usage errors happen before any filesystem access; engine errors end the
/// run at the first traversal or I/O failure.
pub fn execute(
    args: &Args,
    received: &[String],
    progress: &dyn ProgressSink,
) -> Result<RunReport> {
    let pair = config::replacement_pair(args, received)?;
    let root = config::resolve_root()?;
    let config = config::build_config(args, pair, root);
    Ok(change_version_engine::run(&config, progress)?)
}
