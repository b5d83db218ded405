// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use change_version_engine::config::{
    Config, ConfigBuilder, ExclusionSet, InclusionSet, ReplacementPair, RunMode, WalkOptions,
    WalkOptionsBuilder,
};
use std::path::PathBuf;

/// Check the positional values; `received` is echoed back on failure.
///
/// # Errors
/// [`AppError::Usage`] when either version is missing or empty.
pub fn replacement_pair(args: &Args, received: &[String]) -> Result<ReplacementPair> {
    match (args.old_version.as_deref(), args.new_version.as_deref()) {
        (Some(old), Some(new)) if !old.is_empty() && !new.is_empty() => {
            Ok(ReplacementPair::new(old, new)?)
        }
        _ => Err(AppError::Usage {
            received: received.to_vec(),
        }),
    }
}

/// Directory the tool rewrites: the one it is invoked from, not the one the
/// executable lives in.
///
/// # Errors
/// Propagates the failure to read the current directory.
pub fn resolve_root() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Assemble the engine configuration with the fixed exclusion and inclusion
/// sets.
#[must_use]
pub fn build_config(args: &Args, pair: ReplacementPair, root: PathBuf) -> Config {
    let mode = RunMode {
        verbose: args.verbose,
        dry_run: args.dry_run,
    };

    let walk = WalkOptions {
        root,
        excluded: ExclusionSet::default(),
        threads: 1,
    };

    Config {
        walk,
        included: InclusionSet::default(),
        pair,
        mode,
    }
}
