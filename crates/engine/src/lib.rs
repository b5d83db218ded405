// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod matcher;
pub mod processor;
pub mod progress;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::matcher::LiteralReplacer;
use crate::progress::ProgressSink;
use crate::stats::{FileOutcome, RunReport};
use ignore::WalkState;

/// Run the version replacement over the configured tree.
///
/// The walk runs on its own thread and feeds regular files through a channel
/// into a rayon pool of `config.walk.threads` workers, each file being read,
/// substituted and (conditionally) written independently. In verbose mode
/// each outcome is handed to `progress` before the file is written.
///
/// # Errors
///
/// The first fatal error ends the run: a traversal error reported by the
/// walker, a read/write failure on an eligible file, or a failing `progress`.
/// Work that had not started yet is abandoned; files already rewritten stay
/// rewritten.
pub fn run(config: &Config, progress: &dyn ProgressSink) -> Result<RunReport> {
    let replacer = LiteralReplacer::new(&config.pair.original, &config.pair.replacement)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.walk.threads.max(1))
        .build()?;

    let (tx, rx) = crossbeam_channel::bounded::<PathBuf>(1024);
    let (err_tx, err_rx) = crossbeam_channel::bounded::<EngineError>(1);
    let cancelled = Arc::new(AtomicBool::new(false));

    let walk_cfg = config.walk.clone();
    let walk_cancelled = Arc::clone(&cancelled);
    let walker = std::thread::spawn(move || {
        crate::filesystem::walk_parallel(
            &walk_cfg,
            |path| {
                if walk_cancelled.load(Ordering::SeqCst) || tx.send(path).is_err() {
                    WalkState::Quit
                } else {
                    WalkState::Continue
                }
            },
            |err| {
                log::debug!("traversal failed: {err}");
                walk_cancelled.store(true, Ordering::SeqCst);
                // Only the first error is kept.
                let _ = err_tx.try_send(err);
                WalkState::Quit
            },
        );
    });

    let mode = config.mode;
    let outcomes = pool.install(|| {
        rx.into_iter()
            .par_bridge()
            .map(|path| {
                if cancelled.load(Ordering::SeqCst) {
                    return Ok(None);
                }
                match crate::processor::rewrite_file(
                    &path,
                    &config.included,
                    &replacer,
                    mode,
                    progress,
                ) {
                    Ok(outcome) => Ok(Some((path, outcome))),
                    Err(e) => {
                        cancelled.store(true, Ordering::SeqCst);
                        Err(e)
                    }
                }
            })
            .collect::<Result<Vec<Option<(PathBuf, FileOutcome)>>>>()
    });

    if let Err(panic) = walker.join() {
        std::panic::resume_unwind(panic);
    }

    let outcomes = outcomes?;
    if let Ok(walk_err) = err_rx.try_recv() {
        return Err(walk_err);
    }

    let report = RunReport::from_outcomes(outcomes.into_iter().flatten().collect());
    log::debug!("run finished: {report}");
    Ok(report)
}
