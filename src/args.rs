// src/args.rs
use clap::Parser;

/// Replace every occurrence of a version string across the project tree.
///
/// Both positionals are optional at the parser level so that a missing one
/// is reported with the tool's own usage line and the arguments received.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "change-version", version, about = "Bump a version string across a project tree")]
pub struct Args {
    /// Version string currently in the files
    pub old_version: Option<String>,

    /// Version string to write instead
    pub new_version: Option<String>,

    /// Print one line per visited file (EXCLUDED / SKIPPED / FILE)
    #[arg(long)]
    pub verbose: bool,

    /// Report what would change without writing anything
    #[arg(long = "dry-run", visible_alias = "dry")]
    pub dry_run: bool,
}
