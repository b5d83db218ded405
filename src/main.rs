use change_version::args::Args;
use change_version::presentation::{self, ConsoleProgress};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Rejects arguments that are not valid UTF-8.
    let args = Args::parse();
    // Echoed back on a usage error only.
    let received: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    match change_version::execute(&args, &received, &ConsoleProgress) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            presentation::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
