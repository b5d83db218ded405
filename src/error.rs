// src/error.rs
use thiserror::Error;

pub const USAGE: &str = "USAGE: change-version old_version new_version [--verbose] [--dry[-run]]";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{usage}\nGot arguments: {received:?}", usage = USAGE)]
    Usage { received: Vec<String> },

    #[error(transparent)]
    Engine(#[from] change_version_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
