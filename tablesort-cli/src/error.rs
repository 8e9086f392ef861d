//! CLI error type.

use std::path::PathBuf;

use tablesort_lib::error::{ConfigError, HashError, StateError};
use thiserror::Error;

/// Error type for the tablesort CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("table '{table}': {source}")]
    Config { table: String, source: ConfigError },
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Hash(#[from] HashError),
}
