use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage layer errors.
///
/// Nothing in the store panics: every fallible operation returns one of
/// these, and the caller decides whether to retry, report, or abort.
/// Reading a missing or unreadable file is NOT an error: `read_all`
/// yields an empty collection by contract.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file could not be opened in the required write mode
    /// (permissions, invalid path, read-only filesystem).
    #[error("cannot open {path} for writing: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure after the file was already open (disk full, device error).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
