//! Error taxonomy for Ladle.
//!
//! Search fetches fail with [`Error::Network`] or [`Error::Parse`]; favorites
//! persistence fails with [`Error::Storage`]. None of these are fatal to the
//! running page: callers log and degrade as described on each operation.

use thiserror::Error;

/// Errors surfaced by networking and persistence.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-2xx response from the recipe directory.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON shape we expect.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading or writing the favorites file failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Parse(e.to_string())
        } else {
            Error::Network(e.to_string())
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
