// src/error.rs
use thiserror::Error;

/// Errors returned by the helpers in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The command lookup on `<database>.$cmd` came back empty.
    #[error("no db response for command on database '{database}'")]
    CommandFailed { database: String },

    #[error("invalid index spec: {0}")]
    InvalidIndexSpec(String),

    #[error("invalid regex: {0}")]
    InvalidRegex(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("failed to serialize value to BSON: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("failed to read settings: {0}")]
    Settings(String),

    /// Failure raised by the underlying driver, passed through untouched.
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
