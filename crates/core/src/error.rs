//! Error types for the core library

use thiserror::Error;

use crate::api_error::ApiError;

#[derive(Error, Debug)]
pub enum Error {
    /// An error from the client-facing taxonomy
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend failure reported by a repository other than the file store
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// The taxonomy error carried by this error, if any
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}
