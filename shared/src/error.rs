use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharedError {
    /// The endpoint answered with a status outside 200-299.
    #[error("Submission rejected: HTTP {status}")]
    HttpRejected { status: u16 },

    /// The request never produced a response (network down, CORS, aborted).
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Invalid target instant '{value}': {reason}")]
    InvalidTargetInstant { value: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl SharedError {
    /// Both submission failure kinds end in the same user-visible outcome.
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            SharedError::HttpRejected { .. } | SharedError::TransportFailure(_)
        )
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
