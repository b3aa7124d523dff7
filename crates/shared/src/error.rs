use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body the discovery backend returns on a non-success status.
///
/// Surfaced to the user as-is; when the backend's body is not parsable
/// JSON the client synthesizes one from [`GENERIC_REQUEST_ERROR`]
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ErrorInfo {
    pub error: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub const GENERIC_REQUEST_ERROR: &str =
    "There was a problem with the request, please try again";
