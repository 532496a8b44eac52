//! Registry error types

use thiserror::Error;
use wes_bridge_types::BridgeError;

/// Registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("No workflow run found for portal run id {0}")]
    WorkflowRunNotFound(String),

    #[error("No payload recorded for workflow run {0}")]
    PayloadNotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<RegistryError> for BridgeError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::WorkflowRunNotFound(_) | RegistryError::PayloadNotFound(_) => {
                BridgeError::NotFound(err.to_string())
            }
            other => BridgeError::Registry(other.to_string()),
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
