use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

pub type ClockResult<T> = Result<T, ClockError>;

/// Classified failure of a call to the chat platform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Channel not found")]
    NotFound,

    #[error("Missing permission to manage the channel")]
    PermissionDenied,

    #[error("No access to the channel")]
    AccessRevoked,

    #[error("Call timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the referenced channel is gone for good.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound)
    }
}
