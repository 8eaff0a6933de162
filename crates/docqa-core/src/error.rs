//! Error types for docqa-core.
//!
//! Every failure a flow can surface ends up as a [`FlowError`], whose
//! `Display` is exactly the message shown to the user.

use thiserror::Error;

/// A failure reported by the remote service or the network layer.
///
/// Carries only a human-readable message. Transport failures, 4xx and 5xx
/// responses are deliberately indistinguishable once normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    /// Create a remote error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message to display.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A failure to persist or remove the session token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Session storage error: {0}")]
pub struct StoreError(pub String);

/// Errors surfaced by the request flows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Rejected locally before any network call.
    #[error("{0}")]
    Validation(String),

    /// Rejected by the remote service or lost in transit.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The session token could not be stored.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FlowError {
    /// Build a local validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FlowError::Validation(message.into())
    }

    /// Whether this error was raised without touching the network.
    pub fn is_local(&self) -> bool {
        matches!(self, FlowError::Validation(_))
    }
}
