//! The outbound API surface.
//!
//! [`Gateway`] is implemented once per transport (reqwest on native targets,
//! `gloo-net` in the browser). Transports only move bytes; turning a status
//! code and body into a payload or a displayable message is done here by
//! [`Endpoint`] so every transport normalizes errors the same way.

use crate::error::RemoteError;
use crate::types::{ApiResponse, Credentials, Document, Query};
use async_trait::async_trait;

/// The four remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Signup,
    Login,
    Upload,
    Ask,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Signup => "/signup",
            Endpoint::Login => "/login",
            Endpoint::Upload => "/upload",
            Endpoint::Ask => "/ask",
        }
    }

    /// Message shown when neither the body nor the transport says anything useful.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Endpoint::Signup => "Signup failed",
            Endpoint::Login => "Login failed",
            Endpoint::Upload => "Upload failed.",
            Endpoint::Ask => "Failed to get answer.",
        }
    }

    /// Full URL for this endpoint under `base_url`.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Fallback error for this endpoint.
    pub fn failure(self) -> RemoteError {
        RemoteError::new(self.fallback_message())
    }

    fn payload(self, response: &ApiResponse) -> Option<&String> {
        match self {
            Endpoint::Signup => None,
            Endpoint::Login => response.access_token.as_ref(),
            Endpoint::Upload => response.message.as_ref(),
            Endpoint::Ask => response.answer.as_ref(),
        }
    }

    fn rejection(self, response: &ApiResponse) -> RemoteError {
        response
            .error_message()
            .map(RemoteError::new)
            .unwrap_or_else(|| self.failure())
    }

    /// Interpret a response that is expected to carry a payload field
    /// (`access_token`, `message` or `answer`).
    ///
    /// A 2xx body without the payload is a failure too: the service reports
    /// "no document uploaded" as `200 {"error": ...}`.
    pub fn read_payload(self, success: bool, body: &[u8]) -> Result<String, RemoteError> {
        let response = ApiResponse::parse(body);
        if !success {
            return Err(self.rejection(&response));
        }
        match self.payload(&response) {
            Some(value) => Ok(value.clone()),
            None => Err(self.rejection(&response)),
        }
    }

    /// Interpret a response that only acknowledges success.
    pub fn read_ack(self, success: bool, body: &[u8]) -> Result<(), RemoteError> {
        if success {
            return Ok(());
        }
        Err(self.rejection(&ApiResponse::parse(body)))
    }
}

/// Client for the remote DocQA service.
///
/// Implementations attach the session's bearer token to every request and
/// return only normalized [`RemoteError`]s. No retries, no timeouts unless the
/// transport is configured with one.
#[async_trait(?Send)]
pub trait Gateway {
    /// `POST /signup`.
    async fn signup(&self, credentials: &Credentials) -> Result<(), RemoteError>;

    /// `POST /login`, yielding the access token.
    async fn login(&self, credentials: &Credentials) -> Result<String, RemoteError>;

    /// `POST /upload` (multipart field `file`), yielding the status message.
    async fn upload_document(&self, document: &Document) -> Result<String, RemoteError>;

    /// `POST /ask`, yielding the answer text.
    async fn ask(&self, query: &Query) -> Result<String, RemoteError>;
}
