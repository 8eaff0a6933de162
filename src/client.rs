//! HTTP gateway for native targets.

use crate::config::DocqaConfig;
use crate::Result;
use async_trait::async_trait;
use docqa_core::{
    Credentials, Document, Endpoint, Gateway, Query, RemoteError, Session, PDF_MIME,
};
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use std::time::Duration;
use tracing::{debug, warn};

/// [`Gateway`] over `reqwest`.
///
/// Reads the session on every request, so a token stored by a login through
/// this gateway is used by the very next call.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpGateway {
    /// Create a gateway with the client's default timeouts.
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
        Self::with_timeout(base_url, session, None)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Session,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
            session,
        })
    }

    pub fn from_config(config: &DocqaConfig, session: Session) -> Result<Self> {
        Self::with_timeout(config.api.base_url.clone(), session, config.api.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn post(&self, endpoint: Endpoint) -> RequestBuilder {
        let req = self.client.post(endpoint.url(&self.base_url));
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and collect status + body. Transport failures collapse into the
    /// endpoint's fallback message.
    async fn send(
        &self,
        endpoint: Endpoint,
        req: RequestBuilder,
    ) -> std::result::Result<(bool, Vec<u8>), RemoteError> {
        let resp = req.send().await.map_err(|e| {
            warn!(endpoint = endpoint.path(), error = %e, "Request failed");
            endpoint.failure()
        })?;

        let status = resp.status();
        debug!(endpoint = endpoint.path(), status = status.as_u16(), "Response received");

        let body = resp.bytes().await.map_err(|e| {
            warn!(endpoint = endpoint.path(), error = %e, "Failed to read response body");
            endpoint.failure()
        })?;
        Ok((status.is_success(), body.to_vec()))
    }
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn signup(&self, credentials: &Credentials) -> std::result::Result<(), RemoteError> {
        let endpoint = Endpoint::Signup;
        let (ok, body) = self.send(endpoint, self.post(endpoint).json(credentials)).await?;
        endpoint.read_ack(ok, &body)
    }

    async fn login(&self, credentials: &Credentials) -> std::result::Result<String, RemoteError> {
        let endpoint = Endpoint::Login;
        let (ok, body) = self.send(endpoint, self.post(endpoint).json(credentials)).await?;
        endpoint.read_payload(ok, &body)
    }

    async fn upload_document(
        &self,
        document: &Document,
    ) -> std::result::Result<String, RemoteError> {
        let endpoint = Endpoint::Upload;
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(PDF_MIME)
            .map_err(|e| {
                warn!(error = %e, "Invalid multipart part");
                endpoint.failure()
            })?;
        let form = Form::new().part("file", part);

        let (ok, body) = self.send(endpoint, self.post(endpoint).multipart(form)).await?;
        endpoint.read_payload(ok, &body)
    }

    async fn ask(&self, query: &Query) -> std::result::Result<String, RemoteError> {
        let endpoint = Endpoint::Ask;
        let (ok, body) = self.send(endpoint, self.post(endpoint).json(query)).await?;
        endpoint.read_payload(ok, &body)
    }
}
