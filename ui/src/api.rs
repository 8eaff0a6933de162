//! API client for communicating with the DocQA service

use async_trait::async_trait;
use docqa_core::{
    Credentials, Document, Endpoint, Gateway, Query, RemoteError, Session, PDF_MIME,
};
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

/// [`Gateway`] over the browser's fetch.
#[derive(Clone)]
pub struct BrowserGateway {
    base_url: String,
    session: Session,
}

impl BrowserGateway {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    fn post(&self, endpoint: Endpoint) -> RequestBuilder {
        let req = Request::post(&endpoint.url(&self.base_url));
        match self.session.bearer() {
            Some(bearer) => req.header("Authorization", &bearer),
            None => req,
        }
    }

    /// Send and collect status + body. Anything that goes wrong before a
    /// response arrives becomes the endpoint's fallback message.
    async fn send(
        &self,
        endpoint: Endpoint,
        req: Result<Request, gloo_net::Error>,
    ) -> Result<(bool, Vec<u8>), RemoteError> {
        let req = req.map_err(|e| {
            tracing::warn!(endpoint = endpoint.path(), error = %e, "Failed to build request");
            endpoint.failure()
        })?;
        let resp = req.send().await.map_err(|e| {
            tracing::warn!(endpoint = endpoint.path(), error = %e, "Request failed");
            endpoint.failure()
        })?;

        // An unreadable body is treated like an empty one
        let body = resp.binary().await.unwrap_or_default();
        Ok((resp.ok(), body))
    }
}

/// `multipart/form-data` with the document under the `file` field.
fn document_form(document: &Document) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(document.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(PDF_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", &blob, &document.file_name)?;
    Ok(form)
}

#[async_trait(?Send)]
impl Gateway for BrowserGateway {
    async fn signup(&self, credentials: &Credentials) -> Result<(), RemoteError> {
        let endpoint = Endpoint::Signup;
        let (ok, body) = self.send(endpoint, self.post(endpoint).json(credentials)).await?;
        endpoint.read_ack(ok, &body)
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, RemoteError> {
        let endpoint = Endpoint::Login;
        let (ok, body) = self.send(endpoint, self.post(endpoint).json(credentials)).await?;
        endpoint.read_payload(ok, &body)
    }

    async fn upload_document(&self, document: &Document) -> Result<String, RemoteError> {
        let endpoint = Endpoint::Upload;
        let form = document_form(document).map_err(|e| {
            tracing::warn!(error = ?e, "Failed to build upload form");
            endpoint.failure()
        })?;
        // The browser sets the multipart boundary itself
        let (ok, body) = self.send(endpoint, self.post(endpoint).body(form)).await?;
        endpoint.read_payload(ok, &body)
    }

    async fn ask(&self, query: &Query) -> Result<String, RemoteError> {
        let endpoint = Endpoint::Ask;
        let (ok, body) = self.send(endpoint, self.post(endpoint).json(query)).await?;
        endpoint.read_payload(ok, &body)
    }
}
