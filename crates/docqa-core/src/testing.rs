//! In-memory gateway used by the flow tests.

use crate::error::RemoteError;
use crate::gateway::{Endpoint, Gateway};
use crate::types::{Credentials, Document, Query};
use async_trait::async_trait;
use std::cell::RefCell;

/// Gateway returning canned results and recording every call.
pub(crate) struct ScriptedGateway {
    signup: Result<(), RemoteError>,
    login: Result<String, RemoteError>,
    upload: Result<String, RemoteError>,
    ask: Result<String, RemoteError>,
    calls: RefCell<Vec<(Endpoint, String)>>,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self {
            signup: Ok(()),
            login: Ok("token".to_string()),
            upload: Ok("PDF processed successfully".to_string()),
            ask: Ok("answer".to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signup(mut self, result: Result<(), &str>) -> Self {
        self.signup = result.map_err(RemoteError::new);
        self
    }

    pub fn with_login(mut self, result: Result<&str, &str>) -> Self {
        self.login = result.map(str::to_string).map_err(RemoteError::new);
        self
    }

    pub fn with_upload(mut self, result: Result<&str, &str>) -> Self {
        self.upload = result.map(str::to_string).map_err(RemoteError::new);
        self
    }

    pub fn with_ask(mut self, result: Result<&str, &str>) -> Self {
        self.ask = result.map(str::to_string).map_err(RemoteError::new);
        self
    }

    pub fn calls(&self) -> Vec<(Endpoint, String)> {
        self.calls.borrow().clone()
    }

    fn record(&self, endpoint: Endpoint, detail: &str) {
        self.calls.borrow_mut().push((endpoint, detail.to_string()));
    }
}

#[async_trait(?Send)]
impl Gateway for ScriptedGateway {
    async fn signup(&self, credentials: &Credentials) -> Result<(), RemoteError> {
        self.record(Endpoint::Signup, &credentials.email);
        self.signup.clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, RemoteError> {
        self.record(Endpoint::Login, &credentials.email);
        self.login.clone()
    }

    async fn upload_document(&self, document: &Document) -> Result<String, RemoteError> {
        self.record(Endpoint::Upload, &document.file_name);
        self.upload.clone()
    }

    async fn ask(&self, query: &Query) -> Result<String, RemoteError> {
        self.record(Endpoint::Ask, &query.text);
        self.ask.clone()
    }
}
