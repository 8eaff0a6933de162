//! Request and response types matching the DocQA service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// MIME type sent with uploaded documents.
pub const PDF_MIME: &str = "application/pdf";

/// Login / signup request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

/// Question request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    #[serde(rename = "query")]
    pub text: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A document selected for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Whether the content starts with the PDF signature.
    pub fn looks_like_pdf(&self) -> bool {
        self.bytes.starts_with(b"%PDF-")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Every field the service puts in a response body.
///
/// Endpoints disagree on where errors go (`detail` for auth and upload,
/// `error` for ask), so both are read everywhere. Fields are read one by
/// one: a field of an unexpected type is skipped without hiding the others.
#[derive(Debug, Clone, Default)]
pub struct ApiResponse {
    pub access_token: Option<String>,
    pub message: Option<String>,
    pub answer: Option<String>,
    pub detail: Option<ErrorDetail>,
    pub error: Option<ErrorDetail>,
}

impl ApiResponse {
    /// Parse a response body. Empty or non-JSON bodies yield an empty response.
    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let detail = |key: &str| {
            value
                .get(key)
                .filter(|v| !v.is_null())
                .and_then(|v| ErrorDetail::deserialize(v).ok())
        };
        Self {
            access_token: text("access_token"),
            message: text("message"),
            answer: text("answer"),
            detail: detail("detail"),
            error: detail("error"),
        }
    }

    /// Error message carried by the body, `detail` first.
    pub fn error_message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(ErrorDetail::message)
            .or_else(|| self.error.as_ref().and_then(ErrorDetail::message))
    }
}

/// An error field: plain text, or a list of validation items.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Items(Vec<ValidationItem>),
    Other(Value),
}

/// One entry of a validation error list.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationItem {
    pub msg: String,
}

impl ErrorDetail {
    /// Render the detail as a single line, if it carries any text.
    pub fn message(&self) -> Option<String> {
        match self {
            ErrorDetail::Text(text) if !text.trim().is_empty() => Some(text.clone()),
            ErrorDetail::Items(items) if !items.is_empty() => Some(
                items
                    .iter()
                    .map(|i| i.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        }
    }
}
