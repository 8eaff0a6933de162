//! # DocQA
//!
//! Native client for a DocQA service: register, log in, upload a PDF and ask
//! questions about it from the terminal.
//!
//! The session, routing and request flows live in [`docqa_core`]; this crate
//! adds what a native process needs around them:
//!
//! - [`client::HttpGateway`] - the [`Gateway`](docqa_core::Gateway) over `reqwest`
//! - [`store::FileTokenStore`] - the session token kept in a file
//! - [`config::DocqaConfig`] - `docqa.toml` loading
//! - [`cli`] - argument parsing, colored output and the interactive chat
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use docqa::{client::HttpGateway, store::FileTokenStore};
//! use docqa_core::{AskFlow, Session};
//!
//! let session = Session::new(FileTokenStore::new("/tmp/docqa-token"));
//! let gateway = HttpGateway::new("http://localhost:8000", session.clone())?;
//!
//! let mut flow = AskFlow::new();
//! flow.ask(&gateway, "Who wrote this?").await;
//! ```

/// Command-line interface.
pub mod cli;
/// HTTP gateway built on reqwest.
pub mod client;
/// Configuration loading (`docqa.toml`).
pub mod config;
/// File-backed session token store.
pub mod store;

pub use client::HttpGateway;
pub use config::DocqaConfig;
pub use docqa_core;
pub use store::FileTokenStore;

use docqa_core::FlowError;

/// Error types for the DocQA client
#[derive(Debug, thiserror::Error)]
pub enum DocqaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Flow(#[from] FlowError),

    #[error("Not logged in. Run `docqa login` first.")]
    NotLoggedIn,

    #[error("Input error: {0}")]
    Input(String),
}

/// Result type alias for DocQA operations
pub type Result<T> = std::result::Result<T, DocqaError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
