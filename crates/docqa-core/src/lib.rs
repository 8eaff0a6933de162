//! # docqa-core
//!
//! Session handling and request lifecycle for clients of the DocQA service,
//! a remote API that answers natural-language questions about an uploaded
//! PDF.
//!
//! The crate has no UI and no HTTP stack of its own. It provides:
//!
//! - **Session**: an injectable handle over a [`TokenStore`]
//! - **Gateway**: the [`Gateway`] trait plus [`Endpoint`], which turns raw
//!   responses into payloads or displayable messages
//! - **Routing**: [`RouteGuard`] deciding whether `/` may render
//! - **Flows**: [`AuthForm`], [`UploadFlow`] and [`AskFlow`], each driven by
//!   an [`Operation`] whose tickets make stale results harmless
//! - **History**: the newest-first [`HistoryLog`] of answered questions
//!
//! It compiles for native targets and for `wasm32-unknown-unknown`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docqa_core::{AskFlow, AuthForm, RouteGuard, Route, Session, Navigation};
//!
//! let session = Session::in_memory();
//! let gateway = MyGateway::new("http://localhost:8000", session.clone());
//!
//! let mut login = AuthForm::login().with_credentials("a@b.com", "secret");
//! login.submit(&gateway, &session).await;
//!
//! if RouteGuard::new(session.clone()).check(Route::Home) == Navigation::Render(Route::Home) {
//!     let mut ask = AskFlow::new();
//!     ask.ask(&gateway, "What is this paper about?").await;
//!     println!("{:?}", ask.answer());
//! }
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod flow;
pub mod gateway;
pub mod history;
pub mod route;
pub mod session;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{FlowError, RemoteError, StoreError};
pub use flow::{AskFlow, AuthForm, AuthGrant, AuthMode, AuthSuccess, UploadFlow};
pub use gateway::{Endpoint, Gateway};
pub use history::{Exchange, HistoryLog};
pub use route::{GuardState, Navigation, Redirect, Route, RouteGuard, REDIRECT_DELAY};
pub use session::{MemoryTokenStore, Session, TokenStore, TOKEN_KEY};
pub use state::{OpState, Operation, Pending, Ticket};
pub use types::{Credentials, Document, Query, PDF_MIME};
