//! Request flows driven by the front-ends.
//!
//! Every flow follows the same three steps so that UI code can hold the flow
//! in reactive state and never keep it borrowed across an `.await`:
//!
//! 1. `begin()` validates locally and either rejects (no network call) or
//!    returns a [`Pending`](crate::state::Pending) request with a ticket;
//! 2. the caller sends the request through a [`Gateway`](crate::Gateway);
//! 3. `finish()` applies the result if the ticket is still current.
//!
//! `submit()` runs all three in sequence for callers that own the flow.

pub mod ask;
pub mod auth;
pub mod upload;

pub use ask::AskFlow;
pub use auth::{AuthForm, AuthGrant, AuthMode, AuthSuccess};
pub use upload::UploadFlow;
