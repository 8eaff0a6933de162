//! Global application state

use crate::api::BrowserGateway;
use crate::storage::LocalStorageTokenStore;
use docqa_core::{Route, RouteGuard, Session};
use leptos::prelude::*;

/// Service URL baked in at build time, e.g. `DOCQA_API_URL=https://... trunk build`.
pub const API_BASE: &str = match option_env!("DOCQA_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Mirrors the stored token; read it to make a view react to login/logout
    pub token: RwSignal<Option<String>>,
    pub session: Session,
    pub gateway: BrowserGateway,
}

impl AppState {
    pub fn new() -> Self {
        let store = LocalStorageTokenStore::load();
        let token = store.signal();
        let session = Session::new(store);
        let gateway = BrowserGateway::new(API_BASE, session.clone());
        Self {
            token,
            session,
            gateway,
        }
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.clone())
    }

    /// Reactive guard check for `route`.
    pub fn allows(&self, route: Route) -> bool {
        self.token.track();
        self.guard().check(route) == docqa_core::Navigation::Render(route)
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.session.sign_out() {
            tracing::warn!(error = %e, "Failed to clear the session");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
