//! Login and signup.

use crate::error::{FlowError, RemoteError};
use crate::gateway::{Endpoint, Gateway};
use crate::route::{Redirect, Route};
use crate::session::Session;
use crate::state::{OpState, Operation, Pending};
use crate::types::Credentials;
use tracing::{debug, info};

const MISSING_FIELDS: &str = "Email and password are required.";

/// Which of the two credential forms this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// What the service granted on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthGrant {
    Token(String),
    Registered,
}

/// Message and follow-up navigation after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub message: &'static str,
    pub redirect: Redirect,
}

impl AuthMode {
    pub fn endpoint(self) -> Endpoint {
        match self {
            AuthMode::Login => Endpoint::Login,
            AuthMode::Signup => Endpoint::Signup,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Login successful!",
            AuthMode::Signup => "Signup successful! Redirecting to login...",
        }
    }

    /// Login lands on the home page; signup sends the user to log in.
    pub fn redirect_target(self) -> Route {
        match self {
            AuthMode::Login => Route::Home,
            AuthMode::Signup => Route::Login,
        }
    }

    /// Send `credentials` to the matching endpoint.
    pub async fn dispatch(
        self,
        gateway: &dyn Gateway,
        credentials: &Credentials,
    ) -> Result<AuthGrant, RemoteError> {
        match self {
            AuthMode::Login => gateway.login(credentials).await.map(AuthGrant::Token),
            AuthMode::Signup => gateway
                .signup(credentials)
                .await
                .map(|()| AuthGrant::Registered),
        }
    }
}

/// Email/password form shared by login and signup.
///
/// Input fields survive failures so the user can correct and resubmit.
#[derive(Debug, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    pub email: String,
    pub password: String,
    op: Operation<AuthSuccess>,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            email: String::new(),
            password: String::new(),
            op: Operation::new(),
        }
    }

    pub fn login() -> Self {
        Self::new(AuthMode::Login)
    }

    pub fn signup() -> Self {
        Self::new(AuthMode::Signup)
    }

    /// Prefill both fields.
    pub fn with_credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.email = email.into();
        self.password = password.into();
        self
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn state(&self) -> &OpState<AuthSuccess> {
        self.op.state()
    }

    /// Text for the message line under the form, success or error.
    pub fn message(&self) -> Option<String> {
        match self.op.state() {
            OpState::Succeeded(success) => Some(success.message.to_string()),
            OpState::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Validate required fields and enter `InFlight`.
    pub fn begin(&mut self) -> Option<Pending<Credentials>> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.op.reject(FlowError::validation(MISSING_FIELDS));
            return None;
        }
        let ticket = self.op.start();
        Some(Pending {
            ticket,
            request: Credentials::new(self.email.clone(), self.password.clone()),
        })
    }

    /// Apply the service's answer. A granted token is written to `session`
    /// before the form reports success.
    pub fn finish(
        &mut self,
        pending: Pending<Credentials>,
        result: Result<AuthGrant, RemoteError>,
        session: &Session,
    ) -> bool {
        if !self.op.is_current(pending.ticket) {
            debug!(mode = ?self.mode, "Ignoring auth result for a stale form");
            return false;
        }
        let outcome = result.map_err(FlowError::from).and_then(|grant| {
            if let AuthGrant::Token(token) = grant {
                session.sign_in(&token)?;
            }
            info!(mode = ?self.mode, email = %pending.request.email, "Authentication succeeded");
            Ok(AuthSuccess {
                message: self.mode.success_message(),
                redirect: Redirect::delayed(self.mode.redirect_target()),
            })
        });
        self.op.settle(pending.ticket, outcome)
    }

    /// Validate, send and apply in one go.
    pub async fn submit(
        &mut self,
        gateway: &dyn Gateway,
        session: &Session,
    ) -> &OpState<AuthSuccess> {
        if let Some(pending) = self.begin() {
            let result = self.mode.dispatch(gateway, &pending.request).await;
            self.finish(pending, result, session);
        }
        self.op.state()
    }

    /// Drop interest in any outstanding request.
    pub fn teardown(&mut self) {
        self.op.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::route::REDIRECT_DELAY;
    use crate::session::TokenStore;
    use crate::testing::ScriptedGateway;

    /// Store that refuses every write.
    struct ReadOnlyStore;

    impl TokenStore for ReadOnlyStore {
        fn get(&self) -> Option<String> {
            None
        }

        fn set(&self, _token: &str) -> Result<(), StoreError> {
            Err(StoreError("read-only".to_string()))
        }

        fn clear(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_and_redirects_home() {
        let gateway = ScriptedGateway::new().with_login(Ok("T"));
        let session = Session::in_memory();
        let mut form = AuthForm::login().with_credentials("a@b.com", "x");

        let state = form.submit(&gateway, &session).await.clone();

        assert_eq!(session.token().as_deref(), Some("T"));
        let success = state.success().expect("login should succeed");
        assert_eq!(success.message, "Login successful!");
        assert_eq!(success.redirect.to, Route::Home);
        assert_eq!(success.redirect.after, REDIRECT_DELAY);
        assert_eq!(gateway.calls(), vec![(Endpoint::Login, "a@b.com".to_string())]);
    }

    #[tokio::test]
    async fn test_signup_redirects_to_login_without_token() {
        let gateway = ScriptedGateway::new();
        let session = Session::in_memory();
        let mut form = AuthForm::signup().with_credentials("new@b.com", "pw");

        form.submit(&gateway, &session).await;

        assert!(!session.is_authenticated());
        let success = form.state().success().unwrap();
        assert_eq!(success.redirect.to, Route::Login);
        assert_eq!(
            form.message().as_deref(),
            Some("Signup successful! Redirecting to login...")
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_inputs() {
        let gateway = ScriptedGateway::new().with_login(Err("Invalid credentials"));
        let session = Session::in_memory();
        let mut form = AuthForm::login().with_credentials("a@b.com", "wrong");

        form.submit(&gateway, &session).await;

        assert!(!session.is_authenticated());
        assert_eq!(form.message().as_deref(), Some("Invalid credentials"));
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "wrong");
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_locally() {
        let gateway = ScriptedGateway::new();
        let session = Session::in_memory();
        let mut form = AuthForm::login().with_credentials("  ", "");

        form.submit(&gateway, &session).await;

        assert!(gateway.calls().is_empty());
        assert!(form.state().error().unwrap().is_local());
    }

    #[tokio::test]
    async fn test_stale_login_does_not_sign_in() {
        let gateway = ScriptedGateway::new().with_login(Ok("late"));
        let session = Session::in_memory();
        let mut form = AuthForm::login().with_credentials("a@b.com", "x");

        let pending = form.begin().unwrap();
        assert!(form.state().is_in_flight());
        let result = AuthMode::Login.dispatch(&gateway, &pending.request).await;
        form.teardown();

        assert!(!form.finish(pending, result, &session));
        assert!(!session.is_authenticated());
        assert!(form.state().is_idle());
    }

    #[tokio::test]
    async fn test_unpersisted_token_fails_login() {
        let gateway = ScriptedGateway::new().with_login(Ok("T"));
        let session = Session::new(ReadOnlyStore);
        let mut form = AuthForm::login().with_credentials("a@b.com", "x");

        form.submit(&gateway, &session).await;

        assert!(matches!(form.state(), OpState::Failed(FlowError::Store(_))));
        assert!(form.state().success().is_none());
        assert_eq!(
            form.message().as_deref(),
            Some("Session storage error: read-only")
        );
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_signup_rejected_by_service() {
        let gateway = ScriptedGateway::new().with_signup(Err("User already exists"));
        let session = Session::in_memory();
        let mut form = AuthForm::signup().with_credentials("a@b.com", "pw");

        form.submit(&gateway, &session).await;

        assert!(matches!(form.state(), OpState::Failed(FlowError::Remote(_))));
        assert_eq!(form.message().as_deref(), Some("User already exists"));
        assert_eq!(gateway.calls(), vec![(Endpoint::Signup, "a@b.com".to_string())]);
        assert_eq!(form.password, "pw");
    }

    #[tokio::test]
    async fn test_email_sent_as_typed() {
        let gateway = ScriptedGateway::new();
        let session = Session::in_memory();
        let mut form = AuthForm::login().with_credentials(" a@b.com ", "x");

        form.submit(&gateway, &session).await;

        assert_eq!(gateway.calls(), vec![(Endpoint::Login, " a@b.com ".to_string())]);
    }
}
