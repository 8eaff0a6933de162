//! Session token storage.
//!
//! A [`Session`] is a cheap, clonable handle over a [`TokenStore`]. It is
//! passed explicitly to the gateway and the route guard instead of being
//! looked up from global state.

use crate::error::StoreError;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Key under which key-value backends keep the token.
pub const TOKEN_KEY: &str = "token";

/// Backend that persists the opaque session token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token. Read failures count as "no token".
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.write() = None;
        Ok(())
    }
}

/// Handle to the single process-wide session.
///
/// Presence of a token means "authenticated" for routing purposes only; the
/// token is never inspected, refreshed or expired client-side.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Wrap a token store.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap an already shared token store.
    pub fn from_arc(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|t| !t.is_empty())
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    /// Store a freshly issued token.
    pub fn sign_in(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(token)?;
        debug!("Session token stored");
        Ok(())
    }

    /// Forget the token.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.store.clear()?;
        debug!("Session token cleared");
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
