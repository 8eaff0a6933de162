//! Session token kept in the browser's localStorage

use docqa_core::{StoreError, TokenStore, TOKEN_KEY};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

/// [`TokenStore`] over `localStorage["token"]`.
///
/// The token is stored as the raw string so other tabs and tools see the
/// same value. Every write is mirrored into a signal for the views.
#[derive(Clone, Copy)]
pub struct LocalStorageTokenStore {
    current: RwSignal<Option<String>>,
}

impl LocalStorageTokenStore {
    /// Read whatever token a previous visit left behind.
    pub fn load() -> Self {
        let token = LocalStorage::raw()
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty());
        Self {
            current: RwSignal::new(token),
        }
    }

    /// Signal that changes whenever the token is written or removed.
    pub fn signal(&self) -> RwSignal<Option<String>> {
        self.current
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        self.current.get_untracked()
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(TOKEN_KEY, token)
            .map_err(|e| StoreError(format!("{:?}", e)))?;
        self.current.set(Some(token.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        LocalStorage::delete(TOKEN_KEY);
        self.current.set(None);
        Ok(())
    }
}
