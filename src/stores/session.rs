use log::{error, warn};
use std::sync::Arc;

use crate::data::{keys, Storage};
use crate::models::{AuthState, AuthUser};

/// Tracks whether an admin session is active.
///
/// Login is a stubbed role toggle, not a credential exchange: it installs a
/// fixed demo identity. The store performs no authorization checks itself;
/// gating admin views on `is_authenticated` is the view layer's job.
pub struct SessionStore {
    user: Option<AuthUser>,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Restores a previously persisted session, if any
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let user = match storage.load(keys::AUTH) {
            Ok(Some(raw)) => match serde_json::from_str::<AuthState>(&raw) {
                Ok(state) if state.is_authenticated => Some(state.user),
                Ok(_) => None,
                Err(err) => {
                    warn!("Stored session is unreadable, ignoring: {}", err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("Failed to read session: {:#}", err);
                None
            }
        };
        Self { user, storage }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Unconditionally establishes the demo admin session and persists it
    pub fn login(&mut self) {
        let user = AuthUser::demo_admin();
        let state = AuthState {
            is_authenticated: true,
            user: user.clone(),
        };
        match serde_json::to_string(&state) {
            Ok(json) => {
                if let Err(err) = self.storage.save(keys::AUTH, &json) {
                    error!("Failed to persist session: {:#}", err);
                }
            }
            Err(err) => error!("Failed to serialize session: {}", err),
        }
        self.user = Some(user);
    }

    /// Clears the session and its persisted record
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(err) = self.storage.remove(keys::AUTH) {
            error!("Failed to clear persisted session: {:#}", err);
        }
    }
}
