//! # Session Store
//!
//! Single source of truth for "who is logged in."
//!
//! Holds the current identity and bearer credential behind a cloneable
//! handle and persists both to a JSON file so a restart resumes the session.
//! Every mutator saves after mutating (an explicit step, not hidden
//! persistence middleware); [`SessionStore::load`] rehydrates at startup and
//! falls back to the signed-out state when the file is missing or unreadable.
//!
//! Ownership: this store is the only component that changes session state.
//! The API gateway reads the credential from an injected handle and calls
//! [`SessionStore::reset`] on a 401; everything else only reads.
//!
//! No network calls originate here; it is pure state plus persistence.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::dto::auth::UserInfo;

/// Persisted session record: `{user, credential}`.
///
/// `is_authenticated` is intentionally absent from the struct: it is derived
/// on every read so the two fields can never desync from the flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub credential: Option<String>,
}

impl SessionState {
    /// Authenticated iff both identity and credential are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.credential.is_some()
    }
}

/// Cloneable handle to the process-wide session.
///
/// Clones share one underlying state. The handle is injected into the API
/// client and the app at construction time; there is no global session.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    path: Arc<PathBuf>,
}

impl SessionStore {
    /// Rehydrate the session from `path`.
    ///
    /// A missing file is the normal first-run case and yields the signed-out
    /// state; an unreadable or corrupt file is logged and treated the same.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<SessionState>(&content) {
                Ok(state) => {
                    tracing::info!(
                        path = %path.display(),
                        authenticated = state.is_authenticated(),
                        "Session rehydrated"
                    );
                    state
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Session file corrupt, starting signed out");
                    SessionState::default()
                }
            },
            Err(_) => SessionState::default(),
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            path: Arc::new(path),
        }
    }

    /// Current identity, if any.
    pub fn current_user(&self) -> Option<UserInfo> {
        self.state.read().user.clone()
    }

    /// Current bearer credential, if any. Opaque; never interpreted.
    pub fn credential(&self) -> Option<String> {
        self.state.read().credential.clone()
    }

    /// Derived from the two fields, never stored independently.
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Copy of the full state, taken once per frame by the renderer so
    /// every widget draws against the same session.
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Install identity and credential together after a successful
    /// login/register exchange.
    pub fn set_auth(&self, user: UserInfo, credential: String) {
        let state = {
            let mut guard = self.state.write();
            guard.user = Some(user);
            guard.credential = Some(credential);
            guard.clone()
        };
        tracing::info!(user_id = state.user.as_ref().map(|u| u.id), "Session established");
        self.persist(&state);
    }

    /// Refresh the identity alone, keeping the credential untouched.
    /// `None` drops the identity (turning the session unauthenticated)
    /// without purging the stored credential.
    pub fn set_user(&self, user: Option<UserInfo>) {
        let state = {
            let mut guard = self.state.write();
            guard.user = user;
            guard.clone()
        };
        self.persist(&state);
    }

    /// Clear identity and credential, in memory and on disk.
    ///
    /// Called on logout and by the gateway on any 401.
    pub fn reset(&self) {
        let state = {
            let mut guard = self.state.write();
            *guard = SessionState::default();
            guard.clone()
        };
        tracing::info!("Session cleared");
        self.persist(&state);
    }

    /// Save-after-mutate. A failed write keeps the in-memory state valid, so
    /// it is logged rather than propagated.
    fn persist(&self, state: &SessionState) {
        if let Err(e) = self.write_file(state) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session");
        }
    }

    fn write_file(&self, state: &SessionState) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(self.path.as_ref(), content)?;
        Ok(())
    }
}
