//! Session service on top of the shared cache store
//!
//! Sessions live under `<prefix><id>` with one fixed TTL. They are never
//! persisted anywhere else: once the entry expires or is deleted the session is
//! gone, and a new `init` always produces a new id.

use crate::directory::PersonDirectory;
use crate::errors::SessionError;
use crate::session::Session;
use cache_system::{debug_log, CacheParams, CacheStore, DeleteOutcome, ExtendOutcome, Ttl};
use config::SessionConfig;
use std::fmt::Debug;
use std::sync::Arc;
use uuid::Uuid;

/// Creates, reads, renews and ends sessions
#[derive(Clone)]
pub struct SessionService {
    params: CacheParams,
    people: Arc<dyn PersonDirectory>,
}

impl Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("prefix", &self.params.prefix)
            .field("ttl", &self.params.ttl)
            .finish()
    }
}

impl SessionService {
    pub fn new(store: CacheStore, people: Arc<dyn PersonDirectory>, config: &SessionConfig) -> Self {
        Self {
            params: CacheParams::new(store, Ttl::from(config.ttl_duration()), &config.key_prefix),
            people,
        }
    }

    /// Start a new session for `email`.
    ///
    /// The business unit is looked up once, here. A failed or empty lookup
    /// leaves it blank rather than failing the session.
    pub async fn init(&self, email: &str) -> Result<Session, SessionError> {
        let id = Uuid::new_v4().simple().to_string();
        let business_unit_id = self.resolve_business_unit(email).await;
        let session = Session::new(id, email, business_unit_id);

        self.params.set(&session.id, &session).into_result()?;
        debug_log!("session '{}' started for {}", session.id, session.email);

        Ok(session)
    }

    pub async fn get(&self, id: &str) -> Option<Session> {
        self.params.get(id)
    }

    /// End a session. Ending one that is already gone is not an error.
    pub async fn expire(&self, id: &str) {
        match self.params.delete(id) {
            DeleteOutcome::Deleted => {
                debug_log!("session '{}' expired", id);
            }
            DeleteOutcome::NotFound => {}
            DeleteOutcome::Failed(err) => {
                tracing::warn!(session_id = %id, error = %err, "Failed to expire session");
            }
        }
    }

    /// Restart the session's full TTL from now. Expired sessions stay expired.
    pub async fn reset_expiry(&self, id: &str) {
        match self.params.renew(id) {
            ExtendOutcome::Extended => {
                debug_log!("session '{}' renewed", id);
            }
            ExtendOutcome::NotFound => {
                debug_log!("session '{}' not renewed, already gone", id);
            }
            ExtendOutcome::Failed(err) => {
                tracing::warn!(session_id = %id, error = %err, "Failed to renew session");
            }
        }
    }

    /// Store key a session id maps to
    pub fn key(&self, id: &str) -> String {
        self.params.key(id)
    }

    async fn resolve_business_unit(&self, email: &str) -> String {
        match self.people.find_by_email(email).await {
            Ok(Some(person)) => person.business_unit_id.unwrap_or_default(),
            Ok(None) => String::new(),
            Err(err) => {
                tracing::warn!(email = %email, error = %err, "Person lookup failed, session has no business unit");
                String::new()
            }
        }
    }
}
