// ============================================================================
// SESSION SERVICE - Login / logout / navigation check over persisted tokens
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::error::StorageError;
use crate::services::session_gate::{GateDecision, SessionGate};
use crate::state::session_state::{SessionState, SessionTokens};
use crate::utils::constants::{
    STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN, STORAGE_KEY_TOKEN_EXPIRES_AT,
};
use crate::utils::storage::SessionStorage;

#[derive(Clone)]
pub struct SessionService {
    storage: Rc<dyn SessionStorage>,
    gate: SessionGate,
}

impl SessionService {
    pub fn new(storage: Rc<dyn SessionStorage>, sign_in_path: &str) -> Self {
        Self {
            storage,
            gate: SessionGate::new(sign_in_path),
        }
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn restore(&self, now: DateTime<Utc>) -> SessionState {
        SessionState::restore(self.storage.as_ref(), now)
    }

    /// Run on every navigation into the console: re-sync with storage, then decide
    pub fn check_navigation(&self, session: &mut SessionState, now: DateTime<Utc>) -> GateDecision {
        session.refresh(self.storage.as_ref(), now);
        self.gate.check(session, now)
    }

    pub fn login(&self, tokens: SessionTokens) -> Result<SessionState, StorageError> {
        tokens.persist(self.storage.as_ref())?;
        log::info!("✅ Session established");
        Ok(SessionState {
            authenticated: true,
            tokens,
        })
    }

    /// Blank both tokens (keys stay in storage) and send the user to sign-in
    pub fn logout(&self) -> Result<(SessionState, GateDecision), StorageError> {
        self.storage.set(STORAGE_KEY_ACCESS_TOKEN, "")?;
        self.storage.set(STORAGE_KEY_REFRESH_TOKEN, "")?;
        self.storage.remove(STORAGE_KEY_TOKEN_EXPIRES_AT)?;
        log::info!("👋 Logout");
        Ok((SessionState::default(), self.gate.redirect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemorySessionStorage;

    fn service() -> (Rc<MemorySessionStorage>, SessionService) {
        let storage = Rc::new(MemorySessionStorage::new());
        let service = SessionService::new(storage.clone(), "/sign-in");
        (storage, service)
    }

    #[test]
    fn login_then_navigation_is_allowed() {
        let (_storage, service) = service();
        let mut session = service.login(SessionTokens::new("a", "b")).unwrap();
        assert_eq!(
            service.check_navigation(&mut session, Utc::now()),
            GateDecision::Allow
        );
        assert_eq!(service.restore(Utc::now()).tokens, SessionTokens::new("a", "b"));
    }

    #[test]
    fn logout_blanks_tokens_but_keeps_keys() {
        let (storage, service) = service();
        service.login(SessionTokens::new("a", "b")).unwrap();

        let (mut session, decision) = service.logout().unwrap();
        assert_eq!(decision, GateDecision::Redirect { to: "/sign-in".into() });
        assert_eq!(storage.get(STORAGE_KEY_ACCESS_TOKEN).as_deref(), Some(""));
        assert_eq!(storage.get(STORAGE_KEY_REFRESH_TOKEN).as_deref(), Some(""));
        assert_eq!(
            service.check_navigation(&mut session, Utc::now()),
            GateDecision::Redirect { to: "/sign-in".into() }
        );
    }

    #[test]
    fn cleared_storage_revokes_cached_login() {
        let (storage, service) = service();
        let mut session = service.login(SessionTokens::new("a", "b")).unwrap();

        storage.set(STORAGE_KEY_REFRESH_TOKEN, "").unwrap();
        assert!(matches!(
            service.check_navigation(&mut session, Utc::now()),
            GateDecision::Redirect { .. }
        ));
        assert!(!session.authenticated);
    }
}
