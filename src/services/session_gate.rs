use chrono::{DateTime, Utc};

use crate::state::session_state::SessionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect { to: String },
}

/// Route guard for the console
#[derive(Debug, Clone)]
pub struct SessionGate {
    sign_in_path: String,
}

impl SessionGate {
    pub fn new(sign_in_path: impl Into<String>) -> Self {
        Self {
            sign_in_path: sign_in_path.into(),
        }
    }

    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    pub fn redirect(&self) -> GateDecision {
        GateDecision::Redirect {
            to: self.sign_in_path.clone(),
        }
    }

    /// Allow iff authenticated in memory, or both persisted tokens are
    /// non-empty and not past their expiry
    pub fn check(&self, session: &SessionState, now: DateTime<Utc>) -> GateDecision {
        if session.authenticated || session.tokens.is_usable(now) {
            GateDecision::Allow
        } else {
            log::info!("🚫 Session gate: redirecting to {}", self.sign_in_path);
            self.redirect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session_state::SessionTokens;
    use chrono::Duration;

    fn session(authenticated: bool, access: &str, refresh: &str) -> SessionState {
        SessionState {
            authenticated,
            tokens: SessionTokens::new(access, refresh),
        }
    }

    #[test]
    fn truth_table() {
        let gate = SessionGate::new("/sign-in");
        let now = Utc::now();
        let redirect = GateDecision::Redirect { to: "/sign-in".into() };

        assert_eq!(gate.check(&session(false, "", "x"), now), redirect);
        assert_eq!(gate.check(&session(false, "a", ""), now), redirect);
        assert_eq!(gate.check(&session(false, "", ""), now), redirect);
        assert_eq!(gate.check(&session(false, "a", "b"), now), GateDecision::Allow);
        assert_eq!(gate.check(&session(true, "", ""), now), GateDecision::Allow);
        assert_eq!(gate.check(&session(true, "a", "b"), now), GateDecision::Allow);
    }

    #[test]
    fn expired_tokens_are_redirected() {
        let gate = SessionGate::new("/login");
        let now = Utc::now();
        let state = SessionState {
            authenticated: false,
            tokens: SessionTokens::new("a", "b").expiring_at(now - Duration::seconds(1)),
        };
        assert_eq!(
            gate.check(&state, now),
            GateDecision::Redirect { to: "/login".into() }
        );
    }
}
