// ============================================================================
// SESSION CONTEXT - Shares the single SessionState across components
// ============================================================================

use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::StorageError;
use crate::services::session_gate::GateDecision;
use crate::services::session_service::SessionService;
use crate::state::session_state::{SessionState, SessionTokens};
use crate::utils::storage::BrowserSessionStorage;

#[derive(Clone)]
pub struct SessionHandle {
    pub state: UseStateHandle<SessionState>,
    service: SessionService,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

impl SessionHandle {
    /// Gate decision for the current state, without touching storage
    pub fn decision(&self) -> GateDecision {
        self.service.gate().check(&self.state, Utc::now())
    }

    /// Navigation check: re-reads storage, updates the shared state if it drifted
    pub fn check_navigation(&self) -> GateDecision {
        let mut session = (*self.state).clone();
        let decision = self.service.check_navigation(&mut session, Utc::now());
        if session != *self.state {
            self.state.set(session);
        }
        decision
    }

    pub fn login(&self, tokens: SessionTokens) -> Result<(), StorageError> {
        let session = self.service.login(tokens)?;
        self.state.set(session);
        Ok(())
    }

    pub fn logout(&self) -> Result<GateDecision, StorageError> {
        let (session, decision) = self.service.logout()?;
        self.state.set(session);
        Ok(decision)
    }
}

#[hook]
pub fn use_session_handle() -> SessionHandle {
    let service = use_memo((), |_| {
        SessionService::new(Rc::new(BrowserSessionStorage), &CONFIG.sign_in_path)
    });
    let state = {
        let service = service.clone();
        use_state(move || service.restore(Utc::now()))
    };

    SessionHandle {
        state,
        service: (*service).clone(),
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session = use_session_handle();

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
