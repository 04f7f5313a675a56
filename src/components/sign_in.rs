// ============================================================================
// SIGN IN PAGE - Credentials form feeding the session
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::AppRoute;
use crate::config::{BackendKind, CONFIG};
use crate::error::AuthError;
use crate::hooks::SessionHandle;
use crate::services::api_client::ApiClient;
use crate::state::session_state::SessionTokens;

const DEMO_SESSION_HOURS: i64 = 8;

/// Local tokens for the in-memory backend
fn demo_tokens(username: &str, now: DateTime<Utc>) -> SessionTokens {
    SessionTokens::new(
        format!("demo-access-{}", username),
        format!("demo-refresh-{}", username),
    )
    .expiring_at(now + Duration::hours(DEMO_SESSION_HOURS))
}

async fn obtain_tokens(username: &str, password: &str) -> Result<SessionTokens, AuthError> {
    match CONFIG.backend {
        BackendKind::Memory => Ok(demo_tokens(username, Utc::now())),
        BackendKind::Http => {
            let response = ApiClient::new().sign_in(username, password).await?;
            Ok(response.into())
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SignInPageProps {
    pub on_navigate: Callback<AppRoute>,
}

#[function_component(SignInPage)]
pub fn sign_in_page(props: &SignInPageProps) -> Html {
    let session = use_context::<SessionHandle>();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let pending = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let pending = pending.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *pending {
                return;
            }

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let username = username_input.value();
            let password = password_input.value();

            if username.trim().is_empty() || password.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            let Some(session) = session.clone() else {
                log::error!("❌ Session context missing");
                return;
            };

            pending.set(true);
            error.set(None);
            let error = error.clone();
            let pending = pending.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match obtain_tokens(username.trim(), &password).await {
                    Ok(tokens) => session.login(tokens).map_err(AuthError::from),
                    Err(e) => Err(e),
                };
                pending.set(false);
                match outcome {
                    Ok(()) => {
                        log::info!("✅ Signed in as {}", username.trim());
                        on_navigate.emit(AppRoute::Console);
                    }
                    Err(e) => {
                        log::warn!("⚠️ Sign in failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="sign-in-page">
            <form class="sign-in-form" onsubmit={on_submit}>
                <h1>{"Sign in"}</h1>
                <label class="form-group">
                    <span>{"Username"}</span>
                    <input ref={username_ref} type="text" autocomplete="username" required=true />
                </label>
                <label class="form-group">
                    <span>{"Password"}</span>
                    <input ref={password_ref} type="password" autocomplete="current-password" required=true />
                </label>
                if let Some(message) = (*error).as_ref() {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn-primary" disabled={*pending}>
                    { if *pending { "Signing in…" } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tokens_are_usable_until_they_expire() {
        let now = Utc::now();
        let tokens = demo_tokens("ana", now);

        assert!(tokens.is_usable(now));
        assert!(tokens.is_usable(now + Duration::hours(DEMO_SESSION_HOURS - 1)));
        assert!(!tokens.is_usable(now + Duration::hours(DEMO_SESSION_HOURS + 1)));
    }
}
