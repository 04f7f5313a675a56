// ============================================================================
// APP COMPONENT - Session provider and gated route switch
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::app::AppRoute;
use crate::components::console_page::ConsolePage;
use crate::components::sign_in::SignInPage;
use crate::hooks::{SessionContextProvider, SessionHandle};
use crate::services::session_gate::GateDecision;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <Router />
        </SessionContextProvider>
    }
}

#[function_component(Router)]
fn router() -> Html {
    let session = use_context::<SessionHandle>();
    let route = use_state(AppRoute::current);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().and_then(|window| {
                let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(
                    move |_: web_sys::PopStateEvent| route.set(AppRoute::current()),
                );
                window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                    .map_err(|e| log::error!("❌ popstate listener: {:?}", e))
                    .ok()
                    .map(|_| (window, closure))
            });
            move || {
                if let Some((window, closure)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: AppRoute| {
            if let Err(e) = next.push() {
                log::error!("❌ Navigation to {} failed: {:?}", next.path(), e);
            }
            route.set(next);
        })
    };

    // Every navigation into the console passes the gate
    {
        let session = session.clone();
        let navigate = navigate.clone();
        use_effect_with(*route, move |route| {
            if *route == AppRoute::Console {
                if let Some(session) = session.as_ref() {
                    if let GateDecision::Redirect { to } = session.check_navigation() {
                        log::info!("🔒 Session required, redirecting to {}", to);
                        navigate.emit(AppRoute::SignIn);
                    }
                }
            }
            || ()
        });
    }

    let allowed = session
        .as_ref()
        .map(|s| s.decision() == GateDecision::Allow)
        .unwrap_or(false);

    match *route {
        AppRoute::SignIn => html! { <SignInPage on_navigate={navigate} /> },
        AppRoute::Console if allowed => html! { <ConsolePage on_navigate={navigate} /> },
        AppRoute::Console => html! { <p class="loading">{"Redirecting..."}</p> },
    }
}
