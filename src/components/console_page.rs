// ============================================================================
// CONSOLE PAGE - Order list, filter, modal and snackbar
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::AppRoute;
use crate::components::order_modal::OrderModal;
use crate::components::orders_table::OrdersTable;
use crate::components::snackbar::Snackbar;
use crate::hooks::{use_orders, SessionHandle};
use crate::services::session_gate::GateDecision;
use crate::state::notifications::NotificationQueue;

#[derive(Properties, PartialEq)]
pub struct ConsolePageProps {
    pub on_navigate: Callback<AppRoute>,
}

#[function_component(ConsolePage)]
pub fn console_page(props: &ConsolePageProps) -> Html {
    let session = use_context::<SessionHandle>();
    let notifications = use_memo((), |_| NotificationQueue::new());
    let orders = use_orders((*notifications).clone());

    let on_logout = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(session) = session.as_ref() else {
                log::error!("❌ Session context missing");
                return;
            };
            match session.logout() {
                Ok(GateDecision::Redirect { to }) => {
                    log::debug!("Redirecting to {}", to);
                    on_navigate.emit(AppRoute::SignIn);
                }
                Ok(GateDecision::Allow) => on_navigate.emit(AppRoute::SignIn),
                Err(e) => log::error!("❌ Sign out failed: {}", e),
            }
        })
    };

    let on_filter_input = {
        let on_filter = orders.on_filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_filter.emit(input.value());
            }
        })
    };

    let on_add = {
        let open_new = orders.open_new.clone();
        Callback::from(move |_: MouseEvent| open_new.emit(()))
    };

    let store = &*orders.store;
    let body = if store.is_initial_load() {
        html! { <p class="loading">{"Loading..."}</p> }
    } else {
        let page = orders.view.page_of(store.rows());
        html! {
            <OrdersTable
                {page}
                view={*orders.view}
                on_sort={orders.on_sort.clone()}
                on_row_click={orders.open_row.clone()}
                on_page_size={orders.on_page_size.clone()}
                on_next_page={orders.on_next_page.clone()}
                on_previous_page={orders.on_previous_page.clone()}
            />
        }
    };

    let modal = orders.modal.borrow().clone();

    html! {
        <div class="console-page">
            <header class="console-header">
                <h1>{"Home"}</h1>
                <button type="button" class="btn-secondary" onclick={on_logout}>{"Log out"}</button>
            </header>

            <div class="console-toolbar">
                <input
                    type="search"
                    class="filter-input"
                    placeholder="Filter orders"
                    value={(*orders.filter).clone()}
                    oninput={on_filter_input}
                />
                if store.loading && !store.is_initial_load() {
                    <span class="refreshing">{"Refreshing…"}</span>
                }
            </div>

            if let Some(error) = store.error.as_ref() {
                <p class="load-error">{format!("Could not load orders: {}", error)}</p>
            }

            { body }

            <button type="button" class="btn-primary" onclick={on_add}>{"Add new orders"}</button>

            <OrderModal
                {modal}
                on_field={orders.edit_field.clone()}
                on_cancel={orders.cancel.clone()}
                on_submit={orders.submit.clone()}
                on_delete={orders.delete.clone()}
            />

            <Snackbar queue={(*notifications).clone()} />
        </div>
    }
}
