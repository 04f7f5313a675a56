// ============================================================================
// USE ORDERS HOOK - Wires store, view state, modal and viewmodel into yew
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::order::{Order, OrderField};
use crate::services::backend::ConsoleBackend;
use crate::services::order_store::{ListLanding, OrderStoreClient};
use crate::state::modal_state::ModalMachine;
use crate::state::notifications::NotificationQueue;
use crate::state::view_state::ViewState;
use crate::stores::OrdersStore;
use crate::utils::pagination::PageSize;
use crate::viewmodels::OrdersViewModel;

#[derive(Clone)]
pub struct UseOrdersHandle {
    pub store: UseStateHandle<OrdersStore>,
    pub view: UseStateHandle<ViewState>,
    pub modal: Rc<RefCell<ModalMachine>>,
    pub filter: UseStateHandle<String>,
    pub on_sort: Callback<OrderField>,
    pub on_page_size: Callback<PageSize>,
    pub on_next_page: Callback<()>,
    pub on_previous_page: Callback<()>,
    pub on_filter: Callback<String>,
    pub open_row: Callback<Order>,
    pub open_new: Callback<()>,
    pub edit_field: Callback<(OrderField, String)>,
    pub cancel: Callback<()>,
    pub submit: Callback<()>,
    pub delete: Callback<()>,
}

#[hook]
pub fn use_orders(notifications: Rc<NotificationQueue>) -> UseOrdersHandle {
    let viewmodel = use_memo((), move |_| {
        let store = Rc::new(OrderStoreClient::new(ConsoleBackend::from_config(&CONFIG)));
        OrdersViewModel::new(store, notifications)
    });
    let store = use_state(OrdersStore::default);
    let view = use_state(|| ViewState::with_page_size(CONFIG.default_page_size()));
    let filter = use_state(String::new);
    let generation = use_state(|| 0u64);
    // Bumped when a landed list turns out stale and must be fetched again
    let refetch = use_state(|| 0u64);
    let refetch_seq = use_mut_ref(|| 0u64);
    // Filter as of now, for tasks that outlive the render that spawned them
    let current_filter = use_mut_ref(String::new);
    let modal = use_mut_ref(ModalMachine::new);
    let rerender = use_force_update();

    // Fetch on mount, on filter change, after every invalidation and on refetch
    {
        let viewmodel = viewmodel.clone();
        let store = store.clone();
        let current_filter = current_filter.clone();
        use_effect_with(
            ((*filter).clone(), *generation, *refetch),
            move |(filter, _, _)| {
                let filter = filter.clone();
                *current_filter.borrow_mut() = filter.clone();

                if viewmodel.store().needs_fetch(&filter) {
                    let mut loading = (*store).clone();
                    loading.loading = true;
                    if let Some(stale) = viewmodel.store().snapshot(&filter) {
                        loading.orders = Some(stale);
                    }
                    store.set(loading);

                    wasm_bindgen_futures::spawn_local(async move {
                        let result = viewmodel.store().list(&filter).await;
                        let landing = viewmodel
                            .store()
                            .landing(&filter, &current_filter.borrow());
                        if landing == ListLanding::Discard {
                            log::debug!("Dropped late orders for filter {:?}", filter);
                            return;
                        }

                        let mut next = OrdersStore {
                            orders: viewmodel.store().snapshot(&filter),
                            loading: landing == ListLanding::ShowAndRefetch,
                            error: None,
                            last_fetch_time: viewmodel
                                .store()
                                .last_fetched_at(&filter)
                                .map(|t| t.timestamp()),
                        };
                        if let Err(e) = result {
                            next.error = Some(e.to_string());
                        }
                        store.set(next);

                        if landing == ListLanding::ShowAndRefetch {
                            let seq = {
                                let mut seq = refetch_seq.borrow_mut();
                                *seq += 1;
                                *seq
                            };
                            refetch.set(seq);
                        }
                    });
                } else if let Some(cached) = viewmodel.store().snapshot(&filter) {
                    // Fresh cache hit, e.g. returning to an earlier filter
                    let fetched_at = viewmodel.store().last_fetched_at(&filter);
                    let showing_it = store
                        .orders
                        .as_ref()
                        .is_some_and(|current| Rc::ptr_eq(current, &cached));
                    if !showing_it {
                        store.set(OrdersStore {
                            orders: Some(cached),
                            loading: false,
                            error: None,
                            last_fetch_time: fetched_at.map(|t| t.timestamp()),
                        });
                    }
                }
                || ()
            },
        );
    }

    let on_sort = {
        let view = view.clone();
        Callback::from(move |field: OrderField| {
            let mut next = *view;
            next.request_sort(field);
            view.set(next);
        })
    };

    let on_page_size = {
        let view = view.clone();
        Callback::from(move |size: PageSize| {
            let mut next = *view;
            next.set_page_size(size);
            view.set(next);
        })
    };

    let on_next_page = {
        let view = view.clone();
        let store = store.clone();
        Callback::from(move |_| {
            let mut next = *view;
            next.next_page(store.rows().len());
            view.set(next);
        })
    };

    let on_previous_page = {
        let view = view.clone();
        Callback::from(move |_| {
            let mut next = *view;
            next.previous_page();
            view.set(next);
        })
    };

    let on_filter = {
        let filter = filter.clone();
        let view = view.clone();
        let current_filter = current_filter.clone();
        Callback::from(move |value: String| {
            let mut next = *view;
            next.set_page(0);
            view.set(next);
            *current_filter.borrow_mut() = value.clone();
            filter.set(value);
        })
    };

    let open_row = {
        let modal = modal.clone();
        let rerender = rerender.clone();
        Callback::from(move |row: Order| {
            if let Err(e) = modal.borrow_mut().open_for_row(&row) {
                log::warn!("⚠️ Cannot open order {}: {}", row.id, e);
            }
            rerender.force_update();
        })
    };

    let open_new = {
        let modal = modal.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            if let Err(e) = modal.borrow_mut().open_for_new() {
                log::warn!("⚠️ Cannot open new order form: {}", e);
            }
            rerender.force_update();
        })
    };

    let edit_field = {
        let modal = modal.clone();
        let rerender = rerender.clone();
        Callback::from(move |(field, value): (OrderField, String)| {
            if let Err(e) = modal.borrow_mut().field_change(field, value) {
                log::debug!("Ignored edit of {}: {}", field, e);
            }
            rerender.force_update();
        })
    };

    let cancel = {
        let modal = modal.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            if let Err(e) = modal.borrow_mut().cancel() {
                log::debug!("Ignored cancel: {}", e);
            }
            rerender.force_update();
        })
    };

    let submit = {
        let viewmodel = viewmodel.clone();
        let modal = modal.clone();
        let generation = generation.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            let prepared = viewmodel.prepare_submit(&modal);
            rerender.force_update();
            if let Ok(submission) = prepared {
                let viewmodel = viewmodel.clone();
                let modal = modal.clone();
                let generation = generation.clone();
                let rerender = rerender.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = viewmodel.complete(&modal, submission).await;
                    generation.set(viewmodel.store().generation());
                    rerender.force_update();
                });
            }
        })
    };

    let delete = {
        let viewmodel = viewmodel.clone();
        let modal = modal.clone();
        let generation = generation.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            let prepared = viewmodel.prepare_delete(&modal);
            rerender.force_update();
            match prepared {
                Ok(submission) => {
                    let viewmodel = viewmodel.clone();
                    let modal = modal.clone();
                    let generation = generation.clone();
                    let rerender = rerender.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let _ = viewmodel.complete(&modal, submission).await;
                        generation.set(viewmodel.store().generation());
                        rerender.force_update();
                    });
                }
                Err(e) => log::warn!("⚠️ Cannot delete: {}", e),
            }
        })
    };

    UseOrdersHandle {
        store,
        view,
        modal,
        filter,
        on_sort,
        on_page_size,
        on_next_page,
        on_previous_page,
        on_filter,
        open_row,
        open_new,
        edit_field,
        cancel,
        submit,
        delete,
    }
}
