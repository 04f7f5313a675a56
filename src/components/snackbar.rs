// ============================================================================
// SNACKBAR COMPONENT - Transient notifications
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::state::notifications::NotificationQueue;

#[derive(Properties, Clone)]
pub struct SnackbarProps {
    pub queue: Rc<NotificationQueue>,
}

impl PartialEq for SnackbarProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.queue, &other.queue)
    }
}

/// Arm one dismiss timer per notification id; ids no longer queued are forgotten
fn schedule_dismissals(queue: &Rc<NotificationQueue>, scheduled: &RefCell<HashSet<u64>>) {
    let items = queue.items();
    scheduled
        .borrow_mut()
        .retain(|id| items.iter().any(|item| item.id == *id));

    for item in items {
        if !scheduled.borrow_mut().insert(item.id) {
            continue;
        }
        let weak = Rc::downgrade(queue);
        Timeout::new(CONFIG.notification_timeout_ms, move || {
            if let Some(queue) = weak.upgrade() {
                queue.dismiss(item.id);
            }
        })
        .forget();
    }
}

#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    let rerender = use_force_update();
    let scheduled = use_mut_ref(HashSet::<u64>::new);

    {
        let queue = props.queue.clone();
        let scheduled = scheduled.clone();
        use_effect_with((), move |_| {
            let weak = Rc::downgrade(&queue);
            let subscription = queue.subscribe(move || {
                if let Some(queue) = weak.upgrade() {
                    schedule_dismissals(&queue, &scheduled);
                }
                rerender.force_update();
            });
            move || queue.unsubscribe(subscription)
        });
    }

    let items = props.queue.items();
    if items.is_empty() {
        return html! {};
    }

    html! {
        <div class="snackbar-stack" role="status" aria-live="polite">
            { for items.into_iter().map(|item| {
                let queue = props.queue.clone();
                let id = item.id;
                let onclick = Callback::from(move |_: MouseEvent| queue.dismiss(id));
                html! {
                    <div class={classes!("snackbar", item.kind.css_class())} key={id}>
                        <span>{item.text}</span>
                        <button type="button" class="btn-close" {onclick}>{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
