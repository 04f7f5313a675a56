// ============================================================================
// NOTIFICATIONS - Snackbar queue with subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::notification::{Notification, NotificationKind};

/// Sink for user-visible feedback
pub trait Notifier {
    fn notify(&self, text: &str, kind: NotificationKind);
}

type Subscriber = Rc<dyn Fn()>;

/// Pending notifications; the snackbar subscribes and re-renders on change
/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct NotificationQueue {
    items: RefCell<Vec<Notification>>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

impl NotificationQueue {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn dismiss(&self, id: u64) {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|n| n.id != id);
            before != items.len()
        };
        if removed {
            self.emit();
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        let callback: Subscriber = Rc::new(callback);
        self.subscribers.borrow_mut().push((id, callback));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn emit(&self) {
        // Callbacks may (un)subscribe or dismiss, so run them on a copy
        let callbacks: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            (*callback)();
        }
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, text: &str, kind: NotificationKind) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.items.borrow_mut().push(Notification {
            id,
            text: text.to_string(),
            kind,
        });
        self.emit();
    }
}
