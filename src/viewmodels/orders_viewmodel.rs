// ============================================================================
// ORDERS VIEWMODEL - CRUD orchestration
// ============================================================================
// Turns a modal submit/delete into a store call, keeps the modal in
// Submitting until the call settles, and reports the outcome.
// Every failure reaches the notifier; create success stays silent and
// relies on the list refetch.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ModalError, OrderError};
use crate::models::notification::NotificationKind;
use crate::models::order::Order;
use crate::services::order_service::OrderService;
use crate::services::order_store::OrderStoreClient;
use crate::state::modal_state::{ModalAction, ModalMachine, Submission};
use crate::state::notifications::Notifier;
use crate::utils::constants::{NOTIFY_DELETED, NOTIFY_UPDATED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrudOutcome {
    Created(Order),
    Updated(Order),
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrudError {
    #[error(transparent)]
    Modal(#[from] ModalError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

pub struct OrdersViewModel<S> {
    store: Rc<OrderStoreClient<S>>,
    notifier: Rc<dyn Notifier>,
}

impl<S> Clone for OrdersViewModel<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<S: OrderService> OrdersViewModel<S> {
    pub fn new(store: Rc<OrderStoreClient<S>>, notifier: Rc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &Rc<OrderStoreClient<S>> {
        &self.store
    }

    /// Submit the open form (create or update)
    pub async fn submit(&self, modal: &RefCell<ModalMachine>) -> Result<CrudOutcome, CrudError> {
        let submission = self.prepare_submit(modal)?;
        self.complete(modal, submission).await
    }

    /// Delete the order being edited
    pub async fn delete(&self, modal: &RefCell<ModalMachine>) -> Result<CrudOutcome, CrudError> {
        let submission = self.prepare_delete(modal)?;
        self.complete(modal, submission).await
    }

    /// Synchronous half of `submit`: moves the modal into Submitting
    pub fn prepare_submit(&self, modal: &RefCell<ModalMachine>) -> Result<Submission, CrudError> {
        let submission = modal.borrow_mut().begin_submit();
        match submission {
            Ok(submission) => Ok(submission),
            Err(ModalError::Validation(message)) => {
                self.report_failure(ModalAction::Create, &message);
                Err(ModalError::Validation(message).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Synchronous half of `delete`
    pub fn prepare_delete(&self, modal: &RefCell<ModalMachine>) -> Result<Submission, CrudError> {
        Ok(modal.borrow_mut().begin_delete()?)
    }

    /// Run the request and settle the modal
    pub async fn complete(
        &self,
        modal: &RefCell<ModalMachine>,
        submission: Submission,
    ) -> Result<CrudOutcome, CrudError> {
        let action = submission.action();
        let result = self.execute(submission).await;

        match result {
            Ok(outcome) => {
                modal.borrow_mut().settle(Ok(()));
                Ok(outcome)
            }
            Err(e) => {
                let message = e.to_string();
                modal.borrow_mut().settle(Err(message.clone()));
                self.report_failure(action, &message);
                Err(e.into())
            }
        }
    }

    /// Issue the store call for `submission` and announce success
    pub async fn execute(&self, submission: Submission) -> Result<CrudOutcome, OrderError> {
        match submission {
            Submission::Create(new_order) => {
                if new_order.username.trim().is_empty() {
                    return Err(OrderError::Validation("Username is required".to_string()));
                }
                let created = self.store.create(new_order).await?;
                log::info!("✅ Order {} created", created.id);
                Ok(CrudOutcome::Created(created))
            }
            Submission::Update(id, patch) => {
                let updated = self.store.update(&id, patch).await?;
                log::info!("✅ Order {} updated", updated.id);
                self.notifier.notify(NOTIFY_UPDATED, NotificationKind::Info);
                Ok(CrudOutcome::Updated(updated))
            }
            Submission::Delete(id) => {
                self.store.delete(&id).await?;
                log::info!("✅ Order {} deleted", id);
                self.notifier.notify(NOTIFY_DELETED, NotificationKind::Error);
                Ok(CrudOutcome::Deleted)
            }
        }
    }

    fn report_failure(&self, action: ModalAction, message: &str) {
        log::error!("❌ {} failed: {}", action.label(), message);
        self.notifier.notify(
            &format!("{} failed: {}", action.label(), message),
            NotificationKind::Error,
        );
    }
}
