// ============================================================================
// MODAL STATE - Row selection and the edit/create form
// ============================================================================
//
//   Closed --open_for_row--> Editing --begin_submit/begin_delete--> Submitting
//   Closed --open_for_new--> Creating --begin_submit-------------> Submitting
//   Submitting --settle(Ok)--> Closed
//   Submitting --settle(Err)--> prior Editing/Creating (with error)
//
// Submitting rejects all input until the request settles.
// ============================================================================

use crate::error::ModalError;
use crate::models::order::{NewOrder, Order, OrderDraft, OrderField, OrderId, OrderPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Create,
    Update,
    Delete,
}

impl ModalAction {
    pub fn label(&self) -> &'static str {
        match self {
            ModalAction::Create => "Create",
            ModalAction::Update => "Update",
            ModalAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Editing {
        draft: Order,
        error: Option<String>,
    },
    Creating {
        draft: OrderDraft,
        error: Option<String>,
    },
    Submitting {
        action: ModalAction,
        prior: Box<ModalState>,
    },
}

/// The request a submit/delete turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewOrder),
    Update(OrderId, OrderPatch),
    Delete(OrderId),
}

impl Submission {
    pub fn action(&self) -> ModalAction {
        match self {
            Submission::Create(_) => ModalAction::Create,
            Submission::Update(..) => ModalAction::Update,
            Submission::Delete(_) => ModalAction::Delete,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalMachine {
    state: ModalState,
}

impl ModalMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ModalState::Submitting { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ModalState::Editing { error, .. } | ModalState::Creating { error, .. } => {
                error.as_deref()
            }
            _ => None,
        }
    }

    /// An existing order is open (possibly mid-submit)
    pub fn is_editing(&self) -> bool {
        matches!(self.current_form(), Some(ModalState::Editing { .. }))
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Order"
        } else {
            "Add New Order"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Order"
        } else {
            "Add Order"
        }
    }

    /// The form shown, looking through a pending submission
    fn current_form(&self) -> Option<&ModalState> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::Submitting { prior, .. } => Some(prior.as_ref()),
            other => Some(other),
        }
    }

    /// Value of `field` in the open draft, for rendering
    pub fn field_value(&self, field: OrderField) -> String {
        match self.current_form() {
            Some(ModalState::Editing { draft, .. }) => match field {
                OrderField::Id => draft.id.to_string(),
                OrderField::Username => draft.username.clone(),
                OrderField::Status => draft.status.clone(),
                OrderField::CreatedAt => draft.created_at.clone(),
            },
            Some(ModalState::Creating { draft, .. }) => match field {
                OrderField::Username => draft.username.clone(),
                OrderField::Id | OrderField::Status | OrderField::CreatedAt => String::new(),
            },
            _ => String::new(),
        }
    }

    pub fn is_read_only(&self, field: OrderField) -> bool {
        match self.current_form() {
            Some(ModalState::Editing { .. }) => {
                matches!(field, OrderField::Id | OrderField::CreatedAt)
            }
            Some(ModalState::Creating { .. }) => field != OrderField::Username,
            _ => true,
        }
    }

    fn ensure_accepts_input(&self) -> Result<(), ModalError> {
        match self.state {
            ModalState::Closed => Err(ModalError::NotOpen),
            ModalState::Submitting { .. } => Err(ModalError::Busy),
            _ => Ok(()),
        }
    }

    fn warn_if_replacing(&self) {
        if matches!(self.state, ModalState::Editing { .. } | ModalState::Creating { .. }) {
            log::warn!("⚠️ Replacing an open draft without confirmation");
        }
    }

    pub fn open_for_row(&mut self, row: &Order) -> Result<(), ModalError> {
        if self.is_submitting() {
            return Err(ModalError::Busy);
        }
        self.warn_if_replacing();
        self.state = ModalState::Editing {
            draft: row.clone(),
            error: None,
        };
        Ok(())
    }

    pub fn open_for_new(&mut self) -> Result<(), ModalError> {
        if self.is_submitting() {
            return Err(ModalError::Busy);
        }
        self.warn_if_replacing();
        self.state = ModalState::Creating {
            draft: OrderDraft::default(),
            error: None,
        };
        Ok(())
    }

    /// Local draft edit only
    pub fn field_change(&mut self, field: OrderField, value: String) -> Result<(), ModalError> {
        self.ensure_accepts_input()?;
        if self.is_read_only(field) {
            return Err(ModalError::ReadOnlyField(field));
        }

        match &mut self.state {
            ModalState::Editing { draft, .. } => match field {
                OrderField::Username => draft.username = value,
                OrderField::Status => draft.status = value,
                OrderField::Id | OrderField::CreatedAt => {}
            },
            ModalState::Creating { draft, .. } => {
                if field == OrderField::Username {
                    draft.username = value;
                }
            }
            ModalState::Closed | ModalState::Submitting { .. } => {}
        }
        Ok(())
    }

    /// Discard the draft
    pub fn cancel(&mut self) -> Result<(), ModalError> {
        self.ensure_accepts_input()?;
        self.state = ModalState::Closed;
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<Submission, ModalError> {
        self.ensure_accepts_input()?;

        let submission = match &mut self.state {
            ModalState::Editing { draft, .. } => {
                Submission::Update(draft.id.clone(), draft.to_patch())
            }
            ModalState::Creating { draft, error } => {
                if draft.username.trim().is_empty() {
                    let message = "Username is required".to_string();
                    *error = Some(message.clone());
                    return Err(ModalError::Validation(message));
                }
                Submission::Create(NewOrder {
                    username: draft.username.clone(),
                })
            }
            ModalState::Closed | ModalState::Submitting { .. } => return Err(ModalError::NotOpen),
        };

        self.enter_submitting(submission.action());
        Ok(submission)
    }

    pub fn begin_delete(&mut self) -> Result<Submission, ModalError> {
        self.ensure_accepts_input()?;
        let id = match &self.state {
            ModalState::Editing { draft, .. } => draft.id.clone(),
            _ => return Err(ModalError::NotDeletable),
        };
        self.enter_submitting(ModalAction::Delete);
        Ok(Submission::Delete(id))
    }

    fn enter_submitting(&mut self, action: ModalAction) {
        let prior = std::mem::take(&mut self.state);
        self.state = ModalState::Submitting {
            action,
            prior: Box::new(clear_error(prior)),
        };
    }

    /// Close on success; on failure reopen the prior form with the error attached
    pub fn settle(&mut self, outcome: Result<(), String>) {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, outcome) {
            (ModalState::Submitting { .. }, Ok(())) => ModalState::Closed,
            (ModalState::Submitting { prior, .. }, Err(message)) => match *prior {
                ModalState::Editing { draft, .. } => ModalState::Editing {
                    draft,
                    error: Some(message),
                },
                ModalState::Creating { draft, .. } => ModalState::Creating {
                    draft,
                    error: Some(message),
                },
                other => other,
            },
            (other, _) => {
                log::warn!("⚠️ settle() called while not submitting");
                other
            }
        };
    }
}

fn clear_error(state: ModalState) -> ModalState {
    match state {
        ModalState::Editing { draft, .. } => ModalState::Editing { draft, error: None },
        ModalState::Creating { draft, .. } => ModalState::Creating { draft, error: None },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Order {
        Order::new(1, "a", "open", "2024-01-01")
    }

    #[test]
    fn open_row_edits_a_copy() {
        let original = row();
        let mut modal = ModalMachine::new();
        modal.open_for_row(&original).unwrap();
        modal
            .field_change(OrderField::Username, "changed".into())
            .unwrap();

        assert_eq!(modal.field_value(OrderField::Username), "changed");
        assert_eq!(original.username, "a");
        assert_eq!(modal.title(), "Edit Order");
        assert_eq!(modal.submit_label(), "Update Order");
    }

    #[test]
    fn id_and_created_at_are_read_only_when_editing() {
        let mut modal = ModalMachine::new();
        modal.open_for_row(&row()).unwrap();
        assert_eq!(
            modal.field_change(OrderField::Id, "9".into()),
            Err(ModalError::ReadOnlyField(OrderField::Id))
        );
        assert_eq!(
            modal.field_change(OrderField::CreatedAt, "x".into()),
            Err(ModalError::ReadOnlyField(OrderField::CreatedAt))
        );
        assert_eq!(modal.field_value(OrderField::Id), "1");
    }

    #[test]
    fn creating_leaves_id_to_the_server() {
        let mut modal = ModalMachine::new();
        modal.open_for_new().unwrap();
        assert_eq!(modal.title(), "Add New Order");
        assert!(modal.field_change(OrderField::Id, "5".into()).is_err());
        modal.field_change(OrderField::Username, "bob".into()).unwrap();

        assert_eq!(
            modal.begin_submit(),
            Ok(Submission::Create(NewOrder { username: "bob".into() }))
        );
    }

    #[test]
    fn creating_only_accepts_the_username() {
        let mut modal = ModalMachine::new();
        modal.open_for_new().unwrap();
        modal.field_change(OrderField::Username, "bob".into()).unwrap();

        assert_eq!(
            modal.field_change(OrderField::Status, "closed".into()),
            Err(ModalError::ReadOnlyField(OrderField::Status))
        );
        assert_eq!(
            modal.field_change(OrderField::CreatedAt, "2024-02-02".into()),
            Err(ModalError::ReadOnlyField(OrderField::CreatedAt))
        );
        assert!(modal.is_read_only(OrderField::Status));
        assert_eq!(modal.field_value(OrderField::Status), "");
        assert_eq!(
            modal.begin_submit(),
            Ok(Submission::Create(NewOrder { username: "bob".into() }))
        );
    }

    #[test]
    fn empty_username_blocks_create() {
        let mut modal = ModalMachine::new();
        modal.open_for_new().unwrap();
        assert!(matches!(modal.begin_submit(), Err(ModalError::Validation(_))));
        assert!(matches!(modal.state(), ModalState::Creating { .. }));
        assert_eq!(modal.error(), Some("Username is required"));
    }

    #[test]
    fn cancel_returns_to_closed_from_any_open_state() {
        let mut modal = ModalMachine::new();
        modal.open_for_row(&row()).unwrap();
        modal.cancel().unwrap();
        assert_eq!(modal.state(), &ModalState::Closed);

        modal.open_for_new().unwrap();
        modal.cancel().unwrap();
        assert_eq!(modal.state(), &ModalState::Closed);

        assert_eq!(modal.cancel(), Err(ModalError::NotOpen));
    }

    #[test]
    fn opening_again_replaces_the_draft() {
        let mut modal = ModalMachine::new();
        modal.open_for_row(&row()).unwrap();
        modal.field_change(OrderField::Status, "closed".into()).unwrap();
        modal.open_for_new().unwrap();
        assert!(matches!(modal.state(), ModalState::Creating { .. }));
        assert_eq!(modal.field_value(OrderField::Status), "");
    }

    #[test]
    fn submitting_rejects_input_until_settled() {
        let mut modal = ModalMachine::new();
        modal.open_for_row(&row()).unwrap();
        let submission = modal.begin_submit().unwrap();
        assert_eq!(submission, Submission::Update(OrderId::Number(1), row().to_patch()));

        assert_eq!(modal.cancel(), Err(ModalError::Busy));
        assert_eq!(modal.open_for_new(), Err(ModalError::Busy));
        assert_eq!(
            modal.field_change(OrderField::Status, "x".into()),
            Err(ModalError::Busy)
        );
        assert_eq!(modal.begin_delete(), Err(ModalError::Busy));

        modal.settle(Ok(()));
        assert_eq!(modal.state(), &ModalState::Closed);
    }

    #[test]
    fn failed_submission_reopens_with_error() {
        let mut modal = ModalMachine::new();
        modal.open_for_row(&row()).unwrap();
        assert_eq!(modal.begin_delete(), Ok(Submission::Delete(OrderId::Number(1))));

        modal.settle(Err("Order 1 not found".into()));
        assert!(matches!(modal.state(), ModalState::Editing { .. }));
        assert_eq!(modal.error(), Some("Order 1 not found"));

        // the annotation is cleared on the next attempt
        modal.begin_submit().unwrap();
        modal.settle(Ok(()));
        assert!(!modal.is_open());
    }

    #[test]
    fn only_existing_orders_can_be_deleted() {
        let mut modal = ModalMachine::new();
        assert_eq!(modal.begin_delete(), Err(ModalError::NotOpen));
        modal.open_for_new().unwrap();
        assert_eq!(modal.begin_delete(), Err(ModalError::NotDeletable));
    }
}
