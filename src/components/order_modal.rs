// ============================================================================
// ORDER MODAL COMPONENT - Edit / create form
// ============================================================================

use yew::prelude::*;

use crate::models::order::OrderField;
use crate::state::modal_state::ModalMachine;

#[derive(Properties, PartialEq)]
pub struct OrderModalProps {
    /// Snapshot of the machine at render time
    pub modal: ModalMachine,
    pub on_field: Callback<(OrderField, String)>,
    pub on_cancel: Callback<()>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<()>,
}

pub struct OrderModal;

pub enum Msg {
    Close,
    EditField(OrderField, String),
    Submit,
    Delete,
}

impl Component for OrderModal {
    type Message = Msg;
    type Properties = OrderModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Close => props.on_cancel.emit(()),
            Msg::EditField(field, value) => props.on_field.emit((field, value)),
            Msg::Submit => props.on_submit.emit(()),
            Msg::Delete => props.on_delete.emit(()),
        }
        // The parent re-renders us with a fresh snapshot
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let modal = &ctx.props().modal;
        if !modal.is_open() {
            return html! {};
        }

        let busy = modal.is_submitting();
        let can_delete = modal.is_editing();

        let fields = OrderField::ALL.iter().map(|&field| {
            let oninput = ctx.link().callback(move |e: InputEvent| {
                let value = e
                    .target_dyn_into::<web_sys::HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();
                Msg::EditField(field, value)
            });
            let label = match field {
                OrderField::CreatedAt => "Created At",
                other => other.label(),
            };
            html! {
                <label class="form-group">
                    <span>{label}</span>
                    <input
                        type="text"
                        value={modal.field_value(field)}
                        {oninput}
                        disabled={busy || modal.is_read_only(field)}
                    />
                </label>
            }
        });

        html! {
            <div class="modal active" role="dialog" aria-labelledby="order-modal-title">
                <div class="modal-overlay" onclick={ctx.link().callback(|_| Msg::Close)}></div>
                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="modal-header">
                        <h2 id="order-modal-title">{modal.title()}</h2>
                        <button
                            class="btn-close"
                            disabled={busy}
                            onclick={ctx.link().callback(|_| Msg::Close)}
                        >
                            {"✕"}
                        </button>
                    </div>

                    <form class="modal-body" novalidate=true autocomplete="off">
                        { for fields }
                    </form>

                    if let Some(error) = modal.error() {
                        <p class="form-error">{error}</p>
                    }

                    <div class="modal-footer">
                        if can_delete {
                            <button
                                class="btn-danger"
                                disabled={busy}
                                onclick={ctx.link().callback(|_| Msg::Delete)}
                            >
                                {"🗑️ Delete"}
                            </button>
                        }
                        <button
                            class="btn-primary"
                            disabled={busy}
                            onclick={ctx.link().callback(|_| Msg::Submit)}
                        >
                            { if busy { "Saving…" } else { modal.submit_label() } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
