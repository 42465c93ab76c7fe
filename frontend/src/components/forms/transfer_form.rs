use shared::forms::{FormState, TransferForm};
use shared::views::SelectOption;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{form_error, select_options};

#[derive(Properties, PartialEq)]
pub struct TransferFormProps {
    pub form: FormState<TransferForm>,
    /// Same list for both selects
    pub accounts: Vec<SelectOption>,
    pub on_change: Callback<TransferForm>,
    pub on_submit: Callback<()>,
}

#[function_component(TransferFormView)]
pub fn transfer_form_view(props: &TransferFormProps) -> Html {
    let fields = &props.form.fields;
    let busy = props.form.is_busy();

    let on_from = {
        let on_change = props.on_change.clone();
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(TransferForm {
                from_id: select.value(),
                ..fields.clone()
            });
        })
    };
    let on_to = {
        let on_change = props.on_change.clone();
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(TransferForm {
                to_id: select.value(),
                ..fields.clone()
            });
        })
    };
    let on_amount = {
        let on_change = props.on_change.clone();
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(TransferForm {
                amount: input.value(),
                ..fields.clone()
            });
        })
    };

    html! {
        <section id="transfers" class="panel">
            <h2>{"Transfer Between Accounts"}</h2>

            {form_error(&props.form.error)}

            <form id="transfer-form" class="stacked-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="transfer-from">{"From"}</label>
                    <select id="transfer-from" onchange={on_from} disabled={busy}>
                        {select_options(&props.accounts, &fields.from_id, Some("Source account"))}
                    </select>
                </div>
                <div class="form-group">
                    <label for="transfer-to">{"To"}</label>
                    <select id="transfer-to" onchange={on_to} disabled={busy}>
                        {select_options(&props.accounts, &fields.to_id, Some("Destination account"))}
                    </select>
                </div>
                <div class="form-group">
                    <label for="transfer-amount">{"Amount"}</label>
                    <input
                        type="text"
                        id="transfer-amount"
                        placeholder="0,00"
                        value={fields.amount.clone()}
                        oninput={on_amount}
                        disabled={busy}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    {if busy { "Transferring..." } else { "Transfer" }}
                </button>
            </form>
        </section>
    }
}
