use shared::forms::{FormState, TransactionForm};
use shared::views::SelectOption;
use shared::TransactionKind;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{form_error, select_options};

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub form: FormState<TransactionForm>,
    pub accounts: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    pub on_change: Callback<TransactionForm>,
    pub on_submit: Callback<()>,
}

/// Emits a copy of the form with one field replaced
fn field_input(
    fields: &TransactionForm,
    on_change: &Callback<TransactionForm>,
    apply: fn(&mut TransactionForm, String),
) -> Callback<InputEvent> {
    let fields = fields.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = fields.clone();
        apply(&mut next, input.value());
        on_change.emit(next);
    })
}

fn field_select(
    fields: &TransactionForm,
    on_change: &Callback<TransactionForm>,
    apply: fn(&mut TransactionForm, String),
) -> Callback<Event> {
    let fields = fields.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = fields.clone();
        apply(&mut next, select.value());
        on_change.emit(next);
    })
}

#[function_component(TransactionFormView)]
pub fn transaction_form_view(props: &TransactionFormProps) -> Html {
    let fields = &props.form.fields;
    let busy = props.form.is_busy();

    let kinds = vec![
        SelectOption {
            value: TransactionKind::Inflow.as_wire().to_string(),
            label: "Inflow".to_string(),
        },
        SelectOption {
            value: TransactionKind::Outflow.as_wire().to_string(),
            label: "Outflow".to_string(),
        },
    ];

    html! {
        <section class="panel">
            <h2>{"New Transaction"}</h2>

            {form_error(&props.form.error)}

            <form id="transaction-form" class="stacked-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="transaction-desc">{"Description"}</label>
                    <input
                        type="text"
                        id="transaction-desc"
                        value={fields.description.clone()}
                        oninput={field_input(fields, &props.on_change, |f, v| f.description = v)}
                        disabled={busy}
                    />
                </div>
                <div class="form-group">
                    <label for="transaction-amount">{"Amount"}</label>
                    <input
                        type="text"
                        id="transaction-amount"
                        placeholder="0,00"
                        value={fields.amount.clone()}
                        oninput={field_input(fields, &props.on_change, |f, v| f.amount = v)}
                        disabled={busy}
                    />
                </div>
                <div class="form-group">
                    <label for="transaction-type">{"Type"}</label>
                    <select
                        id="transaction-type"
                        onchange={field_select(fields, &props.on_change, |f, v| f.kind = TransactionKind::from_wire(&v))}
                        disabled={busy}
                    >
                        {select_options(&kinds, fields.kind.as_wire(), None)}
                    </select>
                </div>
                <div class="form-group">
                    <label for="transaction-account">{"Account"}</label>
                    <select
                        id="transaction-account"
                        onchange={field_select(fields, &props.on_change, |f, v| f.account_id = v)}
                        disabled={busy}
                    >
                        {select_options(&props.accounts, &fields.account_id, Some("Select an account"))}
                    </select>
                </div>
                <div class="form-group">
                    <label for="transaction-category">{"Category"}</label>
                    <select
                        id="transaction-category"
                        onchange={field_select(fields, &props.on_change, |f, v| f.category = v)}
                        disabled={busy}
                    >
                        {select_options(&props.categories, &fields.category, Some("Select a category"))}
                    </select>
                </div>
                <div class="form-group">
                    <label for="transaction-date">{"Date"}</label>
                    <input
                        type="date"
                        id="transaction-date"
                        value={fields.date.clone()}
                        oninput={field_input(fields, &props.on_change, |f, v| f.date = v)}
                        disabled={busy}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    {if busy { "Saving..." } else { "Add Transaction" }}
                </button>
            </form>
        </section>
    }
}
