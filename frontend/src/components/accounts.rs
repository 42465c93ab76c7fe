use shared::forms::{AccountForm, FormState};
use shared::views::AccountRow;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::form_error;

#[derive(Properties, PartialEq)]
pub struct AccountsPanelProps {
    pub rows: Vec<AccountRow>,
    pub form: FormState<AccountForm>,
    pub on_change: Callback<AccountForm>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<i64>,
}

#[function_component(AccountsPanel)]
pub fn accounts_panel(props: &AccountsPanelProps) -> Html {
    let fields = &props.form.fields;
    let busy = props.form.is_busy();

    let on_name = {
        let on_change = props.on_change.clone();
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(AccountForm {
                name: input.value(),
                ..fields.clone()
            });
        })
    };
    let on_balance = {
        let on_change = props.on_change.clone();
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(AccountForm {
                balance: input.value(),
                ..fields.clone()
            });
        })
    };

    html! {
        <section id="accounts" class="panel">
            <h2>{"Accounts"}</h2>

            {form_error(&props.form.error)}

            <form class="inline-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <input
                    type="text"
                    id="account-name"
                    placeholder="Account name"
                    value={fields.name.clone()}
                    oninput={on_name}
                    disabled={busy}
                />
                <input
                    type="text"
                    id="account-balance"
                    placeholder="Opening balance (1.234,56)"
                    value={fields.balance.clone()}
                    oninput={on_balance}
                    disabled={busy}
                />
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    {if busy { "Saving..." } else { "Add Account" }}
                </button>
            </form>

            {if props.rows.is_empty() {
                html! { <p class="empty-state">{"No accounts yet."}</p> }
            } else {
                html! {
                    <ul id="accounts-list" class="item-list">
                        {for props.rows.iter().map(|row| {
                            let id = row.id;
                            let on_delete = props.on_delete.clone();
                            html! {
                                <li class="item-row">
                                    <span class="item-name">{&row.name}</span>
                                    <span class="item-amount">{&row.formatted_balance}</span>
                                    <button
                                        class="btn btn-danger btn-small"
                                        onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id))}
                                    >
                                        {"Delete"}
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
