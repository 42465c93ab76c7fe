use shared::forms::{BankImportForm, FormState};
use shared::views::BankConnectionRow;
use shared::RecordId;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::form_error;

#[derive(Properties, PartialEq)]
pub struct BankConnectionsPanelProps {
    pub rows: Vec<BankConnectionRow>,
    pub form: FormState<BankImportForm>,
    pub on_change: Callback<BankImportForm>,
    pub on_submit: Callback<()>,
    pub on_disconnect: Callback<RecordId>,
}

#[function_component(BankConnectionsPanel)]
pub fn bank_connections_panel(props: &BankConnectionsPanelProps) -> Html {
    let fields = &props.form.fields;
    let busy = props.form.is_busy();

    let on_bank = {
        let on_change = props.on_change.clone();
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(BankImportForm {
                bank_name: input.value(),
                ..fields.clone()
            });
        })
    };
    let on_count = {
        let on_change = props.on_change.clone();
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(BankImportForm {
                transaction_count: input.value(),
                ..fields.clone()
            });
        })
    };

    html! {
        <section id="connections" class="panel">
            <h2>{"Bank Connections"}</h2>
            <p class="panel-hint">
                {"Simulated imports go into your first account."}
            </p>

            {form_error(&props.form.error)}

            <form id="connect-bank-form" class="inline-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <input
                    type="text"
                    id="bank-name"
                    placeholder="Bank name"
                    value={fields.bank_name.clone()}
                    oninput={on_bank}
                    disabled={busy}
                />
                <input
                    type="number"
                    id="num-transactions"
                    min="1"
                    value={fields.transaction_count.clone()}
                    oninput={on_count}
                    disabled={busy}
                />
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    {if busy { "Connecting..." } else { "Connect Bank" }}
                </button>
            </form>

            {if props.rows.is_empty() {
                html! { <p class="empty-state">{"No connected banks."}</p> }
            } else {
                html! {
                    <ul id="connected-banks-list" class="item-list">
                        {for props.rows.iter().map(|row| {
                            let id = row.id.clone();
                            let on_disconnect = props.on_disconnect.clone();
                            html! {
                                <li class="item-row">
                                    <span class="item-name">
                                        <i class="fas fa-university"></i>{" "}{&row.bank_name}
                                    </span>
                                    <span class="item-detail">{&row.account_name}</span>
                                    {if let Some(count) = row.imported_count {
                                        html! { <span class="item-detail">{format!("{} transactions", count)}</span> }
                                    } else { html! {} }}
                                    {if let Some(at) = row.connected_at.as_ref() {
                                        html! { <span class="item-detail">{format!("since {}", at)}</span> }
                                    } else { html! {} }}
                                    <button
                                        class="btn btn-danger btn-small"
                                        onclick={Callback::from(move |_: MouseEvent| on_disconnect.emit(id.clone()))}
                                    >
                                        {"Disconnect"}
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
