use shared::views::TransactionRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Rows already sorted newest first
    pub rows: Vec<TransactionRow>,
    pub loading: bool,
    pub on_delete: Callback<i64>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Transactions"}</h2>

            {if props.loading && props.rows.is_empty() {
                html! { <div class="loading">{"Loading transactions..."}</div> }
            } else if props.rows.is_empty() {
                html! { <p class="empty-state">{"No transactions recorded."}</p> }
            } else {
                html! {
                    <div class="table-container">
                        <table id="transactions-table" class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Account"}</th>
                                    <th>{"Category"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.rows.iter().map(|row| {
                                    let id = row.id;
                                    let on_delete = props.on_delete.clone();
                                    html! {
                                        <tr>
                                            <td class="date">{&row.date}</td>
                                            <td class="description">{&row.description}</td>
                                            <td class={row.tone.css_class()}>{row.kind_label}</td>
                                            <td class={classes!("amount", row.tone.css_class())}>
                                                {&row.formatted_amount}
                                            </td>
                                            <td>{&row.account_name}</td>
                                            <td>{&row.category}</td>
                                            <td>
                                                <button
                                                    class="btn btn-danger btn-small"
                                                    title="Delete transaction"
                                                    onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id))}
                                                >
                                                    <i class="fas fa-trash"></i>
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
