pub mod accounts;
pub mod bank_connections;
pub mod categories;
pub mod charts;
pub mod dashboard;
pub mod forms;
pub mod header;
pub mod notification;
pub mod sidebar;
pub mod transactions;

use shared::views::SelectOption;
use yew::prelude::*;

/// Inline validation message under a form title
pub fn form_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <div class="form-message error">{message}</div> },
        None => html! {},
    }
}

/// `<option>` list with `selected` set on the current value. An empty
/// placeholder option comes first when `placeholder` is given.
pub fn select_options(options: &[SelectOption], selected: &str, placeholder: Option<&str>) -> Html {
    html! {
        <>
            {if let Some(text) = placeholder {
                html! { <option value="" selected={selected.is_empty()}>{text}</option> }
            } else { html! {} }}
            {for options.iter().map(|o| html! {
                <option value={o.value.clone()} selected={o.value == selected}>{&o.label}</option>
            })}
        </>
    }
}
