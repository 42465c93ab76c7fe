use shared::forms::{CategoryForm, FormState};
use shared::views::CategoryRow;
use shared::RecordId;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::form_error;

#[derive(Properties, PartialEq)]
pub struct CategoriesPanelProps {
    pub rows: Vec<CategoryRow>,
    pub form: FormState<CategoryForm>,
    pub on_change: Callback<CategoryForm>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<RecordId>,
}

#[function_component(CategoriesPanel)]
pub fn categories_panel(props: &CategoriesPanelProps) -> Html {
    let busy = props.form.is_busy();

    let on_name = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(CategoryForm { name: input.value() });
        })
    };

    html! {
        <section id="categories" class="panel">
            <h2>{"Categories"}</h2>

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
                    id="category-name"
                    placeholder="New category"
                    value={props.form.fields.name.clone()}
                    oninput={on_name}
                    disabled={busy}
                />
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    {"Add Category"}
                </button>
            </form>

            <ul id="categories-list" class="item-list">
                {for props.rows.iter().map(|row| {
                    let id = row.id.clone();
                    let on_delete = props.on_delete.clone();
                    html! {
                        <li class="item-row">
                            <span class="item-name">{&row.name}</span>
                            <button
                                class="btn btn-danger btn-small"
                                onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))}
                            >
                                {"Delete"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
