use yew::prelude::*;

use crate::hooks::use_theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Already formatted total of all account balances
    pub total_balance: String,
    pub loading: bool,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_toggle_theme = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Finance Dashboard"}</h1>
                <div class="header-right">
                    <div class="balance-display">
                        <span class="balance-label">{"Total Balance:"}</span>
                        <span id="total-balance" class="balance-amount">
                            {if props.loading { "Loading...".to_string() } else { props.total_balance.clone() }}
                        </span>
                    </div>
                    <div class="header-menus">
                        <button
                            id="theme-toggle"
                            class="btn btn-icon"
                            title="Toggle theme"
                            onclick={on_toggle_theme}
                        >
                            {props.theme.icon()}
                        </button>
                        <button id="logout-btn" class="btn btn-secondary" onclick={on_logout}>
                            {"Log out"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
