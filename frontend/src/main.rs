use std::rc::Rc;

use shared::views::{
    account_options, account_rows, bank_connection_rows, category_options, category_rows,
    transaction_rows, user_display_name,
};
use shared::DashboardConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::accounts::AccountsPanel;
use components::bank_connections::BankConnectionsPanel;
use components::categories::CategoriesPanel;
use components::dashboard::DashboardOverview;
use components::forms::TransferFormView;
use components::header::Header;
use components::notification::Notification;
use components::sidebar::{Section, Sidebar};
use components::transactions::{TransactionFormView, TransactionTable};
use hooks::use_dashboard::use_dashboard;
use hooks::use_theme::use_theme;
use services::storage::{self, BrowserSession};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<DashboardConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let currency = &config.currency;
    let section = use_state(Section::default);
    let theme = use_theme(&config.storage_keys.theme);
    let dashboard = use_dashboard(config);

    let state = &dashboard.state;
    let actions = &dashboard.actions;
    let store = &state.store;

    let on_select = {
        let section = section.clone();
        Callback::from(move |next: Section| section.set(next))
    };

    let user_email = store
        .user()
        .email
        .clone()
        .or_else(|| BrowserSession::new(config.storage_keys.clone()).logged_user());

    let content = match *section {
        Section::Dashboard => html! {
            <DashboardOverview store={store.clone()} currency={currency.clone()} />
        },
        Section::Accounts => html! {
            <AccountsPanel
                rows={account_rows(store, currency)}
                form={state.account_form.clone()}
                on_change={actions.on_account_change.clone()}
                on_submit={actions.submit_account.clone()}
                on_delete={actions.delete_account.clone()}
            />
        },
        Section::Categories => html! {
            <CategoriesPanel
                rows={category_rows(store)}
                form={state.category_form.clone()}
                on_change={actions.on_category_change.clone()}
                on_submit={actions.submit_category.clone()}
                on_delete={actions.delete_category.clone()}
            />
        },
        Section::Transactions => html! {
            <>
                <TransactionFormView
                    form={state.transaction_form.clone()}
                    accounts={account_options(store, currency)}
                    categories={category_options(store)}
                    on_change={actions.on_transaction_change.clone()}
                    on_submit={actions.submit_transaction.clone()}
                />
                <TransactionTable
                    rows={transaction_rows(store, currency)}
                    loading={state.loading}
                    on_delete={actions.delete_transaction.clone()}
                />
            </>
        },
        Section::Transfers => html! {
            <TransferFormView
                form={state.transfer_form.clone()}
                accounts={account_options(store, currency)}
                on_change={actions.on_transfer_change.clone()}
                on_submit={actions.submit_transfer.clone()}
            />
        },
        Section::Connections => html! {
            <BankConnectionsPanel
                rows={bank_connection_rows(store)}
                form={state.bank_form.clone()}
                on_change={actions.on_bank_change.clone()}
                on_submit={actions.submit_bank_import.clone()}
                on_disconnect={actions.disconnect_bank.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                total_balance={currency.format(store.total_balance())}
                loading={state.loading && !store.is_loaded()}
                theme={theme.theme}
                on_toggle_theme={theme.toggle.clone()}
                on_logout={actions.logout.clone()}
            />
            <Notification
                notice={state.notice.clone()}
                duration_ms={config.notice_duration_ms}
                on_dismiss={actions.dismiss_notice.clone()}
            />
            <div class="layout">
                <Sidebar
                    active={*section}
                    on_select={on_select}
                    user_name={user_display_name(store)}
                    user_email={user_email}
                />
                <main class="main">
                    {content}
                </main>
            </div>
        </div>
    }
}

fn main() {
    let config = storage::load_config();
    services::logging::init(config.log_level_filter());
    log::info!("Starting dashboard against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
