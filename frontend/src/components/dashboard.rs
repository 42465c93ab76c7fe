use shared::charts::{category_breakdown, monthly_series};
use shared::money::CurrencyFormat;
use shared::ClientStore;
use yew::prelude::*;

use super::charts::{CategoryChart, MonthlyChart};

#[derive(Properties, PartialEq)]
pub struct DashboardOverviewProps {
    pub store: ClientStore,
    pub currency: CurrencyFormat,
}

#[function_component(DashboardOverview)]
pub fn dashboard_overview(props: &DashboardOverviewProps) -> Html {
    let store = &props.store;
    let series = monthly_series(store.transactions());
    let breakdown = category_breakdown(store.transactions());

    html! {
        <section id="dashboard" class="panel">
            <div class="summary-cards">
                <div class="summary-card">
                    <span class="summary-label">{"Total balance"}</span>
                    <span class="summary-value">{props.currency.format(store.total_balance())}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-label">{"Accounts"}</span>
                    <span class="summary-value">{store.accounts().len()}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-label">{"Transactions"}</span>
                    <span class="summary-value">{store.transactions().len()}</span>
                </div>
            </div>
            if store.is_empty() {
                <p class="empty-hint">{"No data yet. Start by adding an account."}</p>
            }
            <div class="charts-grid">
                <MonthlyChart series={series} currency={props.currency.clone()} />
                <CategoryChart breakdown={breakdown} />
            </div>
        </section>
    }
}
