use yew::prelude::*;

/// Dashboard sections reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Accounts,
    Categories,
    Transactions,
    Transfers,
    Connections,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Accounts,
        Section::Categories,
        Section::Transactions,
        Section::Transfers,
        Section::Connections,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Accounts => "Accounts",
            Section::Categories => "Categories",
            Section::Transactions => "Transactions",
            Section::Transfers => "Transfers",
            Section::Connections => "Bank Connections",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fas fa-chart-pie",
            Section::Accounts => "fas fa-wallet",
            Section::Categories => "fas fa-tags",
            Section::Transactions => "fas fa-list",
            Section::Transfers => "fas fa-exchange-alt",
            Section::Connections => "fas fa-university",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Section,
    pub on_select: Callback<Section>,
    pub user_name: String,
    pub user_email: Option<String>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="sidebar">
            <div class="sidebar-user">
                <i class="fas fa-user-circle"></i>
                <div>
                    <div id="user-name" class="user-name">{&props.user_name}</div>
                    {if let Some(email) = props.user_email.as_ref() {
                        html! { <div id="user-email" class="user-email">{email}</div> }
                    } else { html! {} }}
                </div>
            </div>
            <nav>
                <ul class="sidebar-nav">
                    {for Section::ALL.iter().map(|section| {
                        let section = *section;
                        let on_select = props.on_select.clone();
                        let class = if section == props.active { "nav-item active" } else { "nav-item" };
                        html! {
                            <li
                                class={class}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(section))}
                            >
                                <i class={section.icon()}></i>
                                <span>{section.label()}</span>
                            </li>
                        }
                    })}
                </ul>
            </nav>
        </aside>
    }
}
