//! Dashboard Layout Component
//!
//! Shell shared by all protected pages: collapsible sidebar, header with
//! notifications and account menu, and the page content.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::navigation::{AccountMenu, BackToWebsite, Busy, BusyIndicator, NotificationsMenu};
use crate::config;
use crate::routes::AppRoute;

fn sidebar_icon(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "📊",
        AppRoute::Chatbot => "🤖",
        AppRoute::Campaigns => "📣",
        AppRoute::Orders => "🛒",
        AppRoute::Customers => "👥",
        AppRoute::Settings => "⚙",
        AppRoute::DeveloperApi => "</>",
        _ => "🏠",
    }
}

#[component]
fn Sidebar(collapsed: ReadSignal<bool>, set_collapsed: WriteSignal<bool>) -> impl IntoView {
    let location = use_location();

    let items = AppRoute::SIDEBAR
        .iter()
        .map(|route| {
            let route = *route;
            let pathname = location.pathname;
            let class = move || {
                if pathname.get() == route.path() { "sidebar-link active" } else { "sidebar-link" }
            };
            view! {
                <a href=route.path() class=class title=route.label()>
                    <span class="sidebar-icon">{sidebar_icon(route)}</span>
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar-label">{route.label()}</span>
                    </Show>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-head">
                <Show when=move || !collapsed.get()>
                    <span class="brand">{config::BRAND_NAME}</span>
                </Show>
                <button
                    class="icon-btn"
                    title="Toggle sidebar"
                    on:click=move |_| set_collapsed.update(|v| *v = !*v)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
            <nav class="sidebar-nav">{items}</nav>
        </aside>
    }
}

#[component]
pub fn DashboardLayout(
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let (busy, set_busy) = signal(None::<Busy>);

    view! {
        <div class="dashboard-layout">
            <Sidebar collapsed=collapsed set_collapsed=set_collapsed/>
            <div class="dashboard-main">
                <header class="dashboard-header">
                    <h1>{title}</h1>
                    <div class="header-actions">
                        {move || match busy.get() {
                            Some(_) => view! { <BusyIndicator busy=busy/> }.into_any(),
                            None => view! {
                                <BackToWebsite set_busy=set_busy/>
                                <NotificationsMenu/>
                                <AccountMenu set_busy=set_busy/>
                            }.into_any(),
                        }}
                    </div>
                </header>
                <main class="dashboard-content">{children()}</main>
            </div>
        </div>
    }
}
