//! Orders
//!
//! Status filter plus free-text search over the seeded orders.

use leptos::prelude::*;

use crate::components::DashboardLayout;
use crate::filter::{self, order_status_value, parse_order_filter, ALL_VALUE};
use crate::fixtures;
use crate::models::OrderStatus;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = StoredValue::new(fixtures::orders());
    let (status, set_status) = signal(ALL_VALUE.to_string());
    let (query, set_query) = signal(String::new());

    let visible = move || {
        orders.with_value(|all| filter::apply(all, parse_order_filter(&status.get()), &query.get()))
    };

    view! {
        <DashboardLayout title="Orders">
            <div class="toolbar">
                <input
                    type="search"
                    placeholder="Search orders..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    <option value=ALL_VALUE>"All Status"</option>
                    {OrderStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=order_status_value(*s)>{s.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn outline" on:click=move |_| log::info!("[ORDERS] Export requested")>
                    "Export"
                </button>
            </div>
            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"Customer"</th>
                            <th>"Product"</th>
                            <th>"Status"</th>
                            <th>"WhatsApp"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|order| order.id.clone()
                            children=|order| view! {
                                <tr>
                                    <td>{order.id}</td>
                                    <td>{order.customer}</td>
                                    <td>{order.product}</td>
                                    <td><span class=order.status.css_class()>{order.status.label()}</span></td>
                                    <td>{order.whatsapp}</td>
                                    <td>{order.date}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || visible().is_empty()>
                    <p class="empty muted">"No orders match the current filters"</p>
                </Show>
            </div>
        </DashboardLayout>
    }
}
