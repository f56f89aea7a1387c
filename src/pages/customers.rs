//! Customers
//!
//! Engagement filter plus search over the seeded customers, and the weekly
//! interaction series.

use leptos::prelude::*;

use crate::components::{DashboardLayout, SeriesBars};
use crate::filter::{self, engagement_value, parse_engagement_filter, ALL_VALUE};
use crate::fixtures;
use crate::models::Engagement;

#[component]
pub fn CustomersPage() -> impl IntoView {
    let customers = StoredValue::new(fixtures::customers());
    let (engagement, set_engagement) = signal(ALL_VALUE.to_string());
    let (query, set_query) = signal(String::new());

    let visible = move || {
        customers.with_value(|all| {
            filter::apply(all, parse_engagement_filter(&engagement.get()), &query.get())
        })
    };

    view! {
        <DashboardLayout title="Customers">
            <div class="toolbar">
                <input
                    type="search"
                    placeholder="Search customers..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || engagement.get()
                    on:change=move |ev| set_engagement.set(event_target_value(&ev))
                >
                    <option value=ALL_VALUE>"All Engagement"</option>
                    {Engagement::ALL
                        .iter()
                        .map(|e| view! { <option value=engagement_value(*e)>{e.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn outline" on:click=move |_| log::info!("[CUSTOMERS] Export requested")>
                    "Export"
                </button>
            </div>
            <SeriesBars title="Customer Interactions" points=fixtures::customer_interactions()/>
            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Customer"</th>
                            <th>"Last Seen"</th>
                            <th>"Total Messages"</th>
                            <th>"Language"</th>
                            <th>"Engagement"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|customer| customer.id.clone()
                            children=|customer| {
                                let class = match customer.engagement {
                                    Engagement::High => "status-badge status-delivered",
                                    Engagement::Low => "status-badge status-new",
                                };
                                view! {
                                    <tr>
                                        <td>{customer.name}</td>
                                        <td>{customer.last_seen}</td>
                                        <td>{customer.total_messages}</td>
                                        <td>{customer.language}</td>
                                        <td><span class=class>{customer.engagement.label()}</span></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || visible().is_empty()>
                    <p class="empty muted">"No customers match the current filters"</p>
                </Show>
            </div>
        </DashboardLayout>
    }
}
