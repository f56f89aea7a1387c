//! KPI Card Component

use leptos::prelude::*;

use crate::models::KpiCard;

#[component]
pub fn KpiCardView(card: KpiCard) -> impl IntoView {
    let change_class = if card.is_positive { "kpi-change up" } else { "kpi-change down" };
    let change = card.change_label();

    view! {
        <div class="card kpi-card">
            <span class="drag-handle" title="Drag to reorder">"⠿"</span>
            <div class="kpi-title">{card.title}</div>
            <div class="kpi-value">{card.value}</div>
            <div class=change_class>{change}" from last month"</div>
        </div>
    }
}
