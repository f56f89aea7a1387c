//! Dashboard overview
//!
//! Reorderable KPI cards above the message, response-time and growth series.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::{indexed, DashboardLayout, DropSlot, KpiCardView, SeriesBars, SortableRow};
use crate::fixtures;
use crate::store::{store_move_kpi, use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |result| {
        log::debug!("[DND] KPI card {} -> {:?}", result.source, result.destination);
        store_move_kpi(&store, result);
    });

    view! {
        <DashboardLayout title="Dashboard Overview">
            <div class="kpi-grid">
                <For
                    each=move || indexed(&store.kpi_cards().get())
                    key=|(index, card)| (card.id, *index)
                    children=move |(index, card)| view! {
                        <DropSlot dnd=dnd gap=index/>
                        <SortableRow dnd=dnd index=index>
                            <KpiCardView card=card/>
                        </SortableRow>
                    }
                />
                {move || view! { <DropSlot dnd=dnd gap=store.kpi_cards().read().len()/> }}
            </div>
            <div class="grid two">
                <SeriesBars title="Message Volume (Last 7 Days)" points=fixtures::message_volume()/>
                <SeriesBars title="Response Time Distribution" points=fixtures::response_times() unit="%"/>
            </div>
            <SeriesBars title="User Growth (Last 6 Months)" points=fixtures::user_growth()/>
        </DashboardLayout>
    }
}
