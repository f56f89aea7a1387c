//! Settings
//!
//! API key, integration toggles and the ordered routing rules. "Save Changes"
//! logs the current settings as JSON.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::{indexed, DashboardLayout, DeleteConfirmButton, DropSlot, SortableRow};
use crate::models::{RuleAction, RuleCondition};
use crate::rules::{RuleDraft, SettingsSnapshot};
use crate::store::{
    store_add_rule, store_move_rule, store_remove_rule, use_app_store, AppStateStoreFields,
};

#[component]
fn Toggle(
    #[prop(into)] label: String,
    checked: Signal<bool>,
    on_toggle: impl Fn(bool) + 'static,
) -> impl IntoView {
    view! {
        <label class="switch">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// Row of inputs for a new routing rule
#[component]
fn AddRuleForm() -> impl IntoView {
    let store = use_app_store();
    let (draft, set_draft) = signal(RuleDraft::default());

    let on_add = move |_| {
        if store_add_rule(&store, &draft.get_untracked()) {
            log::info!("[SETTINGS] Added routing rule");
            set_draft.set(RuleDraft::default());
        } else {
            log::debug!("[SETTINGS] Ignoring incomplete rule draft");
        }
    };

    view! {
        <div class="rule-form">
            <select
                prop:value=move || draft.get().condition
                on:change=move |ev| set_draft.update(|d| d.condition = event_target_value(&ev))
            >
                <option value="">"Condition"</option>
                {RuleCondition::ALL
                    .iter()
                    .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                placeholder="Value"
                prop:value=move || draft.get().value
                on:input=move |ev| set_draft.update(|d| d.value = event_target_value(&ev))
            />
            <select
                prop:value=move || draft.get().action
                on:change=move |ev| set_draft.update(|d| d.action = event_target_value(&ev))
            >
                <option value="">"Action"</option>
                {RuleAction::ALL
                    .iter()
                    .map(|a| view! { <option value=a.as_str()>{a.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                placeholder="Target"
                prop:value=move || draft.get().target
                on:input=move |ev| set_draft.update(|d| d.target = event_target_value(&ev))
            />
            <button class="btn primary" on:click=on_add>"Add Rule"</button>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals();
    let (sheets_url, set_sheets_url) = signal(String::new());
    let (scrape_url, set_scrape_url) = signal(String::new());
    let (scrape_selector, set_scrape_selector) = signal(String::new());

    bind_global_mouseup(dnd, move |result| {
        log::debug!("[DND] Routing rule {} -> {:?}", result.source, result.destination);
        store_move_rule(&store, result);
    });

    let on_save = move |_| {
        let api_key = store.api_key().get_untracked();
        let rules = store.routing_rules().get_untracked();
        let snapshot = SettingsSnapshot {
            api_key: &api_key,
            crm_connected: store.crm_connected().get_untracked(),
            web_scraping: store.web_scraping().get_untracked(),
            routing_rules: &rules,
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::info!("[SETTINGS] Saving settings: {}", json),
            Err(e) => log::error!("[SETTINGS] Failed to serialize settings: {}", e),
        }
    };

    let crm_connected = Signal::derive(move || store.crm_connected().get());
    let web_scraping = Signal::derive(move || store.web_scraping().get());

    view! {
        <DashboardLayout title="Settings">
            <div class="card form">
                <h3>"WhatsApp API"</h3>
                <label>
                    "API Key"
                    <input
                        type="password"
                        prop:value=move || store.api_key().get()
                        on:input=move |ev| store.api_key().set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="card form">
                <h3>"Integrations"</h3>
                <Toggle
                    label="CRM Integration (Google Sheets)"
                    checked=crm_connected
                    on_toggle=move |on| store.crm_connected().set(on)
                />
                <Show when=move || crm_connected.get()>
                    <label>
                        "Google Sheets URL"
                        <input
                            type="url"
                            prop:value=move || sheets_url.get()
                            on:input=move |ev| set_sheets_url.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <Toggle
                    label="Web Scraping"
                    checked=web_scraping
                    on_toggle=move |on| store.web_scraping().set(on)
                />
                <Show when=move || web_scraping.get()>
                    <label>
                        "Website URL"
                        <input
                            type="url"
                            prop:value=move || scrape_url.get()
                            on:input=move |ev| set_scrape_url.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "CSS Selector"
                        <input
                            type="text"
                            prop:value=move || scrape_selector.get()
                            on:input=move |ev| set_scrape_selector.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
            </div>

            <div class="card">
                <h3>"Routing Rules"</h3>
                <For
                    each=move || indexed(&store.routing_rules().get())
                    key=|(index, rule)| (rule.id, *index)
                    children=move |(index, rule)| {
                        let id = rule.id;
                        view! {
                            <DropSlot dnd=dnd gap=index/>
                            <SortableRow dnd=dnd index=index class="rule-row">
                                <span class="drag-handle">"⠿"</span>
                                <span class="rule-text">
                                    "If "<strong>{rule.condition.label()}</strong>" is "
                                    <strong>{rule.value}</strong>", "
                                    {rule.action.label()}" to "<strong>{rule.target}</strong>
                                </span>
                                <DeleteConfirmButton
                                    what="rule"
                                    on_confirm=move |_| store_remove_rule(&store, id)
                                />
                            </SortableRow>
                        }
                    }
                />
                {move || view! { <DropSlot dnd=dnd gap=store.routing_rules().read().len()/> }}
                <AddRuleForm/>
            </div>

            <div class="page-actions">
                <button class="btn primary" on:click=on_save>"Save Changes"</button>
            </div>
        </DashboardLayout>
    }
}
