//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Edits to the
//! dashboard lists survive navigation between dashboard pages, not reloads.

use leptos::prelude::*;
use leptos_dragdrop::{apply_drag, DragResult};
use reactive_stores::Store;

use crate::fixtures;
use crate::flow;
use crate::models::{BlockKind, FlowBlock, KpiCard, RoutingRule};
use crate::rules::{self, RuleDraft};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// KPI cards in display order
    pub kpi_cards: Vec<KpiCard>,
    /// Chatbot flow in conversation order
    pub flow_blocks: Vec<FlowBlock>,
    /// Routing rules in evaluation order
    pub routing_rules: Vec<RoutingRule>,
    /// API key field on the settings page
    pub api_key: String,
    pub crm_connected: bool,
    pub web_scraping: bool,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            kpi_cards: fixtures::kpi_cards(),
            flow_blocks: fixtures::flow_blocks(),
            routing_rules: fixtures::routing_rules(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_move_kpi(store: &AppStore, result: DragResult) {
    apply_drag(&mut *store.kpi_cards().write(), result);
}

pub fn store_move_block(store: &AppStore, result: DragResult) {
    apply_drag(&mut *store.flow_blocks().write(), result);
}

pub fn store_move_rule(store: &AppStore, result: DragResult) {
    apply_drag(&mut *store.routing_rules().write(), result);
}

/// Add a flow block; returns false for blank content
pub fn store_add_block(store: &AppStore, kind: BlockKind, content: &str) -> bool {
    flow::add_block(&mut store.flow_blocks().write(), kind, content).is_some()
}

pub fn store_remove_block(store: &AppStore, id: u32) {
    flow::remove_block(&mut store.flow_blocks().write(), id);
}

/// Add a routing rule; returns false for an incomplete draft
pub fn store_add_rule(store: &AppStore, draft: &RuleDraft) -> bool {
    rules::add_rule(&mut store.routing_rules().write(), draft).is_some()
}

pub fn store_remove_rule(store: &AppStore, id: u32) {
    rules::remove_rule(&mut store.routing_rules().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos_dragdrop::DropTarget;

    fn seeded_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::seeded()))
    }

    fn sorted(mut ids: Vec<u32>) -> Vec<u32> {
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_move_kpi_to_last_gap() {
        let (_owner, store) = seeded_store();
        let before: Vec<u32> = store.kpi_cards().get_untracked().iter().map(|c| c.id).collect();
        let len = before.len();

        store_move_kpi(&store, DragResult::new(0, Some(DropTarget::Slot(len))));

        let after: Vec<u32> = store.kpi_cards().get_untracked().iter().map(|c| c.id).collect();
        assert_eq!(after.last(), Some(&before[0]));
        assert_eq!(&after[..len - 1], &before[1..]);
        assert_eq!(sorted(after), sorted(before));
    }

    #[test]
    fn test_move_rule_after_add_and_remove() {
        let (_owner, store) = seeded_store();
        let draft = RuleDraft {
            condition: "priority".to_string(),
            value: "VIP".to_string(),
            action: "notify".to_string(),
            target: "Manager".to_string(),
        };
        assert!(store_add_rule(&store, &draft));
        store_remove_rule(&store, 1);

        let before: Vec<u32> = store.routing_rules().get_untracked().iter().map(|r| r.id).collect();
        assert_eq!(before, vec![2, 3]);

        store_move_rule(&store, DragResult::new(0, Some(DropTarget::Slot(before.len()))));

        let after: Vec<u32> = store.routing_rules().get_untracked().iter().map(|r| r.id).collect();
        assert_eq!(after, vec![3, 2]);
    }

    #[test]
    fn test_move_block_to_adjacent_gap_keeps_order() {
        let (_owner, store) = seeded_store();
        assert!(store_add_block(&store, BlockKind::Action, "Hand over to an agent"));
        let before = store.flow_blocks().get_untracked();

        store_move_block(&store, DragResult::new(1, Some(DropTarget::Slot(1))));
        store_move_block(&store, DragResult::new(1, Some(DropTarget::Slot(2))));
        store_move_block(&store, DragResult::new(1, None));
        assert_eq!(store.flow_blocks().get_untracked(), before);

        store_move_block(&store, DragResult::new(2, Some(DropTarget::Slot(0))));
        let ids: Vec<u32> = store.flow_blocks().get_untracked().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
