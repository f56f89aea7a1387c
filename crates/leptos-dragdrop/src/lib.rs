//! Leptos DragDrop Utilities
//!
//! Mouse-driven sortable lists for Leptos.
//! Uses movement threshold to distinguish click from drag, and reports
//! drops as a `(source, destination)` index pair fed to [`reorder`].

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Hovering a row: the dragged row takes that index
    Row(usize),
    /// Hovering a gap between rows, numbered 0..=len in the current order
    Slot(usize),
}

/// Outcome of a finished drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragResult {
    pub source: usize,
    /// None when the row was released outside any target
    pub destination: Option<usize>,
}

impl DragResult {
    pub fn new(source: usize, target: Option<DropTarget>) -> Self {
        let destination = target.map(|t| match t {
            DropTarget::Row(index) => index,
            // Gaps after the source shift down by one once it is removed
            DropTarget::Slot(slot) if slot > source => slot - 1,
            DropTarget::Slot(slot) => slot,
        });
        Self { source, destination }
    }

    /// True when applying this result would leave the list as it is
    pub fn is_noop(&self) -> bool {
        self.destination.map_or(true, |d| d == self.source)
    }
}

/// Move the element at `source` to `destination`, splice-out then splice-in.
///
/// `destination` indexes the already-shortened list and is clamped to its end.
/// A missing destination or an out-of-range source returns the list unchanged.
pub fn reorder<T>(mut items: Vec<T>, source: usize, destination: Option<usize>) -> Vec<T> {
    let Some(destination) = destination else {
        return items;
    };
    if source >= items.len() {
        return items;
    }
    let moved = items.remove(source);
    let destination = destination.min(items.len());
    items.insert(destination, moved);
    items
}

/// In-place form of [`reorder`] for use inside signal updates
pub fn apply_drag<T>(items: &mut Vec<T>, result: DragResult) {
    if result.is_noop() {
        return;
    }
    let taken = std::mem::take(items);
    *items = reorder(taken, result.source, result.destination);
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    pub fn is_dragging(&self) -> bool {
        self.dragging_read.get().is_some()
    }

    pub fn is_dragged_row(&self, index: usize) -> bool {
        self.dragging_read.get() == Some(index)
    }

    pub fn is_target(&self, target: DropTarget) -> bool {
        self.drop_target_read.get() == Some(target)
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// True when the pointer moved far enough from the mousedown point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Create mousedown handler for a sortable row
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls inside a row keep their own mouse behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
            {
                return;
            }
        }
        ev.prevent_default();
        dnd.pending_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for rows
pub fn make_on_row_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Row(index)));
        }
    }
}

/// Create mouseenter handler for gaps between rows
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind window mousemove/mouseup handlers for the owning list.
///
/// `on_drop` runs once per finished drag, including drops outside any target
/// (destination `None`). Listeners are removed when the owner is cleaned up.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragResult) + 'static,
{
    let move_handle = window_event_listener(ev::mousemove, move |ev| {
        let Some(pending) = dnd.pending_read.try_get_untracked().flatten() else {
            return;
        };
        if dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            dnd.dragging_write.set(Some(pending));
        }
    });

    let up_handle = window_event_listener(ev::mouseup, move |_ev| {
        let Some(dragging) = dnd.dragging_read.try_get_untracked() else {
            return;
        };
        let drop_target = dnd.drop_target_read.get_untracked();
        end_drag(&dnd);

        // A plain click never started dragging
        if let Some(source) = dragging {
            on_drop(DragResult::new(source, drop_target));
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[(&'static str, u32)]) -> Vec<&'static str> {
        items.iter().map(|(id, _)| *id).collect()
    }

    #[test]
    fn test_reorder_moves_forward() {
        let list = vec!["A", "B", "C", "D"];
        assert_eq!(reorder(list, 0, Some(2)), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_reorder_moves_backward() {
        let list = vec!["A", "B", "C", "D"];
        assert_eq!(reorder(list, 3, Some(1)), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_reorder_without_destination_is_noop() {
        let list = vec!["A", "B", "C"];
        assert_eq!(reorder(list.clone(), 1, None), list);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let list = vec!["A", "B", "C"];
        assert_eq!(reorder(list.clone(), 7, Some(0)), list);
        // Destination past the end lands last
        assert_eq!(reorder(list, 0, Some(99)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_is_permutation() {
        let list = vec![("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)];
        for source in 0..list.len() {
            for destination in 0..list.len() {
                let out = reorder(list.clone(), source, Some(destination));
                assert_eq!(out.len(), list.len());

                let mut sorted = ids(&out);
                sorted.sort();
                assert_eq!(sorted, ids(&list));

                // Only the span between old and new position moves
                let (lo, hi) = (source.min(destination), source.max(destination));
                for i in (0..lo).chain(hi + 1..list.len()) {
                    assert_eq!(out[i], list[i]);
                }
                assert_eq!(out[destination], list[source]);
            }
        }
    }

    #[test]
    fn test_drag_result_from_targets() {
        assert_eq!(DragResult::new(1, Some(DropTarget::Row(3))).destination, Some(3));
        assert_eq!(DragResult::new(1, None).destination, None);
        // Gap after the source: one fewer once the source is lifted out
        assert_eq!(DragResult::new(1, Some(DropTarget::Slot(4))).destination, Some(3));
        assert_eq!(DragResult::new(3, Some(DropTarget::Slot(0))).destination, Some(0));
        // Gaps directly around the source do not move it
        assert!(DragResult::new(2, Some(DropTarget::Slot(2))).is_noop());
        assert!(DragResult::new(2, Some(DropTarget::Slot(3))).is_noop());
    }

    #[test]
    fn test_apply_drag_in_place() {
        let mut list = vec!["A", "B", "C", "D"];
        apply_drag(&mut list, DragResult::new(0, Some(DropTarget::Slot(3))));
        assert_eq!(list, vec!["B", "C", "A", "D"]);

        apply_drag(&mut list, DragResult::new(2, None));
        assert_eq!(list, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_drop_into_last_gap() {
        let mut list = vec!["A", "B", "C", "D"];
        let len = list.len();
        apply_drag(&mut list, DragResult::new(0, Some(DropTarget::Slot(len))));
        assert_eq!(list, vec!["B", "C", "D", "A"]);

        // Last row into the last gap stays put
        apply_drag(&mut list, DragResult::new(3, Some(DropTarget::Slot(len))));
        assert_eq!(list, vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_short_lists() {
        let mut single = vec!["A"];
        apply_drag(&mut single, DragResult::new(0, Some(DropTarget::Slot(0))));
        apply_drag(&mut single, DragResult::new(0, Some(DropTarget::Slot(1))));
        apply_drag(&mut single, DragResult::new(0, Some(DropTarget::Row(0))));
        assert_eq!(single, vec!["A"]);

        let mut empty: Vec<&str> = Vec::new();
        apply_drag(&mut empty, DragResult::new(0, Some(DropTarget::Slot(1))));
        apply_drag(&mut empty, DragResult::new(0, Some(DropTarget::Row(0))));
        assert!(empty.is_empty());
        assert!(reorder(Vec::<&str>::new(), 0, Some(0)).is_empty());
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 14)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
