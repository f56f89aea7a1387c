//! Sortable List Components
//!
//! Rows and gap slots wired to leptos-dragdrop. A list renders
//! `DropSlot(0), Row(0), DropSlot(1), Row(1), ... DropSlot(len)` and binds one
//! window mouseup handler that receives the finished `DragResult`.

use leptos::prelude::*;

use leptos_dragdrop::*;

/// Draggable row wrapper
#[component]
pub fn SortableRow(
    dnd: DndSignals,
    /// Position of the row in the current order
    index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, index);
    let on_mouseenter = make_on_row_mouseenter(dnd, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = move || {
        let mut c = format!("sortable-row {}", class);
        if dnd.is_dragged_row(index) { c.push_str(" dragging"); }
        if dnd.is_target(DropTarget::Row(index)) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {children()}
        </div>
    }
}

/// Gap before row `gap` (or after the last row when `gap == len`)
#[component]
pub fn DropSlot(dnd: DndSignals, gap: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, gap);
    let on_mouseleave = make_on_mouseleave(dnd);

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !dnd.is_dragging() { c.push_str(" hidden"); }
        if dnd.is_target(DropTarget::Slot(gap)) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}

/// Pair every element with its current index for keyed rendering.
///
/// Rows are keyed by `(id, index)` so the handlers captured for a row always
/// refer to its position in the latest order.
pub fn indexed<T: Clone>(items: &[T]) -> Vec<(usize, T)> {
    items.iter().cloned().enumerate().collect()
}
