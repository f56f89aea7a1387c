//! Delete Confirm Button Component
//!
//! Inline two-step delete used by flow blocks and routing rules.

use leptos::prelude::*;

/// Shows a trash button; a first click asks "Delete?" with confirm/cancel.
///
/// # Arguments
/// * `what` - Name of the thing being deleted, used for the tooltip
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] what: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let title = format!("Delete {}", what);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="icon-btn delete-btn"
                    title=title.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "🗑"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
