//! Chatbot flow configuration
//!
//! Reorderable flow blocks with add/delete, a block-type catalogue and a
//! preview of the resulting conversation.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::{indexed, DashboardLayout, DeleteConfirmButton, DropSlot, SortableRow};
use crate::flow::preview_transcript;
use crate::models::BlockKind;
use crate::store::{
    store_add_block, store_move_block, store_remove_block, use_app_store, AppStateStoreFields,
};

#[component]
fn AddBlockDialog(set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (kind, set_kind) = signal(BlockKind::Message);
    let (content, set_content) = signal(String::new());
    let (rejected, set_rejected) = signal(false);

    let on_add = move |_| {
        if store_add_block(&store, kind.get_untracked(), &content.get_untracked()) {
            log::info!("[CHATBOT] Added {} block", kind.get_untracked().as_str());
            set_open.set(false);
        } else {
            set_rejected.set(true);
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>"Add New Block"</h3>
                <label>
                    "Block Type"
                    <select
                        prop:value=move || kind.get().as_str()
                        on:change=move |ev| set_kind.set(BlockKind::parse(&event_target_value(&ev)).unwrap_or_default())
                    >
                        {BlockKind::ADDABLE
                            .iter()
                            .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Content"
                    <textarea
                        rows="4"
                        prop:value=move || content.get()
                        on:input=move |ev| {
                            set_content.set(event_target_value(&ev));
                            set_rejected.set(false);
                        }
                    ></textarea>
                </label>
                <Show when=move || rejected.get()>
                    <p class="error-text">"Content cannot be empty"</p>
                </Show>
                <div class="modal-actions">
                    <button class="btn outline" on:click=move |_| set_open.set(false)>"Cancel"</button>
                    <button class="btn primary" on:click=on_add>"Add"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PreviewDialog(transcript: String, set_open: WriteSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>"Chat Preview"</h3>
                <pre class="chat-preview">{transcript}</pre>
                <div class="modal-actions">
                    <button class="btn primary" on:click=move |_| set_open.set(None)>"Close"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals();
    let (adding, set_adding) = signal(false);
    let (preview, set_preview) = signal(None::<String>);

    bind_global_mouseup(dnd, move |result| {
        log::debug!("[DND] Flow block {} -> {:?}", result.source, result.destination);
        store_move_block(&store, result);
    });

    let on_preview = move |_| {
        let transcript = preview_transcript(&store.flow_blocks().read());
        set_preview.set(Some(transcript));
    };

    view! {
        <DashboardLayout title="Chatbot Configuration">
            <div class="page-actions">
                <button class="btn outline" on:click=on_preview>"Preview Chat"</button>
            </div>
            <div class="grid sidebar-right">
                <div class="card">
                    <div class="card-head">
                        <h3>"Chatbot Flow"</h3>
                        <button class="icon-btn" title="Add New Block" on:click=move |_| set_adding.set(true)>
                            "+"
                        </button>
                    </div>
                    <For
                        each=move || indexed(&store.flow_blocks().get())
                        key=|(index, block)| (block.id, *index)
                        children=move |(index, block)| {
                            let id = block.id;
                            view! {
                                <DropSlot dnd=dnd gap=index/>
                                <SortableRow dnd=dnd index=index class="flow-block">
                                    <span class="drag-handle">"⠿"</span>
                                    <div class="flow-block-body">
                                        <strong>{block.kind.label()}</strong>
                                        <p>{block.content}</p>
                                    </div>
                                    <DeleteConfirmButton
                                        what="block"
                                        on_confirm=move |_| store_remove_block(&store, id)
                                    />
                                </SortableRow>
                            }
                        }
                    />
                    {move || view! { <DropSlot dnd=dnd gap=store.flow_blocks().read().len()/> }}
                </div>
                <div class="card">
                    <h3>"Block Types"</h3>
                    {BlockKind::ADDABLE
                        .iter()
                        .map(|k| view! {
                            <div class="block-type">
                                <strong>{k.label()}</strong>
                                <p class="muted">{k.description()}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
            <Show when=move || adding.get()>
                <AddBlockDialog set_open=set_adding/>
            </Show>
            {move || preview.get().map(|transcript| view! {
                <PreviewDialog transcript=transcript set_open=set_preview/>
            })}
        </DashboardLayout>
    }
}
