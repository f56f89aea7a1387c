//! Developer API
//!
//! API key generation, webhook configuration and static API docs. Key and
//! webhook live in local storage.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard::copy_text;
use crate::components::DashboardLayout;
use crate::config;
use crate::delay::{Delay, TimerDelay};
use crate::developer::{DeveloperSettings, DeveloperStore, JsRandom};
use crate::storage::BrowserStorage;

/// Which value was copied last
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Copied {
    ApiKey,
    Secret,
}

const SEND_MESSAGE_DOC: &str = r#"POST /v1/messages
Content-Type: application/json

{
  "to": "+1234567890",
  "message": "Hello, this is a test message"
}"#;

const MESSAGE_STATUS_DOC: &str = "GET /v1/messages/{message_id}";

const WEBHOOK_EVENT_DOC: &str = r#"{
  "event": "message.received",
  "data": {
    "from": "+1234567890",
    "message": "Hello",
    "timestamp": "2024-04-19T12:00:00Z"
  }
}"#;

#[component]
fn CopyButton(
    #[prop(into)] value: Signal<String>,
    which: Copied,
    copied: ReadSignal<Option<Copied>>,
    set_copied: WriteSignal<Option<Copied>>,
) -> impl IntoView {
    let on_copy = move |_| {
        let text = value.get_untracked();
        if text.is_empty() {
            return;
        }
        spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => {
                    set_copied.set(Some(which));
                    TimerDelay.wait(config::COPY_FEEDBACK).await;
                    // A later copy owns the feedback now
                    if copied.try_get_untracked().flatten() == Some(which) {
                        let _ = set_copied.try_set(None);
                    }
                }
                Err(e) => log::error!("[DEVELOPER] {}", e),
            }
        });
    };

    view! {
        <button class="btn outline" on:click=on_copy>
            {move || if copied.get() == Some(which) { "Copied!" } else { "Copy" }}
        </button>
    }
}

#[component]
pub fn DeveloperApiPage() -> impl IntoView {
    let developer = DeveloperStore::new(BrowserStorage::local());
    let loaded = developer.load().unwrap_or_else(|e| {
        log::warn!("[DEVELOPER] Could not load saved settings: {}", e);
        DeveloperSettings::default()
    });

    let (api_key, set_api_key) = signal(loaded.api_key.unwrap_or_default());
    let (webhook_url, set_webhook_url) = signal(loaded.webhook.url);
    let (webhook_secret, set_webhook_secret) = signal(loaded.webhook.secret);
    let (error, set_error) = signal(None::<String>);
    let (saved, set_saved) = signal(false);
    let (copied, set_copied) = signal(None::<Copied>);

    let on_generate = move |_| match developer.regenerate_api_key(&mut JsRandom) {
        Ok(key) => {
            log::info!("[DEVELOPER] Generated new API key");
            set_api_key.set(key);
        }
        Err(e) => log::error!("[DEVELOPER] Failed to store API key: {}", e),
    };

    let on_save = move |_| {
        set_saved.set(false);
        let url = webhook_url.get_untracked();
        let secret = webhook_secret.get_untracked();
        match developer.save_webhook(&url, &secret, &mut JsRandom) {
            Ok(saved_config) => {
                log::info!("[DEVELOPER] Webhook configuration saved for {}", saved_config.url);
                set_webhook_secret.set(saved_config.secret);
                set_error.set(None);
                set_saved.set(true);
            }
            Err(e) => {
                log::error!("[DEVELOPER] Error saving webhook: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    let auth_doc = move || {
        let key = api_key.get();
        let key = if key.is_empty() { "{api_key}".to_string() } else { key };
        format!("curl -H \"Authorization: Bearer {}\" https://api.whatsapp-saas.com/v1/...", key)
    };

    view! {
        <DashboardLayout title="Developer API">
            <div class="card form">
                <h3>"API Key"</h3>
                <div class="input-row">
                    <input type="text" readonly=true placeholder="No API key generated" prop:value=move || api_key.get()/>
                    <CopyButton value=api_key which=Copied::ApiKey copied=copied set_copied=set_copied/>
                </div>
                <button class="btn primary" on:click=on_generate>"Generate New API Key"</button>
            </div>

            <div class="card form">
                <h3>"Webhook Configuration"</h3>
                <label>
                    "Webhook URL"
                    <input
                        type="url"
                        placeholder="https://your-server.com/webhook"
                        prop:value=move || webhook_url.get()
                        on:input=move |ev| {
                            set_webhook_url.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                </label>
                <label>
                    "Webhook Secret"
                    <div class="input-row">
                        <input
                            type="text"
                            placeholder="Leave empty to generate one"
                            prop:value=move || webhook_secret.get()
                            on:input=move |ev| set_webhook_secret.set(event_target_value(&ev))
                        />
                        <CopyButton value=webhook_secret which=Copied::Secret copied=copied set_copied=set_copied/>
                    </div>
                </label>
                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}
                <Show when=move || saved.get()>
                    <p class="success-text">"Webhook configuration saved"</p>
                </Show>
                <button class="btn primary" on:click=on_save>"Save Webhook Configuration"</button>
            </div>

            <div class="card">
                <h3>"API Documentation"</h3>
                <div class="doc">
                    <h4>"Authentication"</h4>
                    <pre>{auth_doc}</pre>
                </div>
                <div class="doc">
                    <h4>"Send Message"</h4>
                    <pre>{SEND_MESSAGE_DOC}</pre>
                </div>
                <div class="doc">
                    <h4>"Get Message Status"</h4>
                    <pre>{MESSAGE_STATUS_DOC}</pre>
                </div>
                <div class="doc">
                    <h4>"Webhook Events"</h4>
                    <pre>{WEBHOOK_EVENT_DOC}</pre>
                </div>
            </div>
        </DashboardLayout>
    }
}
