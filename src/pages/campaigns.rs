//! Campaigns
//!
//! Create-campaign form (submit logs the draft) and the campaign history.

use leptos::prelude::*;

use crate::components::DashboardLayout;
use crate::fixtures;
use crate::models::{Audience, CampaignDraft};

/// Percentage of `part` in `total`, rounded down
fn rate(part: u32, total: u32) -> u32 {
    if total == 0 { 0 } else { part * 100 / total }
}

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let (message, set_message) = signal(String::new());
    let (audience, set_audience) = signal(Audience::All);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CampaignDraft {
            message: message.get_untracked(),
            audience: audience.get_untracked(),
        };
        log::info!("[CAMPAIGNS] Creating campaign: {:?}", draft);
        set_message.set(String::new());
    };

    let history = fixtures::campaigns()
        .into_iter()
        .map(|c| view! {
            <tr>
                <td>{c.id}</td>
                <td>{c.message}</td>
                <td>{c.audience.label()}</td>
                <td>{c.sent}</td>
                <td>{format!("{} ({}%)", c.opened, rate(c.opened, c.sent))}</td>
                <td>{format!("{} ({}%)", c.replied, rate(c.replied, c.sent))}</td>
                <td>{c.date}</td>
            </tr>
        })
        .collect_view();

    view! {
        <DashboardLayout title="Campaigns">
            <form class="card form" on:submit=on_submit>
                <h3>"Create New Campaign"</h3>
                <label>
                    "Message"
                    <textarea
                        rows="4"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Target Audience"
                    <select
                        prop:value=move || audience.get().as_str()
                        on:change=move |ev| {
                            if let Some(a) = Audience::parse(&event_target_value(&ev)) {
                                set_audience.set(a);
                            }
                        }
                    >
                        {Audience::ALL
                            .iter()
                            .map(|a| view! { <option value=a.as_str()>{a.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" class="btn primary">"Send Campaign"</button>
            </form>
            <div class="card">
                <h3>"Campaign History"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Campaign ID"</th>
                            <th>"Message"</th>
                            <th>"Audience"</th>
                            <th>"Sent"</th>
                            <th>"Opened"</th>
                            <th>"Replied"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>{history}</tbody>
                </table>
            </div>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate() {
        assert_eq!(rate(850, 1000), 85);
        assert_eq!(rate(80, 500), 16);
        assert_eq!(rate(5, 0), 0);
    }
}
