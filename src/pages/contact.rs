//! Contact page
//!
//! The form is presentational; submitting only logs.

use leptos::prelude::*;

use crate::components::Navigation;

#[component]
pub fn ContactPage() -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::info!("[CONTACT] Contact form submitted");
    };

    view! {
        <div class="page">
            <Navigation/>
            <section class="section narrow">
                <h1 class="section-title">"Contact Us"</h1>
                <p class="section-sub muted">"Have questions? We'd love to hear from you."</p>
                <div class="grid two">
                    <form class="card form" on:submit=on_submit>
                        <label>"Name"<input type="text" name="name"/></label>
                        <label>"Email"<input type="email" name="email"/></label>
                        <label>"Subject"<input type="text" name="subject"/></label>
                        <label>"Message"<textarea name="message" rows="4"></textarea></label>
                        <button type="submit" class="btn primary">"Send Message"</button>
                    </form>
                    <div class="card contact-info">
                        <h3>"Contact Information"</h3>
                        <p>"📧 support@whatsappbusiness.example"</p>
                        <p>"📞 +1 (555) 123-4567"</p>
                        <p>"📍 123 Business Street, Tech City, TC 12345"</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
