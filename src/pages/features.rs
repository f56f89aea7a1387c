//! Product features page

use leptos::prelude::*;

use crate::components::Navigation;
use crate::fixtures::PRODUCT_FEATURES;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <section class="section">
                <h1 class="section-title">"Powerful Features for Your Business"</h1>
                <p class="section-sub muted">
                    "Everything you need to automate and scale your customer communication on WhatsApp"
                </p>
                <div class="grid three">
                    {PRODUCT_FEATURES
                        .iter()
                        .map(|f| view! {
                            <div class="card feature">
                                <h3>{f.title}</h3>
                                <p class="muted">{f.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
