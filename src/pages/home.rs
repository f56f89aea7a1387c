//! Landing page

use leptos::prelude::*;

use crate::components::Navigation;
use crate::fixtures::{HOME_FEATURES, TESTIMONIALS};
use crate::routes::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <section class="hero">
                <h1>"WhatsApp Business API"</h1>
                <p class="hero-sub">"Connect with your customers through WhatsApp"</p>
                <div class="hero-actions">
                    <a class="btn light" href=AppRoute::Pricing.path()>"Get Started"</a>
                    <a class="btn outline light" href=AppRoute::Features.path()>"Learn More"</a>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">"Features"</h2>
                <div class="grid four">
                    {HOME_FEATURES
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

            <section class="section alt">
                <h2 class="section-title">"What Our Customers Say"</h2>
                <div class="grid three">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <div class="card testimonial">
                                <div class="testimonial-head">
                                    <span class="avatar">{t.initials}</span>
                                    <div>
                                        <strong>{t.name}</strong>
                                        <div class="muted">{t.role}</div>
                                    </div>
                                </div>
                                <div class="stars">"★★★★★"</div>
                                <p>{t.content}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Get Started?"</h2>
                <p>"Join thousands of businesses already using our platform"</p>
                <a class="btn light" href=AppRoute::Pricing.path()>"Start Free Trial"</a>
            </section>
        </div>
    }
}
