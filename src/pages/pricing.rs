//! Pricing page
//!
//! Billing-cycle toggle and an FAQ accordion with at most one entry open.

use leptos::prelude::*;

use crate::components::Navigation;
use crate::fixtures::{FAQS, PRICING_PLANS};
use crate::models::BillingCycle;

/// Accordion state after clicking entry `index`
fn toggle_faq(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

#[component]
fn BillingToggle(cycle: ReadSignal<BillingCycle>, set_cycle: WriteSignal<BillingCycle>) -> impl IntoView {
    let button = move |value: BillingCycle| {
        let class = move || if cycle.get() == value { "toggle-btn active" } else { "toggle-btn" };
        view! {
            <button class=class on:click=move |_| set_cycle.set(value)>{value.label()}</button>
        }
    };

    view! {
        <div class="billing-toggle">
            {button(BillingCycle::Monthly)}
            {button(BillingCycle::Yearly)}
        </div>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let (cycle, set_cycle) = signal(BillingCycle::Monthly);
    let (open_faq, set_open_faq) = signal(None::<usize>);

    let plans = PRICING_PLANS
        .iter()
        .map(|plan| {
            let class = if plan.popular { "card plan popular" } else { "card plan" };
            let cta_class = if plan.popular { "btn primary" } else { "btn outline" };
            view! {
                <div class=class>
                    {plan.popular.then(|| view! { <span class="plan-badge">"Most Popular"</span> })}
                    <h3>{plan.name}</h3>
                    <div class="plan-price">
                        <span class="price">{move || plan.price(cycle.get())}</span>
                        <span class="muted">{move || plan.period(cycle.get())}</span>
                    </div>
                    <p class="muted">{plan.description}</p>
                    <ul class="plan-features">
                        {plan.features.iter().map(|f| view! { <li>"✓ "{*f}</li> }).collect_view()}
                    </ul>
                    <button class=cta_class>{plan.cta}</button>
                </div>
            }
        })
        .collect_view();

    let faqs = FAQS
        .iter()
        .enumerate()
        .map(|(index, faq)| {
            let is_open = move || open_faq.get() == Some(index);
            view! {
                <div class=move || if is_open() { "faq open" } else { "faq" }>
                    <button
                        class="faq-question"
                        on:click=move |_| set_open_faq.update(|open| *open = toggle_faq(*open, index))
                    >
                        {faq.question}
                        <span>{move || if is_open() { "−" } else { "+" }}</span>
                    </button>
                    <Show when=is_open>
                        <p class="faq-answer">{faq.answer}</p>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <Navigation/>
            <section class="section">
                <h1 class="section-title">"Simple, Transparent Pricing"</h1>
                <p class="section-sub muted">"Choose the plan that's right for your business"</p>
                <BillingToggle cycle=cycle set_cycle=set_cycle/>
                <div class="grid three">{plans}</div>
            </section>
            <section class="section narrow">
                <h2 class="section-title">"Frequently Asked Questions"</h2>
                {faqs}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_faq_open_at_a_time() {
        let open = toggle_faq(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_faq(open, 0), Some(0));
        assert_eq!(toggle_faq(Some(0), 0), None);
    }

    #[test]
    fn test_billing_cycle_selects_price() {
        let pro = PRICING_PLANS.iter().find(|p| p.name == "Pro").unwrap();
        assert_eq!(pro.price(BillingCycle::Monthly), "$99");
        assert_eq!(pro.price(BillingCycle::Yearly), "$990");
        assert_eq!(pro.period(BillingCycle::Yearly), "/year");

        let enterprise = PRICING_PLANS.iter().find(|p| p.name == "Enterprise").unwrap();
        assert_eq!(enterprise.period(BillingCycle::Monthly), "");
    }
}
