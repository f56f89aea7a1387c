//! WhatsApp Business Frontend App
//!
//! Root component: provides auth and store contexts, and maps paths to pages.
//! Dashboard routes are guarded by the session auth flag.

use leptos::prelude::*;
use leptos_router::components::{ProtectedRoute, Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::context::AuthContext;
use crate::pages::*;
use crate::routes::AppRoute;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    let entry = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| AppRoute::resolve(&path, auth.state.get_untracked()));
    log::info!("[APP] Starting, landing on {:?}", entry);

    // Provide context to all children
    provide_context(auth);
    provide_context(Store::new(AppState::seeded()));

    let unauthenticated_to = || AppRoute::Home.path();

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/pricing") view=PricingPage/>
                <Route path=path!("/features") view=FeaturesPage/>
                <Route path=path!("/contact") view=ContactPage/>
                <ProtectedRoute
                    path=path!("/dashboard")
                    condition=move || Some(auth.allows(AppRoute::Dashboard))
                    redirect_path=unauthenticated_to
                    view=DashboardPage
                />
                <ProtectedRoute
                    path=path!("/dashboard/chatbot")
                    condition=move || Some(auth.allows(AppRoute::Chatbot))
                    redirect_path=unauthenticated_to
                    view=ChatbotPage
                />
                <ProtectedRoute
                    path=path!("/dashboard/campaigns")
                    condition=move || Some(auth.allows(AppRoute::Campaigns))
                    redirect_path=unauthenticated_to
                    view=CampaignsPage
                />
                <ProtectedRoute
                    path=path!("/dashboard/orders")
                    condition=move || Some(auth.allows(AppRoute::Orders))
                    redirect_path=unauthenticated_to
                    view=OrdersPage
                />
                <ProtectedRoute
                    path=path!("/dashboard/customers")
                    condition=move || Some(auth.allows(AppRoute::Customers))
                    redirect_path=unauthenticated_to
                    view=CustomersPage
                />
                <ProtectedRoute
                    path=path!("/dashboard/settings")
                    condition=move || Some(auth.allows(AppRoute::Settings))
                    redirect_path=unauthenticated_to
                    view=SettingsPage
                />
                <ProtectedRoute
                    path=path!("/dashboard/developer-api")
                    condition=move || Some(auth.allows(AppRoute::DeveloperApi))
                    redirect_path=unauthenticated_to
                    view=DeveloperApiPage
                />
            </Routes>
        </Router>
    }
}
