//! Navigation Components
//!
//! Top bar for the public pages plus the auth controls shared with the
//! dashboard header. Login, logout and the dashboard/website switches run
//! through a simulated delay while a busy indicator replaces the controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::config;
use crate::context::{use_auth, AuthContext};
use crate::delay::{Delay, TimerDelay};
use crate::fixtures;
use crate::routes::AppRoute;

/// In-flight auth or redirect action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Busy {
    LoggingIn,
    LoggingOut,
    Redirecting,
}

impl Busy {
    pub fn message(&self) -> &'static str {
        match self {
            Busy::LoggingIn => "Logging in...",
            Busy::LoggingOut => "Logging out...",
            Busy::Redirecting => "Redirecting...",
        }
    }
}

/// Log in, then land on the dashboard
fn start_login<N>(auth: AuthContext, set_busy: WriteSignal<Option<Busy>>, navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    set_busy.set(Some(Busy::LoggingIn));
    spawn_local(async move {
        match auth.login().await {
            Ok(_) => {
                let _ = set_busy.try_set(None);
                navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
            }
            Err(e) => {
                log::error!("[AUTH] Login failed: {}", e);
                let _ = set_busy.try_set(None);
            }
        }
    });
}

/// Log out, then return to the landing page
fn start_logout<N>(auth: AuthContext, set_busy: WriteSignal<Option<Busy>>, navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    set_busy.set(Some(Busy::LoggingOut));
    spawn_local(async move {
        match auth.logout().await {
            Ok(_) => {
                let _ = set_busy.try_set(None);
                navigate(AppRoute::Home.path(), NavigateOptions::default());
            }
            Err(e) => {
                log::error!("[AUTH] Logout failed: {}", e);
                let _ = set_busy.try_set(None);
            }
        }
    });
}

/// Short pause, then navigate
fn start_redirect<N>(target: AppRoute, set_busy: WriteSignal<Option<Busy>>, navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    set_busy.set(Some(Busy::Redirecting));
    spawn_local(async move {
        TimerDelay.wait(config::REDIRECT_DELAY).await;
        log::debug!("[NAV] Redirecting to {}", target.path());
        let _ = set_busy.try_set(None);
        navigate(target.path(), NavigateOptions::default());
    });
}

#[component]
pub fn BusyIndicator(busy: ReadSignal<Option<Busy>>) -> impl IntoView {
    view! {
        <span class="busy-indicator">
            <span class="spinner"></span>
            {move || busy.get().map(|b| b.message())}
        </span>
    }
}

/// Account dropdown with Logout
#[component]
pub fn AccountMenu(set_busy: WriteSignal<Option<Busy>>) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (open, set_open) = signal(false);

    view! {
        <div class="menu">
            <button class="icon-btn" title="Account" on:click=move |_| set_open.update(|v| *v = !*v)>
                "👤"
            </button>
            <div
                class="menu-dropdown"
                class:hidden=move || !open.get()
                on:mouseleave=move |_| set_open.set(false)
            >
                <div class="menu-item muted">"Profile"</div>
                <button
                    class="menu-item"
                    on:click=move |_| {
                        set_open.set(false);
                        start_logout(auth, set_busy, navigate.clone());
                    }
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}

/// Bell with the seeded notifications
#[component]
pub fn NotificationsMenu() -> impl IntoView {
    let (open, set_open) = signal(false);
    let notifications = fixtures::notifications();
    let count = notifications.len();

    view! {
        <div class="menu">
            <button class="icon-btn" title="Notifications" on:click=move |_| set_open.update(|v| *v = !*v)>
                "🔔"
                <span class="badge">{count}</span>
            </button>
            <Show when=move || open.get()>
                <div class="menu-dropdown wide" on:mouseleave=move |_| set_open.set(false)>
                    {notifications
                        .iter()
                        .map(|n| view! {
                            <div class="menu-item notification">
                                <span>{n.message.clone()}</span>
                                <small class="muted">{n.age.clone()}</small>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// "Back to Website" switch used in the dashboard header
#[component]
pub fn BackToWebsite(set_busy: WriteSignal<Option<Busy>>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <button
            class="btn outline"
            on:click=move |_| start_redirect(AppRoute::Home, set_busy, navigate.clone())
        >
            "Back to Website"
        </button>
    }
}

/// Public site navigation bar
#[component]
pub fn Navigation() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();
    let (busy, set_busy) = signal(None::<Busy>);

    let links = AppRoute::PUBLIC_NAV
        .iter()
        .map(|route| {
            let route = *route;
            let pathname = location.pathname;
            let class = move || {
                if pathname.get() == route.path() { "nav-link active" } else { "nav-link" }
            };
            view! { <a href=route.path() class=class>{route.label()}</a> }
        })
        .collect_view();

    view! {
        <header class="site-nav">
            <a href="/" class="brand">
                <span class="brand-mark">"💬"</span>
                {config::BRAND_NAME}
            </a>
            <nav class="nav-links">{links}</nav>
            <div class="nav-actions">
                {move || {
                    let navigate = navigate.clone();
                    match busy.get() {
                        Some(_) => view! { <BusyIndicator busy=busy/> }.into_any(),
                        None if auth.is_authenticated() => view! {
                            <button
                                class="btn primary"
                                on:click=move |_| start_redirect(AppRoute::Dashboard, set_busy, navigate.clone())
                            >
                                "Go to Dashboard"
                            </button>
                            <AccountMenu set_busy=set_busy/>
                        }.into_any(),
                        None => view! {
                            <button
                                class="btn primary"
                                on:click=move |_| start_login(auth, set_busy, navigate.clone())
                            >
                                "Login / Sign Up"
                            </button>
                        }.into_any(),
                    }
                }}
            </div>
        </header>
    }
}
