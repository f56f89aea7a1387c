//! Routes and Route Guard
//!
//! Fixed route table. Dashboard routes require the auth flag; everything
//! unmatched falls back to the landing page.

use crate::auth::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Pricing,
    Features,
    Contact,
    Dashboard,
    Chatbot,
    Campaigns,
    Orders,
    Customers,
    Settings,
    DeveloperApi,
}

/// Result of checking a route against the auth state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render(AppRoute),
    Redirect(AppRoute),
}

impl GuardOutcome {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardOutcome::Render(_))
    }

    pub fn route(&self) -> AppRoute {
        match self {
            GuardOutcome::Render(r) | GuardOutcome::Redirect(r) => *r,
        }
    }
}

impl AppRoute {
    pub const ALL: [AppRoute; 11] = [
        AppRoute::Home,
        AppRoute::Pricing,
        AppRoute::Features,
        AppRoute::Contact,
        AppRoute::Dashboard,
        AppRoute::Chatbot,
        AppRoute::Campaigns,
        AppRoute::Orders,
        AppRoute::Customers,
        AppRoute::Settings,
        AppRoute::DeveloperApi,
    ];

    /// Links shown in the public navigation bar
    pub const PUBLIC_NAV: [AppRoute; 4] = [AppRoute::Home, AppRoute::Pricing, AppRoute::Features, AppRoute::Contact];

    /// Entries of the dashboard sidebar, in display order
    pub const SIDEBAR: [AppRoute; 8] = [
        AppRoute::Dashboard,
        AppRoute::Chatbot,
        AppRoute::Campaigns,
        AppRoute::Orders,
        AppRoute::Customers,
        AppRoute::Settings,
        AppRoute::DeveloperApi,
        AppRoute::Home,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Pricing => "/pricing",
            AppRoute::Features => "/features",
            AppRoute::Contact => "/contact",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Chatbot => "/dashboard/chatbot",
            AppRoute::Campaigns => "/dashboard/campaigns",
            AppRoute::Orders => "/dashboard/orders",
            AppRoute::Customers => "/dashboard/customers",
            AppRoute::Settings => "/dashboard/settings",
            AppRoute::DeveloperApi => "/dashboard/developer-api",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Pricing => "Pricing",
            AppRoute::Features => "Features",
            AppRoute::Contact => "Contact",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Chatbot => "Chatbot",
            AppRoute::Campaigns => "Campaigns",
            AppRoute::Orders => "Orders",
            AppRoute::Customers => "Customers",
            AppRoute::Settings => "Settings",
            AppRoute::DeveloperApi => "Developer API",
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            AppRoute::Home | AppRoute::Pricing | AppRoute::Features | AppRoute::Contact
        )
    }

    /// Exact path match, tolerating one trailing slash
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// Route that is actually rendered for `path`
    pub fn resolve(path: &str, state: AuthState) -> AppRoute {
        match Self::from_path(path) {
            Some(route) => guard(route, state).route(),
            None => AppRoute::Home,
        }
    }
}

/// Protected routes need the auth flag; without it the landing page is shown
pub fn guard(route: AppRoute, state: AuthState) -> GuardOutcome {
    if route.is_protected() && !state.is_authenticated() {
        GuardOutcome::Redirect(AppRoute::Home)
    } else {
        GuardOutcome::Render(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_route_redirects_when_logged_out() {
        let outcome = guard(AppRoute::Dashboard, AuthState::Unauthenticated);
        assert_eq!(outcome, GuardOutcome::Redirect(AppRoute::Home));
        assert_eq!(AppRoute::resolve("/dashboard", AuthState::Unauthenticated), AppRoute::Home);
        assert_eq!(AppRoute::resolve("/dashboard/settings", AuthState::Unauthenticated), AppRoute::Home);
    }

    #[test]
    fn test_protected_route_renders_when_logged_in() {
        let outcome = guard(AppRoute::Dashboard, AuthState::Authenticated);
        assert!(outcome.is_render());
        assert_eq!(AppRoute::resolve("/dashboard", AuthState::Authenticated), AppRoute::Dashboard);
        assert_eq!(AppRoute::resolve("/dashboard/orders/", AuthState::Authenticated), AppRoute::Orders);
    }

    #[test]
    fn test_public_routes_ignore_auth() {
        for route in AppRoute::PUBLIC_NAV {
            assert!(!route.is_protected());
            assert_eq!(guard(route, AuthState::Unauthenticated), GuardOutcome::Render(route));
        }
    }

    #[test]
    fn test_unmatched_paths_fall_back_home() {
        assert_eq!(AppRoute::from_path("/nope"), None);
        assert_eq!(AppRoute::resolve("/nope", AuthState::Authenticated), AppRoute::Home);
        assert_eq!(AppRoute::resolve("/chatbot", AuthState::Authenticated), AppRoute::Home);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
    }
}
