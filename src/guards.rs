//! Navigation guards: predicates gating entry to client views.
//!
//! DESIGN
//! ======
//! Every guard performs its own verification round-trip instead of trusting
//! cached role flags, so an out-of-band permission change is picked up on
//! the next navigation. Guards never error: any verification failure becomes
//! a deny plus a redirect issued through the injected [`Navigator`]. Several
//! guards firing within one navigation share a single round-trip via
//! [`AuthGateway::verify_for_navigation`].

use crate::auth::AuthGateway;
use crate::session::RoleFlags;

/// Client views a guard may redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Logout,
}

impl Route {
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Logout => "/logout",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Router seam: receives the redirect when a guard denies navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that renders redirects as log lines; used by the CLI front-end,
/// which has no view stack to move through.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = route.as_path(), "redirecting");
    }
}

/// Blocks the login view for already-authenticated users; redirects them to
/// the logout view.
pub async fn login_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    anti_auth_guard(auth, navigator).await
}

/// Blocks the registration view for already-authenticated users; redirects
/// them to the logout view.
pub async fn registration_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    anti_auth_guard(auth, navigator).await
}

/// Allows the logout view only for authenticated users; redirects everyone
/// else to the login view.
pub async fn logout_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    if auth.verify_for_navigation().await {
        true
    } else {
        navigator.navigate(Route::Login);
        false
    }
}

/// Allows only authenticated farm owners.
pub async fn farm_owner_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    role_guard(auth, navigator, |flags| flags.is_farm_owner).await
}

/// Allows only authenticated farm managers.
pub async fn farm_manager_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    role_guard(auth, navigator, |flags| flags.is_farm_manager).await
}

/// Allows only authenticated assistant farm managers.
pub async fn assistant_farm_manager_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    role_guard(auth, navigator, |flags| flags.is_assistant_farm_manager).await
}

/// Allows only authenticated farm workers.
pub async fn farm_worker_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    role_guard(auth, navigator, |flags| flags.is_farm_worker).await
}

async fn anti_auth_guard(auth: &AuthGateway, navigator: &dyn Navigator) -> bool {
    if auth.verify_for_navigation().await {
        navigator.navigate(Route::Logout);
        false
    } else {
        true
    }
}

async fn role_guard(auth: &AuthGateway, navigator: &dyn Navigator, role: fn(RoleFlags) -> bool) -> bool {
    if auth.verify_for_navigation().await && role(auth.session().flags()) {
        true
    } else {
        navigator.navigate(Route::Logout);
        false
    }
}

#[cfg(test)]
#[path = "guards_test.rs"]
mod tests;
