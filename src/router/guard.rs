//! Navigation guard
//!
//! The guard is stateless and synchronous: it reads already-resolved session
//! state and never awaits. It re-evaluates on every navigation, so session
//! mutations (login, logout, failed validation) take effect on the next
//! attempt without any coordination.

use crate::router::{Route, RouteTable};
use crate::session::SessionStore;

/// Read-only view of the session, all the guard is allowed to see
pub trait AuthState {
    fn is_authenticated(&self) -> bool;
    fn is_admin(&self) -> bool;
}

impl AuthState for SessionStore {
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }

    fn is_admin(&self) -> bool {
        SessionStore::is_admin(self)
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation proceeds to the requested route
    Allow,
    /// Navigation is redirected to another path
    Redirect(String),
}

/// Decide whether a navigation to `route` may proceed.
///
/// Checks are ordered; the first match wins. Authentication is checked
/// before the admin requirement so an unauthenticated user hitting an
/// admin-only route lands on the login page rather than being bounced to
/// the landing route.
pub fn decide(table: &RouteTable, route: &Route, session: &dyn AuthState) -> GuardDecision {
    if route.meta.requires_auth && !session.is_authenticated() {
        return GuardDecision::Redirect(table.login_path().to_string());
    }

    if (route.path == table.login_path() || route.path == table.register_path())
        && session.is_authenticated()
    {
        return GuardDecision::Redirect(table.landing_path().to_string());
    }

    if route.meta.requires_admin && !session.is_admin() {
        return GuardDecision::Redirect(table.landing_path().to_string());
    }

    GuardDecision::Allow
}

/// Resolve a raw path and apply the guard.
///
/// Unknown paths take the table's catch-all rule and redirect to the
/// landing route.
pub fn navigate(table: &RouteTable, path: &str, session: &dyn AuthState) -> GuardDecision {
    match table.resolve(path) {
        Some(route) => decide(table, route, session),
        None => GuardDecision::Redirect(table.landing_path().to_string()),
    }
}
