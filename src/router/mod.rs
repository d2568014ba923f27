//! Route table for the platform's navigation surface

pub mod guard;

pub use guard::{decide, navigate, AuthState, GuardDecision};

/// Behavioral metadata attached to a route
#[derive(Debug, Clone, Default)]
pub struct RouteMeta {
    /// Navigation requires an authenticated session
    pub requires_auth: bool,
    /// Navigation additionally requires the admin role
    pub requires_admin: bool,
    /// Display title, not behavioral
    pub title: Option<String>,
}

/// A navigable route
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub meta: RouteMeta,
}

impl Route {
    pub fn new(path: &str, name: &str, meta: RouteMeta) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            meta,
        }
    }
}

/// Static route registry, defined at startup and read-only thereafter
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    login_path: String,
    register_path: String,
    landing_path: String,
}

impl RouteTable {
    pub fn new(
        routes: Vec<Route>,
        login_path: &str,
        register_path: &str,
        landing_path: &str,
    ) -> Self {
        Self {
            routes,
            login_path: login_path.to_string(),
            register_path: register_path.to_string(),
            landing_path: landing_path.to_string(),
        }
    }

    /// The quant platform's route table
    pub fn platform() -> Self {
        let routes = vec![
            Route::new("/login", "Login", RouteMeta::default()),
            Route::new("/register", "Register", RouteMeta::default()),
            Route::new(
                "/",
                "Home",
                RouteMeta {
                    requires_auth: true,
                    title: Some("Home".to_string()),
                    ..RouteMeta::default()
                },
            ),
            Route::new(
                "/stock-filter",
                "StockFilter",
                RouteMeta {
                    requires_auth: true,
                    title: Some("Stock Filter".to_string()),
                    ..RouteMeta::default()
                },
            ),
            Route::new(
                "/strategy",
                "Strategy",
                RouteMeta {
                    requires_auth: true,
                    title: Some("Strategy Management".to_string()),
                    ..RouteMeta::default()
                },
            ),
            Route::new(
                "/backtest",
                "Backtest",
                RouteMeta {
                    requires_auth: true,
                    title: Some("Backtest Analysis".to_string()),
                    ..RouteMeta::default()
                },
            ),
            Route::new(
                "/user-management",
                "UserManagement",
                RouteMeta {
                    requires_auth: true,
                    requires_admin: true,
                    title: Some("User Management".to_string()),
                },
            ),
        ];

        Self::new(routes, "/login", "/register", "/")
    }

    /// Look up a route by exact path
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn register_path(&self) -> &str {
        &self.register_path
    }

    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }
}
