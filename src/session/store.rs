//! Session store: token lifecycle and authorization predicates
//!
//! One store exists per application lifetime. It is handed to whoever needs
//! it (the route guard reads it, the CLI drives it) instead of living in a
//! global. Network and server failures never escape the store; every
//! operation resolves to a boolean outcome plus a notified message.

use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::session::models::{
    Credentials, LoginResponse, MeResponse, RegisterResponse, Registration, User, UserRole,
};
use crate::session::notify::Notifier;
use crate::storage::TokenStorage;
use tracing::{debug, warn};

/// Client-side authentication session
pub struct SessionStore {
    api: ApiClient,
    storage: Box<dyn TokenStorage>,
    notifier: Box<dyn Notifier>,
    token: String,
    user: Option<User>,
    loading: bool,
}

impl SessionStore {
    /// Create a store, rehydrating any token persisted by a previous run.
    ///
    /// A rehydrated token means "authenticated but profile not yet
    /// confirmed" until [`check_auth`](Self::check_auth) resolves it.
    pub fn new(
        api: ApiClient,
        storage: Box<dyn TokenStorage>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let token = match storage.load() {
            Ok(token) => token.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to read persisted token: {}", e);
                String::new()
            }
        };

        Self {
            api,
            storage,
            notifier,
            token,
            user: None,
            loading: false,
        }
    }

    /// Log in with the given credentials.
    ///
    /// On success the token and profile are set together and the token is
    /// persisted. On any failure the previous session state is untouched.
    pub async fn login(&mut self, credentials: &Credentials) -> bool {
        self.loading = true;
        let outcome = self.request_login(credentials).await;
        self.loading = false;

        match outcome {
            Ok(()) => {
                self.notifier.success("Logged in");
                true
            }
            Err(e) => {
                self.notifier.failure(&Self::failure_message("Login failed", e));
                false
            }
        }
    }

    async fn request_login(&mut self, credentials: &Credentials) -> Result<()> {
        let response: LoginResponse = self
            .api
            .post_json("/auth/login", credentials, None)
            .await?;

        if !response.success {
            return Err(Error::Rejected(
                response.message.unwrap_or_else(|| "Login failed".to_string()),
            ));
        }

        let token = response
            .token
            .ok_or_else(|| Error::Rejected("Login response missing token".to_string()))?;

        // Persist before mutating so a storage failure leaves the old session intact
        self.storage.save(&token).map_err(|e| {
            warn!("Failed to persist token: {}", e);
            e
        })?;

        self.token = token;
        self.user = response.user;
        Ok(())
    }

    /// Register a new account. Success does not establish a session; the
    /// caller must log in separately.
    pub async fn register(&mut self, registration: &Registration) -> bool {
        self.loading = true;
        let outcome = self.request_register(registration).await;
        self.loading = false;

        match outcome {
            Ok(()) => {
                self.notifier.success("Registered, please log in");
                true
            }
            Err(e) => {
                self.notifier
                    .failure(&Self::failure_message("Registration failed", e));
                false
            }
        }
    }

    async fn request_register(&mut self, registration: &Registration) -> Result<()> {
        let response: RegisterResponse = self
            .api
            .post_json("/auth/register", registration, None)
            .await?;

        if !response.success {
            return Err(Error::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string()),
            ));
        }

        Ok(())
    }

    /// Clear the session. Never fails; storage removal errors are logged.
    pub fn logout(&mut self) {
        self.token.clear();
        self.user = None;

        if let Err(e) = self.storage.remove() {
            warn!("Failed to remove persisted token: {}", e);
        }

        self.notifier.success("Logged out");
    }

    /// Validate the current token against the platform.
    ///
    /// An empty token short-circuits to false without a network call. Any
    /// failure, transport or rejection, logs the session out. This is the
    /// only path that turns a stale token back into the logged-out state.
    pub async fn check_auth(&mut self) -> bool {
        if self.token.is_empty() {
            return false;
        }

        self.loading = true;
        let outcome = self.request_me().await;
        self.loading = false;

        match outcome {
            Ok(user) => {
                self.user = Some(user);
                true
            }
            Err(e) => {
                debug!("Session validation failed: {}", e);
                self.logout();
                false
            }
        }
    }

    async fn request_me(&self) -> Result<User> {
        let response: MeResponse = self.api.get_json("/auth/me", Some(&self.token)).await?;

        if !response.success {
            return Err(Error::SessionExpired);
        }

        response.user.ok_or(Error::SessionExpired)
    }

    /// Authenticated means a non-empty token; the profile may still be
    /// unconfirmed until `check_auth` runs.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Effective role, defaulting to the lowest privilege when no profile
    /// has been fetched
    pub fn role(&self) -> UserRole {
        self.user.as_ref().map(|u| u.role).unwrap_or(UserRole::Viewer)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }

    pub fn is_analyst(&self) -> bool {
        self.role().is_analyst()
    }

    pub fn can_create_strategy(&self) -> bool {
        self.role().can_create_strategy()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    fn failure_message(fallback: &str, error: Error) -> String {
        match error {
            // Server-supplied message is surfaced as-is
            Error::Rejected(message) => message,
            other => format!("{}: {}", fallback, other),
        }
    }
}
