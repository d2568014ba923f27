//! Session store lifecycle tests against a stub auth server
//!
//! The stub implements the platform's three auth endpoints on an ephemeral
//! port: password "good" logs in (username "admin" gets the admin role,
//! anyone else is an analyst), password "bad" is rejected with message
//! "invalid", and /auth/me accepts only the token the stub issued.

use std::sync::{Arc, Mutex};

use axum::extract::Json;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use quantctl::api::ApiClient;
use quantctl::session::{Credentials, Notifier, Registration, SessionStore, UserRole};
use quantctl::storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage};

const ISSUED_TOKEN: &str = "T1";

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login_handler(Json(body): Json<LoginBody>) -> Json<Value> {
    if body.password == "good" {
        let role = if body.username == "admin" {
            "admin"
        } else {
            "analyst"
        };
        Json(json!({
            "success": true,
            "token": ISSUED_TOKEN,
            "user": { "id": "u1", "username": body.username, "role": role }
        }))
    } else {
        Json(json!({ "success": false, "message": "invalid" }))
    }
}

#[derive(Deserialize)]
struct RegisterBody {
    username: String,
}

async fn register_handler(Json(body): Json<RegisterBody>) -> Json<Value> {
    if body.username == "taken" {
        Json(json!({ "success": false, "message": "username taken" }))
    } else {
        Json(json!({ "success": true, "message": "registered" }))
    }
}

async fn me_handler(headers: HeaderMap) -> Json<Value> {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ISSUED_TOKEN))
        .unwrap_or(false);

    if authorized {
        Json(json!({
            "success": true,
            "user": { "id": "u1", "username": "admin", "role": "admin" }
        }))
    } else {
        Json(json!({ "success": false, "message": "invalid token" }))
    }
}

/// Start the stub server on an ephemeral port, returning its base URL
async fn spawn_stub_server() -> String {
    let app = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/me", get(me_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    format!("http://{}", addr)
}

/// Notifier capturing messages for assertions
#[derive(Default, Clone)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn failure(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

impl RecordingNotifier {
    fn contains(&self, needle: &str) -> bool {
        self.messages.lock().unwrap().iter().any(|m| m == needle)
    }
}

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn store_for(base_url: &str, storage: MemoryTokenStorage) -> (SessionStore, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let api = ApiClient::from_base_url(base_url).expect("Failed to build client");
    let store = SessionStore::new(api, Box::new(storage), Box::new(notifier.clone()));
    (store, notifier)
}

#[tokio::test]
async fn test_login_success_sets_token_and_role() {
    let base = spawn_stub_server().await;
    let (mut store, _notifier) = store_for(&base, MemoryTokenStorage::new());

    assert!(store.login(&credentials("admin", "good")).await);
    assert_eq!(store.token(), ISSUED_TOKEN);
    assert!(store.is_authenticated());
    assert!(store.is_admin());
    assert!(!store.loading());
}

#[tokio::test]
async fn test_login_persists_token_to_storage() {
    let base = spawn_stub_server().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let token_path = dir.path().join("token");

    let api = ApiClient::from_base_url(&base).expect("Failed to build client");
    let mut store = SessionStore::new(
        api,
        Box::new(FileTokenStorage::new(token_path.clone())),
        Box::new(RecordingNotifier::default()),
    );

    assert!(store.login(&credentials("alice", "good")).await);

    // Durable storage holds the same value the store does
    let on_disk = FileTokenStorage::new(token_path).load().expect("load");
    assert_eq!(on_disk.as_deref(), Some(ISSUED_TOKEN));
}

#[tokio::test]
async fn test_login_rejected_leaves_state_and_surfaces_message() {
    let base = spawn_stub_server().await;
    let (mut store, notifier) = store_for(&base, MemoryTokenStorage::new());

    assert!(!store.login(&credentials("a", "bad")).await);
    assert_eq!(store.token(), "");
    assert!(!store.is_authenticated());
    assert!(!store.loading());
    assert!(notifier.contains("invalid"));
}

#[tokio::test]
async fn test_failed_login_preserves_existing_session() {
    let base = spawn_stub_server().await;
    let (mut store, _notifier) =
        store_for(&base, MemoryTokenStorage::with_token(ISSUED_TOKEN));

    assert!(store.check_auth().await);
    assert!(!store.login(&credentials("a", "bad")).await);

    // The prior session is untouched by the rejected attempt
    assert_eq!(store.token(), ISSUED_TOKEN);
    assert!(store.is_admin());
}

#[tokio::test]
async fn test_login_as_analyst_grants_strategy_but_not_admin() {
    let base = spawn_stub_server().await;
    let (mut store, _notifier) = store_for(&base, MemoryTokenStorage::new());

    assert!(store.login(&credentials("alice", "good")).await);
    assert_eq!(store.role(), UserRole::Analyst);
    assert!(store.is_analyst());
    assert!(store.can_create_strategy());
    assert!(!store.is_admin());
}

#[tokio::test]
async fn test_register_success_does_not_establish_session() {
    let base = spawn_stub_server().await;
    let (mut store, _notifier) = store_for(&base, MemoryTokenStorage::new());

    let registration = Registration {
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        password: "secret".to_string(),
    };

    assert!(store.register(&registration).await);
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
    assert!(!store.loading());
}

#[tokio::test]
async fn test_register_rejected_surfaces_server_message() {
    let base = spawn_stub_server().await;
    let (mut store, notifier) = store_for(&base, MemoryTokenStorage::new());

    let registration = Registration {
        username: "taken".to_string(),
        email: "taken@example.com".to_string(),
        password: "secret".to_string(),
    };

    assert!(!store.register(&registration).await);
    assert!(notifier.contains("username taken"));
}

#[tokio::test]
async fn test_logout_clears_session_and_storage() {
    let base = spawn_stub_server().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let token_path = dir.path().join("token");

    let api = ApiClient::from_base_url(&base).expect("Failed to build client");
    let mut store = SessionStore::new(
        api,
        Box::new(FileTokenStorage::new(token_path.clone())),
        Box::new(RecordingNotifier::default()),
    );

    assert!(store.login(&credentials("admin", "good")).await);
    store.logout();

    assert_eq!(store.token(), "");
    assert!(store.user().is_none());
    assert!(FileTokenStorage::new(token_path)
        .load()
        .expect("load")
        .is_none());
}

#[tokio::test]
async fn test_check_auth_confirms_rehydrated_token() {
    let base = spawn_stub_server().await;
    let (mut store, _notifier) =
        store_for(&base, MemoryTokenStorage::with_token(ISSUED_TOKEN));

    // Authenticated but unconfirmed until the validation round-trip
    assert!(store.is_authenticated());
    assert!(store.user().is_none());

    assert!(store.check_auth().await);
    assert!(store.user().is_some());
    assert_eq!(store.role(), UserRole::Admin);
    assert!(!store.loading());
}

#[tokio::test]
async fn test_check_auth_rejection_logs_out() {
    let base = spawn_stub_server().await;
    let (mut store, _notifier) = store_for(&base, MemoryTokenStorage::with_token("STALE"));

    assert!(store.is_authenticated());
    assert!(!store.check_auth().await);

    // The rejected token is fully cleared
    assert_eq!(store.token(), "");
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn test_session_survives_restart_via_token_file() {
    let base = spawn_stub_server().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let token_path = dir.path().join("token");

    {
        let api = ApiClient::from_base_url(&base).expect("Failed to build client");
        let mut store = SessionStore::new(
            api,
            Box::new(FileTokenStorage::new(token_path.clone())),
            Box::new(RecordingNotifier::default()),
        );
        assert!(store.login(&credentials("admin", "good")).await);
    }

    // A fresh store rehydrates the token and validates it successfully
    let api = ApiClient::from_base_url(&base).expect("Failed to build client");
    let mut store = SessionStore::new(
        api,
        Box::new(FileTokenStorage::new(token_path)),
        Box::new(RecordingNotifier::default()),
    );
    assert!(store.is_authenticated());
    assert!(store.check_auth().await);
    assert!(store.is_admin());
}
