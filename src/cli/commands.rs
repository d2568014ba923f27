//! CLI command implementations

use anyhow::Result;
use serde::Serialize;
use std::fs;

use crate::api::ApiClient;
use crate::cli::{error, info, print_route_table, print_user_detail, success, warn, OutputFormat};
use crate::config::{self, Config};
use crate::router::{self, GuardDecision, Route, RouteTable};
use crate::session::{CliNotifier, Credentials, Registration, SessionStore};
use crate::storage::FileTokenStorage;

/// Initialize a new quantctl.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("quantctl.toml");

    if config_path.exists() {
        warn("quantctl.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created quantctl.toml");
    info("Edit the configuration file and run 'quantctl login --username <name>' to sign in");

    Ok(())
}

/// Log in and persist the session token
pub async fn login(username: &str, password: Option<String>) -> Result<()> {
    let config = config::load_config()?;
    let mut store = build_store(&config)?;

    let credentials = Credentials {
        username: username.to_string(),
        password: resolve_password(password, false)?,
    };

    if !store.login(&credentials).await {
        anyhow::bail!("login did not succeed");
    }

    if let Some(user) = store.user() {
        info(&format!("Signed in as {} ({})", user.username, user.role));
    }

    Ok(())
}

/// Register a new account; does not establish a session
pub async fn register(username: &str, email: &str, password: Option<String>) -> Result<()> {
    let config = config::load_config()?;
    let mut store = build_store(&config)?;

    let registration = Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: resolve_password(password, true)?,
    };

    if !store.register(&registration).await {
        anyhow::bail!("registration did not succeed");
    }

    Ok(())
}

/// Log out and remove the persisted token
pub async fn logout() -> Result<()> {
    let config = config::load_config()?;
    let mut store = build_store(&config)?;

    store.logout();
    Ok(())
}

/// Validate the session and show the current user
pub async fn whoami(format: OutputFormat) -> Result<()> {
    let config = config::load_config()?;
    let mut store = build_store(&config)?;

    if !store.check_auth().await {
        error("Not logged in");
        anyhow::bail!("no valid session");
    }

    // check_auth returning true guarantees a fetched profile
    match store.user() {
        Some(user) => match format {
            OutputFormat::Table => print_user_detail(user),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(user)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(user)?),
        },
        None => anyhow::bail!("session validated but no profile returned"),
    }

    Ok(())
}

/// Check whether the persisted session is still valid
pub async fn check() -> Result<()> {
    let config = config::load_config()?;
    let mut store = build_store(&config)?;

    if !store.is_authenticated() {
        info("No session token stored; not logged in");
        return Ok(());
    }

    if store.check_auth().await {
        let role = store.role();
        success(&format!("Session is valid (role: {})", role));
    } else {
        warn("Session token was rejected and has been cleared");
    }

    Ok(())
}

/// Serializable view of a route for json/yaml output
#[derive(Serialize)]
struct RouteView<'a> {
    path: &'a str,
    name: &'a str,
    title: Option<&'a str>,
    requires_auth: bool,
    requires_admin: bool,
}

impl<'a> From<&'a Route> for RouteView<'a> {
    fn from(route: &'a Route) -> Self {
        Self {
            path: &route.path,
            name: &route.name,
            title: route.meta.title.as_deref(),
            requires_auth: route.meta.requires_auth,
            requires_admin: route.meta.requires_admin,
        }
    }
}

/// List the platform's routes and their access requirements
pub async fn routes(format: OutputFormat) -> Result<()> {
    let table = RouteTable::platform();

    match format {
        OutputFormat::Table => print_route_table(table.routes()),
        OutputFormat::Json => {
            let views: Vec<RouteView> = table.routes().iter().map(Into::into).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Yaml => {
            let views: Vec<RouteView> = table.routes().iter().map(Into::into).collect();
            print!("{}", serde_yaml::to_string(&views)?);
        }
    }

    Ok(())
}

/// Simulate a navigation through the route guard
pub async fn navigate(path: &str) -> Result<()> {
    let config = config::load_config()?;
    let mut store = build_store(&config)?;

    // Guard decisions read resolved state only, so settle the profile first
    if store.is_authenticated() {
        store.check_auth().await;
    }

    let table = RouteTable::platform();
    match router::navigate(&table, path, &store) {
        GuardDecision::Allow => success(&format!("Navigation to {} allowed", path)),
        GuardDecision::Redirect(to) => warn(&format!("Navigation to {} redirects to {}", path, to)),
    }

    Ok(())
}

fn build_store(config: &Config) -> Result<SessionStore> {
    let api = ApiClient::new(&config.api)?;
    let storage = FileTokenStorage::new(config.storage.token_path.clone());
    Ok(SessionStore::new(
        api,
        Box::new(storage),
        Box::new(CliNotifier),
    ))
}

fn resolve_password(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }

    Ok(prompt.interact()?)
}
