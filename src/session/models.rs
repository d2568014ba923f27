//! Session and authentication models

use serde::{Deserialize, Serialize};
use std::fmt;

/// User roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrator - full access including user management
    Admin,
    /// Analyst - can create and manage strategies
    Analyst,
    /// Viewer - read-only access
    Viewer,
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        self == UserRole::Admin
    }

    pub fn is_analyst(self) -> bool {
        self == UserRole::Analyst
    }

    /// Strategy authoring is open to admins and analysts
    pub fn can_create_strategy(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Analyst)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Analyst => write!(f, "analyst"),
            UserRole::Viewer => write!(f, "viewer"),
        }
    }
}

/// User profile returned by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

/// Login credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response envelope for POST /auth/login
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<User>,
    pub message: Option<String>,
}

/// Response envelope for POST /auth/register
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Response envelope for GET /auth/me
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: Option<User>,
    pub message: Option<String>,
}
