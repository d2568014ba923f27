//! Authentication session management

pub mod models;
pub mod notify;
pub mod store;

pub use models::{Credentials, Registration, User, UserRole};
pub use notify::{CliNotifier, Notifier, NullNotifier};
pub use store::SessionStore;
