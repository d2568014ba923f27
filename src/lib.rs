//! quantctl - Session core for the quant analysis platform
//!
//! This is the library interface for quantctl, providing the authentication
//! session store and the route guard used by platform clients.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod router;
pub mod session;
pub mod storage;

pub use config::Config;
pub use error::Error;
pub use router::{GuardDecision, Route, RouteTable};
pub use session::SessionStore;
