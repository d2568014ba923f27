//! CLI interface for quantctl

pub mod commands;
pub mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "quantctl")]
#[command(version = "0.3.0")]
#[command(about = "Command-line client for the quant analysis platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new quantctl.toml configuration file
    Init,

    /// Log in to the platform and persist the session token
    Login {
        /// Username to log in as
        #[arg(short, long)]
        username: String,

        /// Password (prompted interactively when omitted)
        #[arg(short, long, env = "QUANTCTL_PASSWORD")]
        password: Option<String>,
    },

    /// Register a new account (does not log in)
    Register {
        /// Username for the new account
        #[arg(short, long)]
        username: String,

        /// Email address for the new account
        #[arg(short, long)]
        email: String,

        /// Password (prompted interactively when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out and remove the persisted session token
    Logout,

    /// Validate the session and show the current user
    Whoami {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Check whether the persisted session is still valid
    Check,

    /// List the platform's routes and their access requirements
    Routes {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Simulate a navigation through the route guard
    Navigate {
        /// Target path, e.g. /user-management
        path: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
