//! Error types for quantctl

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("Session expired or token rejected")]
    SessionExpired,

    #[error("Config file not found. Run 'quantctl init' first.")]
    ConfigNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
