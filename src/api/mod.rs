//! HTTP client for the platform API

pub mod client;

pub use client::ApiClient;
