//! User-facing notifications emitted by session operations
//!
//! The front-end surfaces login/logout outcomes as toast messages. The
//! session store reports them through this trait so the CLI can print them
//! and tests can capture them.

/// Sink for success/failure notifications
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Notifier printing colored terminal output
#[derive(Debug, Default)]
pub struct CliNotifier;

impl Notifier for CliNotifier {
    fn success(&self, message: &str) {
        crate::cli::output::success(message);
    }

    fn failure(&self, message: &str) {
        crate::cli::output::error(message);
    }
}

/// Notifier that discards all messages
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}
    fn failure(&self, _message: &str) {}
}
