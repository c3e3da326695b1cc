//! Click event model for asynchronous audit logging.

use chrono::{DateTime, Utc};

/// An in-memory record of one routed click.
///
/// Created in the resolve handler and passed to the background audit worker
/// via a channel. This decouples the redirect response from logging cost,
/// keeping resolution side-effect-free.
///
/// # Design
///
/// - `token` is `None` when the request degraded to the fallback redirect
/// - All client metadata is optional to handle missing headers gracefully
/// - Cloneable for sending across async boundaries
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub token: Option<String>,
    pub destination: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a new click event stamped with the current time.
    ///
    /// # Arguments
    ///
    /// - `token` - The wire token that was resolved, if any
    /// - `destination` - The redirect target that was answered
    /// - `ip` - Optional client IP address
    /// - `user_agent` - Optional User-Agent header
    /// - `referer` - Optional Referer header
    pub fn new(
        token: Option<String>,
        destination: String,
        ip: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            token,
            destination,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
            clicked_at: Utc::now(),
        }
    }

    /// Outcome label used in audit records and metrics.
    pub fn outcome(&self) -> &'static str {
        if self.token.is_some() { "routed" } else { "fallback" }
    }
}
