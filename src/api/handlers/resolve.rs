//! Handler for routing-token redirects.

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::audit::click_event::ClickEvent;
use crate::routing::{RedirectTarget, RoutingToken};
use crate::state::AppState;

/// Path prefix the resolve routes are mounted under.
pub const ROUTE_PREFIX: &str = "/r";

/// Redirects a routing token to its second-stage destination.
///
/// # Endpoint
///
/// `GET /r/{target}`, plus `/r` and `/r/` for the bare-slug fallback.
///
/// # Request Flow
///
/// 1. Take the token segment verbatim from the request path
/// 2. Resolve it against the fixed destination base
/// 3. Send a click event to the background audit worker (fire-and-forget)
/// 4. Return 302 Found with the computed `Location`
///
/// # Token Handling
///
/// The segment is NOT percent-decoded before resolution. Axum's `Path`
/// extractor decodes eagerly, so the handler reads the token out of
/// [`Uri::path`] itself: `/r/a%20b` carries the token `a%20b`, which the
/// resolver re-encodes to `a%2520b`.
///
/// # Errors
///
/// None. A missing or empty token degrades to a redirect at the destination
/// root with the same 302 status, so an observer cannot distinguish probing
/// requests from real clicks.
pub async fn resolve_handler(
    uri: Uri,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    let token = raw_token(uri.path()).and_then(RoutingToken::new);

    if token.is_none() {
        debug!("no routing token in '{}', degrading to destination root", uri.path());
    }

    let target = state.resolver.resolve(token.as_ref());

    let event = ClickEvent::new(
        token.map(|t| t.raw().to_string()),
        target.as_str().to_string(),
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    // Fire-and-forget: a full audit queue drops the event, never the redirect.
    let _ = state.click_tx.try_send(event);

    found(&target)
}

/// Extracts the raw token segment from a `/r/...` path.
///
/// Returns `None` for `/r` and `/r/`. Embedded slashes stay part of the token
/// (the route uses a wildcard capture) and are encoded away during resolution.
fn raw_token(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(ROUTE_PREFIX)?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    (!rest.is_empty()).then_some(rest)
}

/// Builds a 302 response. `axum::response::Redirect` only offers the
/// 303/307/308 constructors, and the status must stay 302 on every branch.
fn found(target: &RedirectTarget) -> Response {
    let location = HeaderValue::from_str(target.as_str())
        .unwrap_or_else(|_| HeaderValue::from_static("/"));
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_token_extraction() {
        assert_eq!(raw_token("/r/abc123"), Some("abc123"));
        assert_eq!(raw_token("/r/a%20b"), Some("a%20b"));
        assert_eq!(raw_token("/r/a/b/c"), Some("a/b/c"));
    }

    #[test]
    fn test_raw_token_missing_or_empty() {
        assert_eq!(raw_token("/r"), None);
        assert_eq!(raw_token("/r/"), None);
        assert_eq!(raw_token("/health"), None);
    }

    #[test]
    fn test_raw_token_is_not_decoded() {
        // The wire form passes through untouched.
        assert_eq!(raw_token("/r/caf%C3%A9"), Some("caf%C3%A9"));
    }
}
