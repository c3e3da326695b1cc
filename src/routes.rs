//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /r/{target}` - Routing-token redirect (wildcard capture, so a token
//!   containing slashes still resolves to a single encoded segment)
//! - `GET /r`, `GET /r/` - Bare-slug fallback redirect
//! - `GET /health`      - Health check: click queue, resolver
//!
//! Every `/r` route answers 302. The redirect surface deliberately carries no
//! authentication or rate limiting: any non-redirect response (401, 429)
//! would let an observer distinguish request classes.

use crate::api::handlers::{health_handler, resolve_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/r", get(resolve_handler))
        .route("/r/", get(resolve_handler))
        .route("/r/{*target}", get(resolve_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
