//! # Click Router
//!
//! A stateless indirection and click-routing service built with Axum.
//!
//! The service exposes one public surface: `GET /r/{target}` takes an opaque
//! routing token from the path, percent-encodes it, and answers 302 toward a
//! fixed second-stage destination (`{base}/login/{token}`). Missing or empty
//! tokens degrade to the destination root with the same status code, so every
//! caller observes ordinary redirect behavior and nothing else.
//!
//! ## Architecture
//!
//! - **Routing core** ([`routing`]) - Pure token model and destination
//!   templating, no I/O
//! - **Audit** ([`audit`]) - Asynchronous click audit pipeline
//! - **API layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Runtime** ([`config`], [`server`]) - Environment configuration and
//!   server lifecycle
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the second-stage landing origin
//! export DESTINATION_BASE="https://landing.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod audit;
pub mod config;
pub mod routes;
pub mod routing;
pub mod server;
pub mod state;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::audit::click_event::ClickEvent;
    pub use crate::routing::{RedirectTarget, Resolver, RoutingToken};
    pub use crate::state::AppState;
}
