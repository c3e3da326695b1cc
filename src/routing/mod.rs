//! Redirect resolution core.
//!
//! Pure and I/O-free: the token model and destination templating live here,
//! while the HTTP layer in [`crate::api`] wires them to the request path and
//! the audit pipeline.
//!
//! # Resolution Flow
//!
//! 1. The handler lifts the raw token segment out of the request path
//! 2. [`token::RoutingToken`] validates it (non-empty) and owns the wire form
//! 3. [`resolver::Resolver`] percent-encodes the token and templates it into
//!    the fixed destination base, degrading to the destination root when no
//!    valid token exists

pub mod resolver;
pub mod token;

pub use resolver::{RedirectTarget, Resolver};
pub use token::RoutingToken;
