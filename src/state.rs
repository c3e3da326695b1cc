use std::sync::Arc;
use tokio::sync::mpsc;

use crate::audit::click_event::ClickEvent;
use crate::routing::Resolver;

/// Shared application state injected into all handlers.
///
/// Everything here is read-only or a channel handle, so requests never
/// contend for a shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}

impl AppState {
    pub fn new(resolver: Arc<Resolver>, click_tx: mpsc::Sender<ClickEvent>) -> Self {
        Self { resolver, click_tx }
    }
}
