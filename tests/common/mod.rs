#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use click_router::prelude::{ClickEvent, Resolver};
use click_router::state::AppState;

/// Destination base every test resolver points at.
pub const DESTINATION_BASE: &str = "https://landing.example.com";

pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(Arc::new(Resolver::new(DESTINATION_BASE)), tx);

    (state, rx)
}
