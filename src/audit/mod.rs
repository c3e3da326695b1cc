//! Asynchronous click audit pipeline.
//!
//! The service persists nothing, so the audit trail is a structured log
//! stream plus counters rather than a database.
//!
//! # Click Processing Flow
//!
//! 1. The resolve handler answers the redirect
//! 2. A [`click_event::ClickEvent`] is sent to a bounded channel (non-blocking;
//!    a full queue drops the event, never the response)
//! 3. [`click_worker::run_click_worker`] writes one audit record per click

pub mod click_event;
pub mod click_worker;
