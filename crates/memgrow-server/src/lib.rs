//! memgrow server library entry.
//!
//! Wires config, the allocator task, the status endpoint, ops endpoints, and
//! request tracing into an axum service. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod allocator;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod status;
