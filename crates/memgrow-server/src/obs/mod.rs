//! Observability: logging setup, per-request tracing, and in-process metrics.
//!
//! Metrics are kept as atomics and rendered by the `/metrics` handler; request
//! spans and log lines go through `tracing`.

pub mod metrics;
pub mod trace;
