//! memgrow core: runtime-agnostic allocation state, error types, and the
//! status wire body.
//!
//! This crate owns the data model shared by the server and any tooling. It
//! carries no async runtime or transport dependencies so the accumulator can be
//! stepped and tested without a clock.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Fallible paths surface as `MemgrowError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod accumulator;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{MemgrowError, Result};
