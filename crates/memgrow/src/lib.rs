//! Top-level facade crate for memgrow.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use memgrow_core::*;
}

pub mod server {
    pub use memgrow_server::*;
}
