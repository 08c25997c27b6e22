//! Wire-level contracts.

pub mod status;

pub use status::StatusBody;
