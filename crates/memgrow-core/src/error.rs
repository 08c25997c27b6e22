//! Shared error type across memgrow crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MemgrowError>;

/// Unified error type used by core and server.
///
/// Every variant is fatal at startup; the service has no recoverable error
/// path once it is serving.
#[derive(Debug, Error)]
pub enum MemgrowError {
    #[error("config: {0}")]
    Config(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("server failed: {0}")]
    Serve(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MemgrowError {
    /// Stable short code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            MemgrowError::Config(_) => "CONFIG",
            MemgrowError::InvalidConfig(_) => "INVALID_CONFIG",
            MemgrowError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            MemgrowError::Bind(_) => "BIND",
            MemgrowError::Serve(_) => "SERVE",
            MemgrowError::Internal(_) => "INTERNAL",
        }
    }
}
