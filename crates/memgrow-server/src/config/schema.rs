use serde::Deserialize;
use memgrow_core::accumulator::MIB;
use memgrow_core::error::{MemgrowError, Result};

/// Upper bound on `target_count * chunk_size_mb` (64 GiB).
const MAX_TOTAL_MB: u64 = 64 * 1024;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub allocator: AllocatorSection,

    #[serde(default)]
    pub status: StatusSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
            allocator: AllocatorSection::default(),
            status: StatusSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MemgrowError::UnsupportedVersion(self.version));
        }
        self.allocator.validate()?;
        Ok(())
    }

    /// `host:port` string handed to the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllocatorSection {
    #[serde(default = "default_target_count")]
    pub target_count: u64,

    #[serde(default = "default_chunk_size_mb")]
    pub chunk_size_mb: u64,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for AllocatorSection {
    fn default() -> Self {
        Self {
            target_count: default_target_count(),
            chunk_size_mb: default_chunk_size_mb(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl AllocatorSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1024).contains(&self.chunk_size_mb) {
            return Err(MemgrowError::InvalidConfig(
                "allocator.chunk_size_mb must be between 1 and 1024".into(),
            ));
        }
        if !(1..=3600).contains(&self.interval_secs) {
            return Err(MemgrowError::InvalidConfig(
                "allocator.interval_secs must be between 1 and 3600".into(),
            ));
        }
        if self.target_count > 100_000 {
            return Err(MemgrowError::InvalidConfig(
                "allocator.target_count must be at most 100000".into(),
            ));
        }
        if self.target_count * self.chunk_size_mb > MAX_TOTAL_MB {
            return Err(MemgrowError::InvalidConfig(format!(
                "allocator.target_count * chunk_size_mb must not exceed {MAX_TOTAL_MB} MiB"
            )));
        }
        Ok(())
    }

    pub fn chunk_size_bytes(&self) -> usize {
        self.chunk_size_mb as usize * MIB
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusSection {
    #[serde(default = "default_custom_message")]
    pub custom_message: String,
}

impl Default for StatusSection {
    fn default() -> Self {
        Self {
            custom_message: default_custom_message(),
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}
fn default_target_count() -> u64 {
    7
}
fn default_chunk_size_mb() -> u64 {
    1
}
fn default_interval_secs() -> u64 {
    5
}
fn default_custom_message() -> String {
    "Hello 7 objects".into()
}
