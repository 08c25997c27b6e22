//! Shared application state for the memgrow server.
//!
//! Built once in `main` from a validated config; the allocator task is created
//! alongside it and handed back to the caller to spawn.

use std::sync::Arc;

use crate::allocator::{Allocator, AllocatorHandle};
use crate::config::ServiceConfig;
use crate::obs::metrics::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    allocator: AllocatorHandle,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metrics: Arc<ServiceMetrics>,
}

impl AppState {
    /// Build state plus the allocator that feeds it. The caller owns spawning.
    pub fn new(cfg: ServiceConfig) -> (Self, Allocator) {
        let metrics = Arc::new(ServiceMetrics::default());
        let (allocator, handle) = Allocator::new(&cfg.allocator, Arc::clone(&metrics));
        let state = Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
            allocator: handle,
        };
        (state, allocator)
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn allocator(&self) -> &AllocatorHandle {
        &self.allocator
    }
}
