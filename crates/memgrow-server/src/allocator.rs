//! Allocator task: grows the accumulator on a fixed interval until full.
//!
//! The task is the only writer of the [`Accumulator`]. After every tick it
//! publishes a snapshot through atomics (Release stores); HTTP handlers read
//! it through an [`AllocatorHandle`] (Acquire loads), so the reported count is
//! never torn and never goes backwards.
//!
//! Timing: the first tick fires one full interval after start. The limit check
//! runs at the top of a tick, so the tick after the last allocation is the one
//! that stops the loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::watch;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use memgrow_core::accumulator::{Accumulator, RunState, Step};

use crate::config::AllocatorSection;
use crate::obs::metrics::ServiceMetrics;

#[derive(Default)]
struct Published {
    count: AtomicU64,
    buffer_bytes: AtomicU64,
    stopped: AtomicBool,
}

/// Point-in-time view of the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub count: u64,
    pub buffer_bytes: u64,
    pub state: RunState,
}

/// Read side, cheap to clone into handlers.
#[derive(Clone)]
pub struct AllocatorHandle {
    published: Arc<Published>,
    interval: Duration,
}

impl AllocatorHandle {
    pub fn snapshot(&self) -> Snapshot {
        // `stopped` first: once it reads true the count that follows is final.
        let stopped = self.published.stopped.load(Ordering::Acquire);
        Snapshot {
            count: self.published.count.load(Ordering::Acquire),
            buffer_bytes: self.published.buffer_bytes.load(Ordering::Acquire),
            state: if stopped { RunState::Stopped } else { RunState::Running },
        }
    }

    /// Configured tick period.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Write side, owned by the spawned task.
pub struct Allocator {
    acc: Accumulator,
    published: Arc<Published>,
    metrics: Arc<ServiceMetrics>,
    interval: Duration,
}

impl Allocator {
    pub fn new(cfg: &AllocatorSection, metrics: Arc<ServiceMetrics>) -> (Self, AllocatorHandle) {
        let published = Arc::new(Published::default());
        let interval = Duration::from_secs(cfg.interval_secs);
        let handle = AllocatorHandle {
            published: Arc::clone(&published),
            interval,
        };
        let allocator = Self {
            acc: Accumulator::new(cfg.target_count, cfg.chunk_size_bytes()),
            published,
            metrics,
            interval,
        };
        (allocator, handle)
    }

    /// Tick until the target is reached or `shutdown` flips to true.
    /// Returns the final run state.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> RunState {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            target_count = self.acc.target(),
            chunk_size_bytes = self.acc.chunk_size_bytes(),
            interval_secs = self.interval.as_secs(),
            "allocator started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.tick() == RunState::Stopped {
                        return RunState::Stopped;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!(count = self.acc.count(), "allocator cancelled by shutdown");
                        return RunState::Running;
                    }
                }
            }
        }
    }

    /// One tick: allocate a chunk, or stop if the target is already held.
    pub fn tick(&mut self) -> RunState {
        let at = unix_secs();
        tracing::info!(at, count = self.acc.count(), "allocated objects");

        match self.acc.step() {
            Step::Allocated { count } => {
                let bytes = self.acc.buffer_len() as u64;
                tracing::info!(at, count, buffer_bytes = bytes, "allocated new object");
                self.published.buffer_bytes.store(bytes, Ordering::Release);
                self.published.count.store(count, Ordering::Release);
                self.metrics.record_allocation(count, bytes);
                RunState::Running
            }
            Step::LimitReached { target } => {
                tracing::info!(at, target, "objects limit reached, no new allocation, stopping ticker");
                self.published.stopped.store(true, Ordering::Release);
                self.metrics.set_allocator_stopped();
                RunState::Stopped
            }
        }
    }
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
