//! Allocator task timing and publication, driven by tokio's paused clock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::{Duration, Instant};

use memgrow_core::accumulator::{RunState, MIB};
use memgrow_server::allocator::Allocator;
use memgrow_server::config::AllocatorSection;
use memgrow_server::obs::metrics::ServiceMetrics;

fn section(target_count: u64, interval_secs: u64) -> AllocatorSection {
    AllocatorSection {
        target_count,
        chunk_size_mb: 1,
        interval_secs,
    }
}

#[tokio::test(start_paused = true)]
async fn seven_chunks_then_stops_on_next_tick() {
    let metrics = Arc::new(ServiceMetrics::default());
    let (allocator, handle) = Allocator::new(&section(7, 5), Arc::clone(&metrics));
    let (_tx, rx) = watch::channel(false);

    let started = Instant::now();
    let end = allocator.run(rx).await;

    assert_eq!(end, RunState::Stopped);
    // 7 allocating ticks (5s..35s) plus the stopping tick at 40s.
    assert_eq!(started.elapsed(), Duration::from_secs(40));

    let snap = handle.snapshot();
    assert_eq!(snap.count, 7);
    assert_eq!(snap.buffer_bytes, 7 * MIB as u64);
    assert_eq!(snap.state, RunState::Stopped);
    assert_eq!(metrics.allocations(), 7);
}

#[tokio::test(start_paused = true)]
async fn count_is_zero_before_first_tick_and_grows_by_one() {
    let (allocator, handle) = Allocator::new(&section(3, 5), Arc::new(ServiceMetrics::default()));
    let (_tx, rx) = watch::channel(false);
    let task = tokio::spawn(allocator.run(rx));

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(handle.snapshot().count, 0);

    let mut last = 0;
    for expected in 1..=3u64 {
        tokio::time::sleep(Duration::from_secs(5)).await;
        let snap = handle.snapshot();
        assert_eq!(snap.count, expected);
        assert!(snap.count >= last);
        assert_eq!(snap.buffer_bytes, expected * MIB as u64);
        last = snap.count;
    }
    assert_eq!(handle.snapshot().state, RunState::Running);

    assert_eq!(task.await.unwrap(), RunState::Stopped);
    assert_eq!(handle.snapshot().count, 3);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_a_running_loop() {
    let (allocator, handle) = Allocator::new(&section(1_000, 5), Arc::new(ServiceMetrics::default()));
    let (tx, rx) = watch::channel(false);
    let task = tokio::spawn(allocator.run(rx));

    tokio::time::sleep(Duration::from_millis(10_100)).await;
    tx.send(true).unwrap();

    assert_eq!(task.await.unwrap(), RunState::Running);
    assert_eq!(handle.snapshot().count, 2);
    assert_eq!(handle.snapshot().state, RunState::Running);
}

#[test]
fn ticks_after_stop_mutate_nothing() {
    let metrics = Arc::new(ServiceMetrics::default());
    let (mut allocator, handle) = Allocator::new(&section(2, 5), Arc::clone(&metrics));

    assert_eq!(allocator.tick(), RunState::Running);
    assert_eq!(allocator.tick(), RunState::Running);
    for _ in 0..3 {
        assert_eq!(allocator.tick(), RunState::Stopped);
    }

    let snap = handle.snapshot();
    assert_eq!(snap.count, 2);
    assert_eq!(snap.buffer_bytes, 2 * MIB as u64);
    assert_eq!(metrics.allocations(), 2);
}
