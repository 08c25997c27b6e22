//! Accumulator growth and terminal-state tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use memgrow_core::accumulator::{Accumulator, Step, MIB};

#[test]
fn starts_empty() {
    let acc = Accumulator::new(7, MIB);
    assert_eq!(acc.count(), 0);
    assert_eq!(acc.buffer_len(), 0);
    assert!(!acc.is_full());
}

#[test]
fn each_step_adds_exactly_one_chunk() {
    let chunk = 4096;
    let mut acc = Accumulator::new(5, chunk);

    for expected in 1..=5u64 {
        let before = acc.buffer_len();
        assert_eq!(acc.step(), Step::Allocated { count: expected });
        assert_eq!(acc.count(), expected);
        assert_eq!(acc.buffer_len() - before, chunk);
        assert_eq!(acc.buffer_len(), expected as usize * chunk);
    }
    assert!(acc.is_full());
}

#[test]
fn steps_after_target_do_not_mutate() {
    let mut acc = Accumulator::new(2, 128);
    acc.step();
    acc.step();

    for _ in 0..3 {
        assert_eq!(acc.step(), Step::LimitReached { target: 2 });
        assert_eq!(acc.count(), 2);
        assert_eq!(acc.buffer_len(), 256);
    }
}

#[test]
fn zero_target_is_full_from_the_start() {
    let mut acc = Accumulator::new(0, MIB);
    assert!(acc.is_full());
    assert_eq!(acc.step(), Step::LimitReached { target: 0 });
    assert_eq!(acc.buffer_len(), 0);
}

#[test]
fn seven_one_mib_chunks() {
    let mut acc = Accumulator::new(7, MIB);
    while let Step::Allocated { .. } = acc.step() {}
    assert_eq!(acc.count(), 7);
    assert_eq!(acc.buffer_len(), 7 * MIB);
}
