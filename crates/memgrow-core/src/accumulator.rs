//! Bounded memory accumulator.
//!
//! Holds a single contiguous buffer that grows by one fixed-size chunk per
//! [`Accumulator::step`] until `target` chunks have been appended. After that
//! every step is a no-op reporting [`Step::LimitReached`].
//!
//! Invariant after every step: `buffer_len() == count() * chunk_size_bytes()`.

use bytes::{BufMut, BytesMut};

/// One mebibyte, the unit chunk sizes are configured in.
pub const MIB: usize = 1024 * 1024;

/// Lifecycle of the allocator. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Stopped => "stopped",
        }
    }
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A chunk was appended; `count` is the new chunk count.
    Allocated { count: u64 },
    /// Nothing was appended because `target` chunks are already held.
    LimitReached { target: u64 },
}

#[derive(Debug)]
pub struct Accumulator {
    buffer: BytesMut,
    count: u64,
    target: u64,
    chunk_size_bytes: usize,
}

impl Accumulator {
    pub fn new(target: u64, chunk_size_bytes: usize) -> Self {
        Self {
            buffer: BytesMut::new(),
            count: 0,
            target,
            chunk_size_bytes,
        }
    }

    /// Append one zero-filled chunk unless the target is reached.
    ///
    /// The chunk is written, not just reserved, so the pages become resident.
    /// Allocation failure aborts the process.
    pub fn step(&mut self) -> Step {
        if self.is_full() {
            return Step::LimitReached { target: self.target };
        }
        self.buffer.reserve(self.chunk_size_bytes);
        self.buffer.put_bytes(0, self.chunk_size_bytes);
        self.count += 1;
        Step::Allocated { count: self.count }
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.target
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn chunk_size_bytes(&self) -> usize {
        self.chunk_size_bytes
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }
}
