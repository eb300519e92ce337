//! Per-view request sequence numbers.

use crate::state::ViewKind;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues monotonically increasing sequence numbers, one counter per view.
///
/// Every refresh takes a number when its request is issued; the store uses
/// it to tell a late response from a newer one.
#[derive(Debug, Default)]
pub struct Sequencer {
    counters: [AtomicU64; 4],
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next number for `view`. The first is 1.
    pub fn next(&self, view: ViewKind) -> u64 {
        self.counters[view.index()].fetch_add(1, Ordering::Relaxed) + 1
    }
}
