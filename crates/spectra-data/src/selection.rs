//! Recency ordering for selections

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing tags each time a spectrum is selected
///
/// Whichever spectrum holds the current tag was selected most recently.
/// Share one counter across everything that should be ranked together.
#[derive(Debug, Default)]
pub struct SelectionCounter {
    last: AtomicU64,
}

impl SelectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next tag, starting at 1
    pub fn next_tag(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The most recently issued tag, 0 if none
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.last.store(0, Ordering::Relaxed);
    }
}
