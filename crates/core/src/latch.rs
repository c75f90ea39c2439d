// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single-slot busy flag.
//!
//! Used to refuse a second auto-assign while one is outstanding. There is
//! no queue: a refused caller must try again after the guard is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Busy flag shared between an owner and the guard of the running request.
#[derive(Debug, Clone, Default)]
pub struct Latch {
    busy: Arc<AtomicBool>,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the latch, or returns `None` if it is already held.
    pub fn try_acquire(&self) -> Option<LatchGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LatchGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_held(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the latch when dropped, on success and failure alike.
#[derive(Debug)]
pub struct LatchGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for LatchGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "latch_tests.rs"]
mod tests;
