//! Background-scroll lock shared by every full-screen overlay.
//!
//! DESIGN
//! ======
//! The lock is reference counted: the first holder suppresses document
//! scrolling and the last release restores it, so overlays may nest without
//! fighting over `<body>` styles. Each overlay owns an `OverlaySlot`, which
//! guarantees its own acquire/release calls stay strictly paired no matter
//! how many exit paths (close button, backdrop, Escape) fire.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::util::scroll_lock;

/// Shared document scroll lock, cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    depth: Arc<AtomicU32>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of overlays currently holding the lock.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth.load(Ordering::Relaxed)
    }

    fn acquire(&self) {
        if self.depth.fetch_add(1, Ordering::Relaxed) == 0 {
            scroll_lock::suppress_body_scroll();
        }
    }

    fn release(&self) {
        let prev = self
            .depth
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |d| d.checked_sub(1));
        if prev == Ok(1) {
            scroll_lock::restore_body_scroll();
        }
    }
}

/// One overlay's claim on the shared lock. Holds at most one acquisition.
#[derive(Clone, Debug, Default)]
pub struct OverlaySlot {
    lock: ScrollLock,
    held: bool,
}

impl OverlaySlot {
    #[must_use]
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, held: false }
    }

    pub fn hold(&mut self) {
        if !self.held {
            self.lock.acquire();
            self.held = true;
        }
    }

    pub fn release(&mut self) {
        if self.held {
            self.lock.release();
            self.held = false;
        }
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}
