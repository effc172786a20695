//! Heap tracking for the measurement wrapper.
//!
//! [`TrackingAllocator`] wraps the system allocator and counts live and peak
//! heap bytes while a [`TraceSession`] is active. The consuming binary
//! registers it once:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: adorn_wrap::TrackingAllocator = adorn_wrap::TrackingAllocator;
//! ```
//!
//! Counting is off between sessions, so the allocator costs two relaxed
//! atomic loads per allocation when idle. Sessions are not meant to nest;
//! the measured domain is single-threaded and one call is measured at a
//! time.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(false);
static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

/// Global allocator wrapper counting bytes while a session is active
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() && ENABLED.load(Ordering::Relaxed) {
            let current = CURRENT.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            PEAK.fetch_max(current, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        if ENABLED.load(Ordering::Relaxed) {
            // Saturate: a free of memory allocated before the session began
            // must not underflow the live counter.
            let mut current = CURRENT.load(Ordering::Relaxed);
            loop {
                let next = current.saturating_sub(layout.size());
                match CURRENT.compare_exchange_weak(
                    current,
                    next,
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => break,
                    Err(observed) => current = observed,
                }
            }
        }
    }
}

/// Live and peak tracked bytes at a sampling point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySample {
    pub current: usize,
    pub peak: usize,
}

/// A scoped memory-tracking session.
///
/// Counters reset and counting starts at [`TraceSession::start`]; counting
/// stops when the session drops, on every exit path including a failing
/// measured call.
pub struct TraceSession {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl TraceSession {
    /// Reset the counters and enable tracking
    #[must_use]
    pub fn start() -> Self {
        CURRENT.store(0, Ordering::Relaxed);
        PEAK.store(0, Ordering::Relaxed);
        ENABLED.store(true, Ordering::Relaxed);
        Self {
            _not_send: std::marker::PhantomData,
        }
    }

    /// Live and peak tracked bytes since the session began
    #[must_use]
    pub fn sample(&self) -> MemorySample {
        MemorySample {
            current: CURRENT.load(Ordering::Relaxed),
            peak: PEAK.load(Ordering::Relaxed),
        }
    }

    /// Whether any session is currently tracking
    #[must_use]
    pub fn active() -> bool {
        ENABLED.load(Ordering::Relaxed)
    }
}

impl Drop for TraceSession {
    fn drop(&mut self) {
        ENABLED.store(false, Ordering::Relaxed);
    }
}
