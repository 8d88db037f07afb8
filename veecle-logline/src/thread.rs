//! Identifiers for the threads emitting log lines.
//!
//! Ids are small, process-unique numbers handed out in the order threads first log, which keeps
//! the `Thread #<id>` column short and stable for the lifetime of a thread.

use std::cell::LazyCell;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique thread ids.
static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Thread-local storage for the current thread's id.
    static THREAD_ID: LazyCell<NonZeroU64> = const { LazyCell::new(|| {
        // `Relaxed` is enough, we don't care about what specific value a thread sees.
        // We just ensure that every value is unique.
        let id = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
        // Starting at 1 and never reaching 2^64 threads keeps this non-zero.
        NonZeroU64::new(id).unwrap_or(NonZeroU64::MIN)
    }) };
}

/// Returns the id of the calling thread.
pub fn current_thread_id() -> NonZeroU64 {
    THREAD_ID.with(|thread_id| **thread_id)
}
