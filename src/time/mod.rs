//! Timeline - Deterministic timer scheduling
//!
//! One logical event loop for the whole page. Components schedule
//! one-shot and recurring callbacks in milliseconds; the host advances
//! the clock explicitly (from its frame loop or a test).
//!
//! # Pattern
//!
//! - `set_interval` / `set_timeout` return a [`TimerHandle`]
//! - `cancel()` is checked immediately before every fire, so a handle
//!   cancelled from anywhere (including another callback) never fires
//!   again
//! - Callbacks scheduled during `advance` with a due time inside the
//!   window fire in the same `advance`, in due-time order
//!
//! # Example
//!
//! ```ignore
//! use edumaster_ui::time::Timeline;
//!
//! let timeline = Timeline::new();
//! let handle = timeline.set_interval(1000, || { /* tick */ });
//!
//! timeline.advance(3000); // fires three times
//! handle.cancel();
//! timeline.advance(3000); // fires zero times
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

/// Handle to a scheduled callback.
///
/// Cancellation is guaranteed: the flag is re-checked at fire time, so
/// a cancelled timer never invokes its callback again.
#[derive(Clone)]
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    /// Cancel the timer. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether the timer has been cancelled (or refused at scheduling).
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// A handle that was never scheduled. Used for refused timers
    /// (zero period) so callers get a uniform return type.
    fn dead() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(true)),
        }
    }
}

enum Callback {
    Repeating(Rc<dyn Fn()>),
    Once(Rc<RefCell<Option<Box<dyn FnOnce()>>>>),
}

impl Callback {
    fn invoke(&self) {
        match self {
            Callback::Repeating(f) => f(),
            Callback::Once(slot) => {
                if let Some(f) = slot.borrow_mut().take() {
                    f();
                }
            }
        }
    }
}

struct Entry {
    id: u64,
    due: u64,
    period: Option<u64>,
    cancelled: Rc<Cell<bool>>,
    callback: Rc<Callback>,
}

struct Inner {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Single-threaded timer scheduler advanced explicitly by the host.
#[derive(Clone)]
pub struct Timeline {
    inner: Rc<RefCell<Inner>>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SCHEDULING
// =============================================================================

impl Timeline {
    /// Create a timeline at time zero.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                now: 0,
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Current time in milliseconds.
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Schedule a recurring callback every `period_ms`.
    ///
    /// A zero period is refused (returns an already-cancelled handle)
    /// rather than spinning.
    pub fn set_interval(&self, period_ms: u64, callback: impl Fn() + 'static) -> TimerHandle {
        if period_ms == 0 {
            return TimerHandle::dead();
        }
        self.schedule(period_ms, Some(period_ms), Callback::Repeating(Rc::new(callback)))
    }

    /// Schedule a one-shot callback after `delay_ms`.
    pub fn set_timeout(&self, delay_ms: u64, callback: impl FnOnce() + 'static) -> TimerHandle {
        self.schedule(
            delay_ms,
            None,
            Callback::Once(Rc::new(RefCell::new(Some(Box::new(callback))))),
        )
    }

    fn schedule(&self, delay_ms: u64, period: Option<u64>, callback: Callback) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + delay_ms;
        inner.entries.push(Entry {
            id,
            due,
            period,
            cancelled: cancelled.clone(),
            callback: Rc::new(callback),
        });
        TimerHandle { cancelled }
    }

    // =========================================================================
    // ADVANCING
    // =========================================================================

    /// Advance the clock by `ms`, firing every due callback in
    /// due-time order (FIFO among equal due times).
    ///
    /// The borrow on the schedule is released before each callback
    /// runs, so callbacks are free to schedule and cancel timers.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;

        loop {
            let fired = {
                let mut inner = self.inner.borrow_mut();
                inner.entries.retain(|e| !e.cancelled.get());

                let next = inner
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.id))
                    .map(|(pos, _)| pos);

                let Some(pos) = next else {
                    inner.now = target;
                    break;
                };

                inner.now = inner.entries[pos].due;
                match inner.entries[pos].period {
                    Some(period) => {
                        inner.entries[pos].due += period;
                        inner.entries[pos].callback.clone()
                    }
                    None => inner.entries.remove(pos).callback,
                }
            };

            fired.invoke();
        }
    }

    /// Number of live (not yet cancelled) scheduled entries.
    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }
}

// =============================================================================
// TESTS
// =============================================================================
