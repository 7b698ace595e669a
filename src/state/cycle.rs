//! Cycle State Module - Wrapping index for rotating content
//!
//! Drives carousels, testimonial rotators, and status-line tickers:
//! an index over a fixed number of slots, auto-advanced on a fixed
//! period and wrapped modulo the slot count.
//!
//! # API
//!
//! - `next` / `previous` / `go_to` - manual navigation (independent of
//!   the schedule)
//! - `pause` / `resume` - stop and restart auto-advance without
//!   resetting the index
//! - `index_signal` - reactive current index
//!
//! # Example
//!
//! ```ignore
//! use edumaster_ui::state::CycleScheduler;
//! use edumaster_ui::time::Timeline;
//!
//! let timeline = Timeline::new();
//! let carousel = CycleScheduler::new(&timeline, 4, 5000);
//!
//! timeline.advance(5000);
//! assert_eq!(carousel.index(), 1);
//!
//! carousel.pause();       // pointer entered
//! timeline.advance(60_000);
//! assert_eq!(carousel.index(), 1);
//! ```

use std::cell::{Cell, RefCell};

use spark_signals::{Signal, signal};

use crate::time::{TimerHandle, Timeline};

// =============================================================================
// CYCLE SCHEDULER
// =============================================================================

/// Wrapping index over `len` slots, auto-advanced every `period_ms`.
///
/// Starts running. The index always satisfies `index < len` (0 when
/// `len == 0`, in which case nothing is ever scheduled).
pub struct CycleScheduler {
    timeline: Timeline,
    index: Signal<usize>,
    len: usize,
    period_ms: u64,
    timer: RefCell<Option<TimerHandle>>,
    running: Cell<bool>,
}

impl CycleScheduler {
    /// Create a scheduler and start auto-advancing.
    pub fn new(timeline: &Timeline, len: usize, period_ms: u64) -> Self {
        let scheduler = Self {
            timeline: timeline.clone(),
            index: signal(0),
            len,
            period_ms,
            timer: RefCell::new(None),
            running: Cell::new(false),
        };
        scheduler.resume();
        scheduler
    }

    fn schedule(&self) -> Option<TimerHandle> {
        // Nothing to rotate through - never schedule, never divide.
        if self.len == 0 || self.period_ms == 0 {
            return None;
        }
        let index = self.index.clone();
        let len = self.len;
        Some(self.timeline.set_interval(self.period_ms, move || {
            index.set((index.get() + 1) % len);
        }))
    }

    // =========================================================================
    // SCHEDULE CONTROL
    // =========================================================================

    /// Stop auto-advance. The index is kept; ticks already scheduled
    /// are cancelled and never apply.
    pub fn pause(&self) {
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
        self.running.set(false);
    }

    /// Restart auto-advance from the current index. No-op if running.
    pub fn resume(&self) {
        if self.running.get() {
            return;
        }
        *self.timer.borrow_mut() = self.schedule();
        self.running.set(true);
    }

    /// Whether auto-advance is enabled.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Advance one slot, wrapping. Does not touch the schedule.
    pub fn next(&self) {
        if self.len == 0 {
            return;
        }
        self.index.set((self.index.get() + 1) % self.len);
    }

    /// Go back one slot, wrapping. Does not touch the schedule.
    pub fn previous(&self) {
        if self.len == 0 {
            return;
        }
        self.index.set((self.index.get() + self.len - 1) % self.len);
    }

    /// Jump to a slot directly (pagination dot). Out-of-range targets
    /// are ignored. Does not touch the schedule.
    pub fn go_to(&self, index: usize) {
        if index >= self.len {
            return;
        }
        self.index.set(index);
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Reactive current index.
    pub fn index_signal(&self) -> Signal<usize> {
        self.index.clone()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for CycleScheduler {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(len: usize) -> (Timeline, CycleScheduler) {
        let timeline = Timeline::new();
        let scheduler = CycleScheduler::new(&timeline, len, 5000);
        (timeline, scheduler)
    }

    #[test]
    fn test_auto_advance_wraps() {
        let (timeline, scheduler) = setup(4);

        timeline.advance(5000);
        assert_eq!(scheduler.index(), 1);

        timeline.advance(15_000);
        assert_eq!(scheduler.index(), 0); // 4 ticks, wrapped
    }

    #[test]
    fn test_next_wraps_to_zero() {
        let (_timeline, scheduler) = setup(4);

        for _ in 0..4 {
            scheduler.next();
        }
        assert_eq!(scheduler.index(), 0);
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let (_timeline, scheduler) = setup(4);

        scheduler.previous();
        assert_eq!(scheduler.index(), 3);
    }

    #[test]
    fn test_go_to_sets_index() {
        let (_timeline, scheduler) = setup(4);

        scheduler.go_to(2);
        assert_eq!(scheduler.index(), 2);

        // Out of range - ignored.
        scheduler.go_to(4);
        assert_eq!(scheduler.index(), 2);
    }

    #[test]
    fn test_pause_guarantee() {
        let (timeline, scheduler) = setup(4);

        timeline.advance(5000);
        assert_eq!(scheduler.index(), 1);

        scheduler.pause();
        assert!(!scheduler.is_running());

        // No amount of elapsed time moves the index while paused.
        timeline.advance(500_000);
        assert_eq!(scheduler.index(), 1);
    }

    #[test]
    fn test_resume_keeps_index() {
        let (timeline, scheduler) = setup(4);

        timeline.advance(10_000);
        assert_eq!(scheduler.index(), 2);

        scheduler.pause();
        timeline.advance(20_000);

        scheduler.resume();
        assert_eq!(scheduler.index(), 2); // not reset to zero

        timeline.advance(5000);
        assert_eq!(scheduler.index(), 3);
    }

    #[test]
    fn test_pause_resume_idempotent() {
        let (timeline, scheduler) = setup(4);

        scheduler.pause();
        scheduler.pause();
        scheduler.resume();
        scheduler.resume();

        timeline.advance(5000);
        assert_eq!(scheduler.index(), 1);
    }

    #[test]
    fn test_navigation_does_not_alter_schedule() {
        let (timeline, scheduler) = setup(4);

        scheduler.next();
        assert!(scheduler.is_running());

        scheduler.pause();
        scheduler.go_to(3);
        scheduler.previous();
        assert!(!scheduler.is_running());

        timeline.advance(50_000);
        assert_eq!(scheduler.index(), 2);
    }

    #[test]
    fn test_empty_cycle_is_inert() {
        let (timeline, scheduler) = setup(0);

        scheduler.next();
        scheduler.previous();
        scheduler.go_to(0);
        timeline.advance(50_000);

        assert_eq!(scheduler.index(), 0);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_single_slot_stays_put() {
        let (timeline, scheduler) = setup(1);

        timeline.advance(25_000);
        scheduler.next();
        scheduler.previous();
        assert_eq!(scheduler.index(), 0);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let timeline = Timeline::new();
        {
            let _scheduler = CycleScheduler::new(&timeline, 4, 5000);
            assert_eq!(timeline.pending(), 1);
        }
        assert_eq!(timeline.pending(), 0);
        timeline.advance(50_000); // no zombie ticks
    }

    #[test]
    fn test_independent_instances() {
        let timeline = Timeline::new();
        let fast = CycleScheduler::new(&timeline, 4, 750);
        let slow = CycleScheduler::new(&timeline, 3, 5000);

        timeline.advance(5000);
        assert_eq!(fast.index(), 2); // 6 ticks mod 4
        assert_eq!(slow.index(), 1);
    }
}
