//! Ramp State Module - Animated counters and progress bars
//!
//! Linear interpolation from 0 to a target value over a fixed number
//! of steps. The final step lands exactly on the target (clamped, so
//! floating-point accumulation can never overshoot), after which the
//! underlying interval cancels itself.
//!
//! Re-arming restarts from 0 - the mechanism mirrors one-shot reveal
//! animations, not resumable tweens.
//!
//! # Example
//!
//! ```ignore
//! use edumaster_ui::state::ValueRamp;
//! use edumaster_ui::time::Timeline;
//!
//! let timeline = Timeline::new();
//! let ramp = ValueRamp::new(&timeline, 95.0, 2000, 60);
//!
//! ramp.start();
//! timeline.advance(2000);
//! assert_eq!(ramp.value(), 95.0); // exactly
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::time::{TimerHandle, Timeline};

// =============================================================================
// VALUE RAMP
// =============================================================================

/// Linear 0-to-target ramp over `steps` emissions in `duration_ms`.
///
/// Values are monotonically non-decreasing for a non-negative target.
pub struct ValueRamp {
    timeline: Timeline,
    value: Signal<f64>,
    target: f64,
    duration_ms: u64,
    steps: u32,
    timer: RefCell<Option<TimerHandle>>,
}

impl ValueRamp {
    /// Create an idle ramp at 0. Call [`start`](Self::start) to arm it.
    pub fn new(timeline: &Timeline, target: f64, duration_ms: u64, steps: u32) -> Self {
        Self {
            timeline: timeline.clone(),
            value: signal(0.0),
            target,
            duration_ms,
            steps,
            timer: RefCell::new(None),
        }
    }

    /// Arm (or re-arm) the ramp.
    ///
    /// Any in-flight run is cancelled and the value resets to 0 before
    /// the new run is scheduled. Zero steps or zero duration is a
    /// no-op: the value stays at 0 and nothing is scheduled.
    pub fn start(&self) {
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
        self.value.set(0.0);

        if self.steps == 0 || self.duration_ms == 0 {
            return;
        }

        let period = (self.duration_ms / u64::from(self.steps)).max(1);
        let step_size = self.target / f64::from(self.steps);
        let target = self.target;
        let steps = self.steps;
        let value = self.value.clone();
        let step = Cell::new(0u32);

        // The interval cancels itself on the final step; the handle
        // reaches the closure through this slot.
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
        let slot_for_tick = slot.clone();

        let handle = self.timeline.set_interval(period, move || {
            let k = step.get() + 1;
            step.set(k);
            if k >= steps {
                // Exact terminal value, not step_size * steps.
                value.set(target);
                if let Some(timer) = slot_for_tick.borrow_mut().take() {
                    timer.cancel();
                }
            } else {
                value.set((step_size * f64::from(k)).min(target));
            }
        });

        *slot.borrow_mut() = Some(handle.clone());
        *self.timer.borrow_mut() = Some(handle);
    }

    /// Cancel an in-flight run, keeping the current value.
    pub fn stop(&self) {
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Current value rounded for integer displays (counts, percents).
    pub fn rounded(&self) -> i64 {
        self.value.get().round() as i64
    }

    /// Reactive value.
    pub fn value_signal(&self) -> Signal<f64> {
        self.value.clone()
    }

    /// Final value the ramp lands on.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether a run is in flight.
    pub fn is_animating(&self) -> bool {
        self.timer
            .borrow()
            .as_ref()
            .is_some_and(|timer| !timer.is_cancelled())
    }
}

impl Drop for ValueRamp {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// TESTS
// =============================================================================
