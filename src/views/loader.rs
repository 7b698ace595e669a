//! Loader view model - the boot splash.
//!
//! A progress bar filling 0 to 100 in fixed 2-point steps, and a
//! status line rotating through four messages. Both start
//! immediately; neither waits for visibility (the splash covers the
//! screen).

use crate::catalog::data;
use crate::state::{CycleScheduler, ValueRamp};
use crate::time::Timeline;

/// Total fill time for the progress bar.
pub const PROGRESS_DURATION_MS: u64 = 3000;

/// Fill steps (2 points each).
pub const PROGRESS_STEPS: u32 = 50;

/// Status-line rotation period.
pub const STATUS_PERIOD_MS: u64 = 750;

/// Boot-splash state.
pub struct Loader {
    messages: Vec<&'static str>,
    progress: ValueRamp,
    status: CycleScheduler,
}

impl Loader {
    /// Create a loader and start both animations.
    pub fn new(timeline: &Timeline) -> Self {
        let messages = data::loader_messages();
        let progress = ValueRamp::new(timeline, 100.0, PROGRESS_DURATION_MS, PROGRESS_STEPS);
        progress.start();
        let status = CycleScheduler::new(timeline, messages.len(), STATUS_PERIOD_MS);
        Self {
            messages,
            progress,
            status,
        }
    }

    /// Bar fill, 0-100.
    pub fn percent(&self) -> f64 {
        self.progress.value()
    }

    /// Status line currently shown.
    pub fn message(&self) -> &str {
        self.messages
            .get(self.status.index())
            .copied()
            .unwrap_or_default()
    }

    /// Whether the bar has filled.
    pub fn is_done(&self) -> bool {
        self.progress.value() >= 100.0
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_in_fixed_steps() {
        let timeline = Timeline::new();
        let loader = Loader::new(&timeline);

        assert_eq!(loader.percent(), 0.0);
        timeline.advance(60);
        assert_eq!(loader.percent(), 2.0);
        timeline.advance(60);
        assert_eq!(loader.percent(), 4.0);
    }

    #[test]
    fn test_completes_and_stays_done() {
        let timeline = Timeline::new();
        let loader = Loader::new(&timeline);

        timeline.advance(PROGRESS_DURATION_MS);
        assert_eq!(loader.percent(), 100.0);
        assert!(loader.is_done());

        timeline.advance(10_000);
        assert_eq!(loader.percent(), 100.0);
    }

    #[test]
    fn test_status_line_rotates() {
        let timeline = Timeline::new();
        let loader = Loader::new(&timeline);

        assert_eq!(loader.message(), "Loading courses...");

        timeline.advance(STATUS_PERIOD_MS);
        assert_eq!(loader.message(), "Preparing content...");

        timeline.advance(STATUS_PERIOD_MS * 3);
        assert_eq!(loader.message(), "Loading courses..."); // wrapped
    }

    #[test]
    fn test_bar_and_status_share_the_clock() {
        let timeline = Timeline::new();
        let loader = Loader::new(&timeline);

        timeline.advance(1500);
        assert_eq!(loader.percent(), 50.0);
        assert_eq!(loader.message(), "Initializing features...");
    }
}
