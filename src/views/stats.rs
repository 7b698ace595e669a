//! Stats strip view model - the animated home-page counters.
//!
//! Each statistic counts up from 0 to its value over 2 seconds in 60
//! steps. The count starts the first time the section scrolls into
//! view, wired through the visibility latch's reveal callback.

use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::{StatItem, data};
use crate::state::{ValueRamp, VisibilityTrigger};
use crate::time::Timeline;
use crate::types::Cleanup;
use crate::views::style::{self, RevealStyle};

/// Count-up duration for each statistic.
pub const COUNT_DURATION_MS: u64 = 2000;

/// Emissions per count-up.
pub const COUNT_STEPS: u32 = 60;

/// Stagger between adjacent stat tiles.
pub const TILE_STAGGER_MS: u64 = 100;

/// Animated statistics section.
pub struct StatsStrip {
    stats: Vec<StatItem>,
    ramps: Rc<Vec<ValueRamp>>,
    trigger: VisibilityTrigger,
    cleanup: RefCell<Option<Cleanup>>,
}

impl StatsStrip {
    /// Strip over the site-wide statistics.
    pub fn new(timeline: &Timeline) -> Self {
        Self::with_stats(timeline, data::site_stats())
    }

    /// Strip over an explicit stat set.
    pub fn with_stats(timeline: &Timeline, stats: Vec<StatItem>) -> Self {
        let ramps: Rc<Vec<ValueRamp>> = Rc::new(
            stats
                .iter()
                .map(|stat| {
                    ValueRamp::new(timeline, f64::from(stat.value), COUNT_DURATION_MS, COUNT_STEPS)
                })
                .collect(),
        );
        let trigger = VisibilityTrigger::new();

        // Arm every counter the moment the section first becomes
        // visible. The latch flips at most once, so this fires at
        // most once.
        let ramps_for_reveal = ramps.clone();
        let unsubscribe = trigger.on_reveal(move || {
            for ramp in ramps_for_reveal.iter() {
                ramp.start();
            }
        });

        Self {
            stats,
            ramps,
            trigger,
            cleanup: RefCell::new(Some(unsubscribe)),
        }
    }

    /// Latch to register with the page [`Viewport`](crate::state::Viewport).
    pub fn visibility(&self) -> &VisibilityTrigger {
        &self.trigger
    }

    /// The stat records, in display order.
    pub fn stats(&self) -> &[StatItem] {
        &self.stats
    }

    /// Current counter values, rounded for display.
    pub fn values(&self) -> Vec<i64> {
        self.ramps.iter().map(ValueRamp::rounded).collect()
    }

    /// Formatted counter texts ("14750+", "95%").
    pub fn display_values(&self) -> Vec<String> {
        self.stats
            .iter()
            .zip(self.ramps.iter())
            .map(|(stat, ramp)| format!("{}{}", ramp.rounded(), stat.suffix))
            .collect()
    }

    /// Entrance style for the `index`-th tile.
    pub fn tile_style(&self, index: usize) -> RevealStyle {
        style::reveal(self.trigger.is_visible(), index, TILE_STAGGER_MS)
    }

    /// Tear down the visibility wiring. Idempotent.
    pub fn dispose(&self) {
        if let Some(cleanup) = self.cleanup.borrow_mut().take() {
            cleanup();
        }
    }
}

impl Drop for StatsStrip {
    fn drop(&mut self) {
        self.dispose();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Timeline, StatsStrip) {
        let timeline = Timeline::new();
        let strip = StatsStrip::new(&timeline);
        (timeline, strip)
    }

    #[test]
    fn test_counters_idle_until_visible() {
        let (timeline, strip) = setup();

        timeline.advance(10_000);
        assert_eq!(strip.values(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_counters_run_after_reveal() {
        let (timeline, strip) = setup();

        strip.visibility().report(true);
        timeline.advance(COUNT_DURATION_MS);

        assert_eq!(strip.values(), vec![15_000, 750, 95, 200]);
        assert_eq!(
            strip.display_values(),
            vec!["15000+", "750+", "95%", "200+"]
        );
    }

    #[test]
    fn test_counters_are_mid_flight_halfway() {
        let (timeline, strip) = setup();

        strip.visibility().report(true);
        timeline.advance(COUNT_DURATION_MS / 2);

        let values = strip.values();
        assert!(values[0] > 0 && values[0] < 15_000);
    }

    #[test]
    fn test_scroll_away_does_not_reset() {
        let (timeline, strip) = setup();

        strip.visibility().report(true);
        timeline.advance(COUNT_DURATION_MS);

        strip.visibility().report(false); // latch holds
        timeline.advance(10_000);
        assert_eq!(strip.values()[2], 95);
    }

    #[test]
    fn test_tile_stagger() {
        let (_timeline, strip) = setup();

        strip.visibility().report(true);
        assert_eq!(strip.tile_style(0).delay_ms, 0);
        assert_eq!(strip.tile_style(3).delay_ms, 300);
        assert_eq!(strip.tile_style(3).opacity, 1.0);
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let (_timeline, strip) = setup();
        strip.dispose();
        strip.dispose();
    }
}
