//! Progress dashboard view model.
//!
//! Combines animated progress bars (percent of a per-metric maximum),
//! counter tiles, and the monthly study-hours chart. Bars and counters
//! arm on first visibility, same wiring as the stats strip.

use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::{MonthlyStudy, ProgressMetric, StatItem, data};
use crate::state::{ValueRamp, VisibilityTrigger};
use crate::time::Timeline;
use crate::types::Cleanup;
use crate::views::stats::{COUNT_DURATION_MS, COUNT_STEPS};
use crate::views::style::{self, RevealStyle};

/// Stagger between adjacent progress bars.
pub const BAR_STAGGER_MS: u64 = 200;

/// Stagger between adjacent chart bars.
pub const CHART_STAGGER_MS: u64 = 100;

/// The learner's progress screen.
pub struct ProgressDashboard {
    metrics: Vec<ProgressMetric>,
    stats: Vec<StatItem>,
    chart: Vec<MonthlyStudy>,
    bar_ramps: Rc<Vec<ValueRamp>>,
    stat_ramps: Rc<Vec<ValueRamp>>,
    trigger: VisibilityTrigger,
    cleanup: RefCell<Option<Cleanup>>,
}

impl ProgressDashboard {
    /// Dashboard over the shipped sample data.
    pub fn new(timeline: &Timeline) -> Self {
        let metrics = data::progress_overview();
        let stats = data::dashboard_stats();
        let chart = data::study_hours();

        // Bars animate to their completion percentage, counters to
        // their raw value.
        let bar_ramps: Rc<Vec<ValueRamp>> = Rc::new(
            metrics
                .iter()
                .map(|metric| {
                    ValueRamp::new(timeline, metric.percent(), COUNT_DURATION_MS, COUNT_STEPS)
                })
                .collect(),
        );
        let stat_ramps: Rc<Vec<ValueRamp>> = Rc::new(
            stats
                .iter()
                .map(|stat| {
                    ValueRamp::new(timeline, f64::from(stat.value), COUNT_DURATION_MS, COUNT_STEPS)
                })
                .collect(),
        );

        let trigger = VisibilityTrigger::new();
        let bars = bar_ramps.clone();
        let counters = stat_ramps.clone();
        let unsubscribe = trigger.on_reveal(move || {
            for ramp in bars.iter().chain(counters.iter()) {
                ramp.start();
            }
        });

        Self {
            metrics,
            stats,
            chart,
            bar_ramps,
            stat_ramps,
            trigger,
            cleanup: RefCell::new(Some(unsubscribe)),
        }
    }

    /// Latch to register with the page [`Viewport`](crate::state::Viewport).
    pub fn visibility(&self) -> &VisibilityTrigger {
        &self.trigger
    }

    // =========================================================================
    // PROGRESS BARS
    // =========================================================================

    /// The bar records, in display order.
    pub fn metrics(&self) -> &[ProgressMetric] {
        &self.metrics
    }

    /// Animated bar widths in percent (raw, for the bar fill).
    pub fn bar_widths(&self) -> Vec<f64> {
        self.bar_ramps.iter().map(ValueRamp::value).collect()
    }

    /// Rounded percent labels next to each bar.
    pub fn bar_labels(&self) -> Vec<i64> {
        self.bar_ramps.iter().map(ValueRamp::rounded).collect()
    }

    /// Entrance style for the `index`-th bar row.
    pub fn bar_style(&self, index: usize) -> RevealStyle {
        style::reveal(self.trigger.is_visible(), index, BAR_STAGGER_MS)
    }

    // =========================================================================
    // COUNTER TILES
    // =========================================================================

    /// The counter records, in display order.
    pub fn stats(&self) -> &[StatItem] {
        &self.stats
    }

    /// Formatted counter texts ("15 days", "7/10", "85%").
    pub fn stat_values(&self) -> Vec<String> {
        self.stats
            .iter()
            .zip(self.stat_ramps.iter())
            .map(|(stat, ramp)| format!("{}{}", ramp.rounded(), stat.suffix))
            .collect()
    }

    // =========================================================================
    // STUDY-HOURS CHART
    // =========================================================================

    /// The chart series.
    pub fn chart(&self) -> &[MonthlyStudy] {
        &self.chart
    }

    /// Chart-bar widths in percent of the busiest month; collapsed
    /// until the dashboard is revealed.
    pub fn chart_widths(&self) -> Vec<f64> {
        let max_hours = self.chart.iter().map(|m| m.hours).max().unwrap_or(0);
        self.chart
            .iter()
            .map(|month| {
                style::chart_bar_pct(
                    self.trigger.is_visible(),
                    f64::from(month.hours),
                    f64::from(max_hours),
                )
            })
            .collect()
    }

    /// Tear down the visibility wiring. Idempotent.
    pub fn dispose(&self) {
        if let Some(cleanup) = self.cleanup.borrow_mut().take() {
            cleanup();
        }
    }
}

impl Drop for ProgressDashboard {
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

    fn setup() -> (Timeline, ProgressDashboard) {
        let timeline = Timeline::new();
        let dashboard = ProgressDashboard::new(&timeline);
        (timeline, dashboard)
    }

    #[test]
    fn test_everything_idle_until_visible() {
        let (timeline, dashboard) = setup();

        timeline.advance(10_000);
        assert_eq!(dashboard.bar_widths(), vec![0.0, 0.0, 0.0, 0.0]);
        assert_eq!(dashboard.chart_widths(), vec![0.0; 6]);
    }

    #[test]
    fn test_bars_land_on_completion_percent() {
        let (timeline, dashboard) = setup();

        dashboard.visibility().report(true);
        timeline.advance(COUNT_DURATION_MS);

        // 8/12, 156/200, 24/30, 3/5
        assert_eq!(dashboard.bar_labels(), vec![67, 78, 80, 60]);
        let widths = dashboard.bar_widths();
        assert!((widths[1] - 78.0).abs() < 1e-9);
    }

    #[test]
    fn test_counters_land_on_values() {
        let (timeline, dashboard) = setup();

        dashboard.visibility().report(true);
        timeline.advance(COUNT_DURATION_MS);

        assert_eq!(
            dashboard.stat_values(),
            vec!["4", "15 days", "7/10", "85%"]
        );
    }

    #[test]
    fn test_chart_scales_to_busiest_month() {
        let (_timeline, dashboard) = setup();

        dashboard.visibility().report(true);
        let widths = dashboard.chart_widths();

        // April (70h) is the maximum.
        assert_eq!(widths[3], 100.0);
        assert!((widths[0] - 40.0 / 70.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_bar_stagger() {
        let (_timeline, dashboard) = setup();

        dashboard.visibility().report(true);
        assert_eq!(dashboard.bar_style(2).delay_ms, 400);
    }
}
