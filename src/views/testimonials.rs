//! Testimonial rotator view model.
//!
//! Cycles through student success stories on the same 5-second period
//! as the carousel, but never pauses - there are no hover controls on
//! this section. The section heading reveals on first visibility.

use crate::catalog::{Testimonial, data};
use crate::state::{CycleScheduler, VisibilityTrigger};
use crate::time::Timeline;
use crate::views::style::{self, RevealStyle};

/// Rotation period for testimonials.
pub const ROTATE_PERIOD_MS: u64 = 5000;

/// Rotating testimonial section.
pub struct TestimonialRotator {
    entries: Vec<Testimonial>,
    cycle: CycleScheduler,
    reveal: VisibilityTrigger,
}

impl TestimonialRotator {
    /// Rotator over the shipped testimonials.
    pub fn new(timeline: &Timeline) -> Self {
        let entries = data::testimonials();
        let cycle = CycleScheduler::new(timeline, entries.len(), ROTATE_PERIOD_MS);
        Self {
            entries,
            cycle,
            reveal: VisibilityTrigger::new(),
        }
    }

    /// Index of the testimonial in view.
    pub fn current(&self) -> usize {
        self.cycle.index()
    }

    /// Testimonial in view.
    pub fn current_entry(&self) -> Option<&Testimonial> {
        self.entries.get(self.cycle.index())
    }

    /// All testimonials, in rotation order.
    pub fn entries(&self) -> &[Testimonial] {
        &self.entries
    }

    /// Track transform in percent of one card width.
    pub fn offset_pct(&self) -> f64 {
        style::slide_offset_pct(self.cycle.index())
    }

    /// Latch to register with the page [`Viewport`](crate::state::Viewport).
    pub fn visibility(&self) -> &VisibilityTrigger {
        &self.reveal
    }

    /// Entrance style for the section heading.
    pub fn heading_style(&self) -> RevealStyle {
        style::reveal(self.reveal.is_visible(), 0, 0)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_through_three_entries() {
        let timeline = Timeline::new();
        let rotator = TestimonialRotator::new(&timeline);

        assert_eq!(rotator.current_entry().unwrap().name, "Alex Rodriguez");

        timeline.advance(ROTATE_PERIOD_MS);
        assert_eq!(rotator.current_entry().unwrap().name, "Maria Santos");

        timeline.advance(ROTATE_PERIOD_MS * 2);
        assert_eq!(rotator.current(), 0); // wrapped
    }

    #[test]
    fn test_heading_reveals_once_visible() {
        let timeline = Timeline::new();
        let rotator = TestimonialRotator::new(&timeline);

        assert_eq!(rotator.heading_style().opacity, 0.0);

        rotator.visibility().report(true);
        assert_eq!(rotator.heading_style().opacity, 1.0);

        rotator.visibility().report(false);
        assert_eq!(rotator.heading_style().opacity, 1.0); // latched
    }
}
