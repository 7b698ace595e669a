//! Carousel view model - the home-page featured-course slider.
//!
//! Auto-advances every 5 seconds, pauses while the pointer hovers the
//! strip, and resumes from the same slide when it leaves. Arrow and
//! dot navigation are independent of the auto-advance schedule.

use crate::catalog::{Course, data};
use crate::state::CycleScheduler;
use crate::time::Timeline;
use crate::views::style;

/// Auto-advance period for course slides.
pub const SLIDE_PERIOD_MS: u64 = 5000;

/// Rotating featured-course strip.
pub struct Carousel {
    slides: Vec<Course>,
    cycle: CycleScheduler,
}

impl Carousel {
    /// Carousel over the featured courses, auto-advancing.
    pub fn new(timeline: &Timeline) -> Self {
        Self::with_slides(timeline, data::featured_courses())
    }

    /// Carousel over an explicit slide set.
    pub fn with_slides(timeline: &Timeline, slides: Vec<Course>) -> Self {
        let cycle = CycleScheduler::new(timeline, slides.len(), SLIDE_PERIOD_MS);
        Self { slides, cycle }
    }

    // =========================================================================
    // POINTER
    // =========================================================================

    /// Pointer entered the strip - hold the current slide.
    pub fn pointer_enter(&self) {
        self.cycle.pause();
    }

    /// Pointer left - resume auto-advance from the same slide.
    pub fn pointer_leave(&self) {
        self.cycle.resume();
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Right arrow.
    pub fn next_slide(&self) {
        self.cycle.next();
    }

    /// Left arrow.
    pub fn previous_slide(&self) {
        self.cycle.previous();
    }

    /// Pagination dot.
    pub fn go_to_slide(&self, index: usize) {
        self.cycle.go_to(index);
    }

    // =========================================================================
    // VIEW STATE
    // =========================================================================

    /// Index of the slide in view.
    pub fn current(&self) -> usize {
        self.cycle.index()
    }

    /// Course on the slide in view.
    pub fn current_course(&self) -> Option<&Course> {
        self.slides.get(self.cycle.index())
    }

    /// All slides, in strip order.
    pub fn slides(&self) -> &[Course] {
        &self.slides
    }

    /// Track transform in percent of one slide width.
    pub fn offset_pct(&self) -> f64 {
        style::slide_offset_pct(self.cycle.index())
    }

    /// Whether the `index`-th dot is highlighted.
    pub fn dot_active(&self, index: usize) -> bool {
        style::dot_active(index, self.cycle.index())
    }

    /// Whether auto-advance is currently enabled.
    pub fn is_auto_playing(&self) -> bool {
        self.cycle.is_running()
    }
}

// =============================================================================
// TESTS
// =============================================================================
