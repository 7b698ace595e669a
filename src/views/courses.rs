//! Courses page view model.
//!
//! Signal-backed filter controls over the course catalog, a derived
//! filtered list, and the grid's reveal latch. Filtering is pure: the
//! catalog itself is never touched.

use spark_signals::{Derived, derived};

use crate::catalog::{self, Course, FilterSignals, FilterState, data};
use crate::state::VisibilityTrigger;
use crate::views::style::{self, RevealStyle};

/// Stagger between adjacent course cards.
pub const CARD_STAGGER_MS: u64 = 100;

/// The course-catalog page.
pub struct CoursesPage {
    items: Vec<Course>,
    filter: FilterSignals,
    grid_reveal: VisibilityTrigger,
}

impl Default for CoursesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CoursesPage {
    /// Page over the full catalog, unfiltered.
    pub fn new() -> Self {
        Self {
            items: data::courses(),
            filter: FilterSignals::new(),
            grid_reveal: VisibilityTrigger::new(),
        }
    }

    // =========================================================================
    // FILTER CONTROLS
    // =========================================================================

    /// The page's filter controls.
    pub fn filter(&self) -> &FilterSignals {
        &self.filter
    }

    /// Values for the category dropdown, wildcard first.
    pub fn categories(&self) -> Vec<&'static str> {
        data::course_categories()
    }

    /// Values for the level dropdown, wildcard first.
    pub fn levels(&self) -> Vec<&'static str> {
        data::course_levels()
    }

    // =========================================================================
    // DERIVED VIEW STATE
    // =========================================================================

    /// Courses passing the current filter, in catalog order.
    pub fn filtered(&self) -> Vec<&Course> {
        catalog::filter(&self.items, &self.filter.snapshot())
    }

    /// Courses passing an explicit state (for non-reactive callers).
    pub fn filtered_with(&self, state: &FilterState) -> Vec<&Course> {
        catalog::filter(&self.items, state)
    }

    /// Reactive filtered list - recomputes when any control changes.
    pub fn create_filtered(&self) -> Derived<Vec<Course>> {
        let items = self.items.clone();
        let controls = self.filter.clone();
        derived(move || {
            let state = controls.snapshot();
            catalog::filter(&items, &state)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Whether the current filter matches nothing ("No courses found
    /// matching your criteria."). Distinct from the unfiltered page.
    pub fn is_empty_result(&self) -> bool {
        self.filtered().is_empty()
    }

    // =========================================================================
    // REVEAL
    // =========================================================================

    /// Latch to register with the page [`Viewport`](crate::state::Viewport).
    pub fn visibility(&self) -> &VisibilityTrigger {
        &self.grid_reveal
    }

    /// Entrance style for the `index`-th card of the grid.
    pub fn card_style(&self, index: usize) -> RevealStyle {
        style::reveal(self.grid_reveal.is_visible(), index, CARD_STAGGER_MS)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::flush_sync;

    #[test]
    fn test_unfiltered_shows_full_catalog() {
        let page = CoursesPage::new();
        assert_eq!(page.filtered().len(), 6);
        assert!(!page.is_empty_result());
    }

    #[test]
    fn test_category_dropdown_narrows() {
        let page = CoursesPage::new();
        page.filter().set_category("Design");

        let result = page.filtered();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "UI/UX Design Fundamentals");
    }

    #[test]
    fn test_search_box_matches_instructor() {
        let page = CoursesPage::new();
        page.filter().set_search("chen");

        let result = page.filtered();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].instructor, "Mike Chen");
    }

    #[test]
    fn test_no_results_state() {
        let page = CoursesPage::new();
        page.filter().set_category("Design");
        page.filter().set_level("Advanced");

        assert!(page.is_empty_result());

        page.filter().clear();
        assert_eq!(page.filtered().len(), 6);
    }

    #[test]
    fn test_derived_tracks_controls() {
        let page = CoursesPage::new();
        let filtered = page.create_filtered();

        assert_eq!(filtered.get().len(), 6);

        page.filter().set_category("Marketing");
        flush_sync();
        assert_eq!(filtered.get().len(), 1);
        assert_eq!(filtered.get()[0].id, 3);
    }

    #[test]
    fn test_cards_reveal_with_stagger() {
        let page = CoursesPage::new();

        assert_eq!(page.card_style(2).opacity, 0.0);

        page.visibility().report(true);
        let style = page.card_style(2);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.delay_ms, 200);
    }
}
