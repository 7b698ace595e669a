//! Blog page view model.
//!
//! Category + search filtering over the post list, the featured /
//! recent split, and the hero and grid reveal latches.

use spark_signals::{Derived, derived};

use crate::catalog::{self, BlogPost, FilterSignals, data};
use crate::state::VisibilityTrigger;
use crate::views::style::{self, RevealStyle};

/// Stagger between adjacent post cards.
pub const POST_STAGGER_MS: u64 = 100;

/// The blog listing page.
pub struct BlogPage {
    posts: Vec<BlogPost>,
    filter: FilterSignals,
    hero_reveal: VisibilityTrigger,
    grid_reveal: VisibilityTrigger,
}

impl Default for BlogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogPage {
    /// Page over all published posts.
    pub fn new() -> Self {
        Self {
            posts: data::blog_posts(),
            filter: FilterSignals::new(),
            hero_reveal: VisibilityTrigger::new(),
            grid_reveal: VisibilityTrigger::new(),
        }
    }

    // =========================================================================
    // FILTERING
    // =========================================================================

    /// The page's filter controls (posts have no level facet, so that
    /// control is inert here).
    pub fn filter(&self) -> &FilterSignals {
        &self.filter
    }

    /// Values for the category chips, wildcard first.
    pub fn categories(&self) -> Vec<&'static str> {
        data::blog_categories()
    }

    /// Posts passing the current filter, newest first.
    pub fn filtered(&self) -> Vec<&BlogPost> {
        catalog::filter(&self.posts, &self.filter.snapshot())
    }

    /// Reactive filtered list.
    pub fn create_filtered(&self) -> Derived<Vec<BlogPost>> {
        let posts = self.posts.clone();
        let controls = self.filter.clone();
        derived(move || {
            let state = controls.snapshot();
            catalog::filter(&posts, &state)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    // =========================================================================
    // EDITORIAL SLOTS
    // =========================================================================

    /// The featured post (always the newest, independent of filters).
    pub fn featured(&self) -> Option<&BlogPost> {
        self.posts.first()
    }

    /// The "recent posts" rail: the three posts after the featured
    /// one, independent of filters.
    pub fn recent(&self) -> Vec<&BlogPost> {
        self.posts.iter().skip(1).take(3).collect()
    }

    // =========================================================================
    // REVEAL
    // =========================================================================

    /// Hero-section latch.
    pub fn hero_visibility(&self) -> &VisibilityTrigger {
        &self.hero_reveal
    }

    /// Post-grid latch.
    pub fn grid_visibility(&self) -> &VisibilityTrigger {
        &self.grid_reveal
    }

    /// Entrance style for the hero banner.
    pub fn hero_style(&self) -> RevealStyle {
        style::reveal(self.hero_reveal.is_visible(), 0, 0)
    }

    /// Entrance style for the `index`-th post card.
    pub fn card_style(&self, index: usize) -> RevealStyle {
        style::reveal(self.grid_reveal.is_visible(), index, POST_STAGGER_MS)
    }
}

// =============================================================================
// TESTS
// =============================================================================
