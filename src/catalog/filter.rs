//! Catalog filtering - facet narrowing and free-text search.
//!
//! Filtering is a pure function of (items, state): it preserves source
//! order, never mutates the source, and an empty result is an
//! expected outcome, not an error. The default state is the identity
//! filter.

use spark_signals::{Signal, signal};

use super::CatalogEntry;

/// Facet value that matches every entry.
pub const WILDCARD: &str = "All";

// =============================================================================
// FILTER STATE
// =============================================================================

/// Snapshot of a page's filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Selected category, or [`WILDCARD`].
    pub category: String,
    /// Selected level, or [`WILDCARD`]. Ignored by entry kinds
    /// without a level facet.
    pub level: String,
    /// Free-text search term. Empty matches everything.
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: WILDCARD.to_string(),
            level: WILDCARD.to_string(),
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Whether this state is the identity filter.
    pub fn is_identity(&self) -> bool {
        self.category == WILDCARD && self.level == WILDCARD && self.search.is_empty()
    }
}

// =============================================================================
// MATCHING
// =============================================================================

fn facet_matches(selected: &str, value: &str) -> bool {
    selected == WILDCARD || selected == value
}

fn search_matches(term_lower: &str, fields: &[&str]) -> bool {
    term_lower.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(term_lower))
}

/// Whether a single entry passes the filter.
pub fn matches<T: CatalogEntry>(entry: &T, state: &FilterState) -> bool {
    matches_with_term(entry, state, &state.search.to_lowercase())
}

fn matches_with_term<T: CatalogEntry>(entry: &T, state: &FilterState, term_lower: &str) -> bool {
    if !facet_matches(&state.category, entry.category()) {
        return false;
    }
    if let Some(level) = entry.level() {
        if !facet_matches(&state.level, level) {
            return false;
        }
    }
    search_matches(term_lower, &entry.search_fields())
}

/// Narrow `items` to the entries passing `state`, preserving order.
pub fn filter<'a, T: CatalogEntry>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let term_lower = state.search.to_lowercase();
    items
        .iter()
        .filter(|entry| matches_with_term(entry, state, &term_lower))
        .collect()
}

// =============================================================================
// REACTIVE WRAPPER
// =============================================================================

/// Signal-backed filter controls owned by one page.
#[derive(Clone)]
pub struct FilterSignals {
    category: Signal<String>,
    level: Signal<String>,
    search: Signal<String>,
}

impl Default for FilterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSignals {
    /// Create controls in the identity state.
    pub fn new() -> Self {
        Self {
            category: signal(WILDCARD.to_string()),
            level: signal(WILDCARD.to_string()),
            search: signal(String::new()),
        }
    }

    pub fn set_category(&self, category: impl Into<String>) {
        self.category.set(category.into());
    }

    pub fn set_level(&self, level: impl Into<String>) {
        self.level.set(level.into());
    }

    pub fn set_search(&self, term: impl Into<String>) {
        self.search.set(term.into());
    }

    /// Reset every control to its default.
    pub fn clear(&self) {
        self.category.set(WILDCARD.to_string());
        self.level.set(WILDCARD.to_string());
        self.search.set(String::new());
    }

    /// Current state. Reading inside a reactive context subscribes to
    /// all three controls.
    pub fn snapshot(&self) -> FilterState {
        FilterState {
            category: self.category.get(),
            level: self.level.get(),
            search: self.search.get(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
