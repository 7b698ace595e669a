//! Visibility State Module - Scroll-reveal gating
//!
//! One-way visibility latches fed by an owned viewport. A latch flips
//! to `true` the first time its region intersects the viewport and
//! never flips back - it gates one-shot entrance animations.
//!
//! The viewport is an explicit event source: watchers are evaluated
//! when registered (above-the-fold regions latch immediately) and on
//! scroll / resize events. There is no sampling timer.
//!
//! # Example
//!
//! ```ignore
//! use edumaster_ui::state::{Viewport, VisibilityTrigger};
//! use edumaster_ui::types::Region;
//!
//! let viewport = Viewport::new(800.0);
//! let trigger = VisibilityTrigger::new();
//!
//! let unsubscribe = viewport.observe(Region::new(2000.0, 400.0), &trigger);
//! assert!(!trigger.is_visible());
//!
//! viewport.set_scroll_y(1500.0);
//! assert!(trigger.is_visible());
//!
//! unsubscribe();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::types::{Cleanup, Region};

// =============================================================================
// VISIBILITY TRIGGER
// =============================================================================

type RevealCallback = Rc<dyn Fn()>;

/// One-way latch: false until first intersection, true thereafter.
///
/// Consumers can read the latch reactively via [`signal`](Self::signal)
/// or register a [`on_reveal`](Self::on_reveal) callback that runs
/// synchronously the moment the latch flips - the hook one-shot
/// animations arm themselves from.
#[derive(Clone)]
pub struct VisibilityTrigger {
    visible: Signal<bool>,
    next_id: Rc<Cell<u64>>,
    callbacks: Rc<RefCell<Vec<(u64, RevealCallback)>>>,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityTrigger {
    /// Create an unlatched trigger.
    pub fn new() -> Self {
        Self {
            visible: signal(false),
            next_id: Rc::new(Cell::new(0)),
            callbacks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Report an intersection observation. Latches on the first
    /// `true`; later `false` reports never unlatch.
    pub fn report(&self, intersecting: bool) {
        if !intersecting || self.visible.get() {
            return;
        }
        self.visible.set(true);

        // Snapshot first: a callback may register on this trigger.
        let snapshot: Vec<RevealCallback> = self
            .callbacks
            .borrow_mut()
            .drain(..)
            .map(|(_, callback)| callback)
            .collect();
        for callback in snapshot {
            callback();
        }
    }

    /// Run `callback` once, the first time the region becomes
    /// visible. If it already is, the callback runs immediately.
    /// Returns an unsubscribe closure.
    pub fn on_reveal(&self, callback: impl Fn() + 'static) -> Cleanup {
        if self.visible.get() {
            callback();
            return Box::new(|| {});
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));

        let callbacks = self.callbacks.clone();
        Box::new(move || {
            callbacks.borrow_mut().retain(|(cid, _)| *cid != id);
        })
    }

    /// Whether the region has ever been visible.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Reactive latch state.
    pub fn signal(&self) -> Signal<bool> {
        self.visible.clone()
    }
}

// =============================================================================
// VIEWPORT
// =============================================================================

struct Watcher {
    id: u64,
    region: Region,
    trigger: VisibilityTrigger,
}

struct ViewportInner {
    height: f64,
    scroll_y: f64,
    next_id: u64,
    watchers: Vec<Watcher>,
}

fn intersects(scroll_y: f64, height: f64, region: &Region) -> bool {
    region.top < scroll_y + height && region.bottom() > scroll_y
}

/// Owned intersection source for [`VisibilityTrigger`]s.
///
/// Watchers whose trigger has latched are pruned - a latched trigger
/// never needs re-evaluation.
#[derive(Clone)]
pub struct Viewport {
    inner: Rc<RefCell<ViewportInner>>,
}

impl Viewport {
    /// Create a viewport of the given height, scrolled to the top.
    pub fn new(height: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewportInner {
                height,
                scroll_y: 0.0,
                next_id: 0,
                watchers: Vec::new(),
            })),
        }
    }

    /// Watch a region, latching `trigger` on first intersection.
    ///
    /// The region is evaluated immediately, so content above the fold
    /// latches at mount without waiting for a scroll event. Returns an
    /// unsubscribe closure.
    pub fn observe(&self, region: Region, trigger: &VisibilityTrigger) -> Cleanup {
        let already_visible = {
            let inner = self.inner.borrow();
            intersects(inner.scroll_y, inner.height, &region)
        };

        if already_visible {
            trigger.report(true);
            // Latched - nothing left to watch.
            return Box::new(|| {});
        }

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.watchers.push(Watcher {
                id,
                region,
                trigger: trigger.clone(),
            });
            id
        };

        let viewport = self.inner.clone();
        Box::new(move || {
            viewport.borrow_mut().watchers.retain(|w| w.id != id);
        })
    }

    /// Scroll to an absolute offset and re-evaluate watchers.
    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.inner.borrow_mut().scroll_y = scroll_y;
        self.sweep();
    }

    /// Resize the viewport and re-evaluate watchers.
    pub fn resize(&self, height: f64) {
        self.inner.borrow_mut().height = height;
        self.sweep();
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    /// Number of regions still waiting to become visible.
    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().watchers.len()
    }

    /// Latch every watcher now intersecting, then prune it.
    ///
    /// Triggers fire outside the borrow: latching runs reactive
    /// effects, which may observe new regions on this viewport.
    fn sweep(&self) {
        let newly_visible: Vec<VisibilityTrigger> = {
            let mut inner = self.inner.borrow_mut();
            let (scroll_y, height) = (inner.scroll_y, inner.height);
            let mut latched = Vec::new();
            let mut kept = Vec::new();
            for watcher in inner.watchers.drain(..) {
                if intersects(scroll_y, height, &watcher.region) {
                    latched.push(watcher.trigger);
                } else {
                    kept.push(watcher);
                }
            }
            inner.watchers = kept;
            latched
        };

        for trigger in newly_visible {
            trigger.report(true);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_on_scroll_into_view() {
        let viewport = Viewport::new(800.0);
        let trigger = VisibilityTrigger::new();
        let _unsub = viewport.observe(Region::new(2000.0, 400.0), &trigger);

        assert!(!trigger.is_visible());

        viewport.set_scroll_y(1300.0); // region top at 2000 enters at 1300+800
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_latch_stays_true_after_scroll_away() {
        let viewport = Viewport::new(800.0);
        let trigger = VisibilityTrigger::new();
        let _unsub = viewport.observe(Region::new(2000.0, 400.0), &trigger);

        viewport.set_scroll_y(2000.0);
        assert!(trigger.is_visible());

        viewport.set_scroll_y(0.0); // scrolled back above the region
        assert!(trigger.is_visible());

        trigger.report(false); // an explicit leave report cannot unlatch
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_above_the_fold_latches_at_observe() {
        let viewport = Viewport::new(800.0);
        let trigger = VisibilityTrigger::new();

        // Region visible at mount time - no scroll event needed.
        let _unsub = viewport.observe(Region::new(100.0, 300.0), &trigger);
        assert!(trigger.is_visible());
        assert_eq!(viewport.watcher_count(), 0);
    }

    #[test]
    fn test_partial_intersection_counts() {
        let viewport = Viewport::new(800.0);
        let trigger = VisibilityTrigger::new();
        let _unsub = viewport.observe(Region::new(790.0, 400.0), &trigger);

        // Top 10 units of the region are inside the fold.
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_edge_adjacent_region_not_visible() {
        let viewport = Viewport::new(800.0);
        let trigger = VisibilityTrigger::new();
        let _unsub = viewport.observe(Region::new(800.0, 400.0), &trigger);

        // Region starts exactly at the fold - zero overlap.
        assert!(!trigger.is_visible());
    }

    #[test]
    fn test_resize_can_reveal() {
        let viewport = Viewport::new(400.0);
        let trigger = VisibilityTrigger::new();
        let _unsub = viewport.observe(Region::new(600.0, 200.0), &trigger);

        assert!(!trigger.is_visible());

        viewport.resize(900.0);
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_latched_watchers_are_pruned() {
        let viewport = Viewport::new(800.0);
        let near = VisibilityTrigger::new();
        let far = VisibilityTrigger::new();
        let _a = viewport.observe(Region::new(1000.0, 200.0), &near);
        let _b = viewport.observe(Region::new(5000.0, 200.0), &far);
        assert_eq!(viewport.watcher_count(), 2);

        viewport.set_scroll_y(1000.0);
        assert!(near.is_visible());
        assert!(!far.is_visible());
        assert_eq!(viewport.watcher_count(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_watching() {
        let viewport = Viewport::new(800.0);
        let trigger = VisibilityTrigger::new();
        let unsub = viewport.observe(Region::new(2000.0, 400.0), &trigger);

        unsub();
        viewport.set_scroll_y(2000.0);
        assert!(!trigger.is_visible());
    }

    #[test]
    fn test_on_reveal_fires_once_at_latch() {
        let trigger = VisibilityTrigger::new();
        let count = Rc::new(Cell::new(0u32));

        let count_cb = count.clone();
        let _unsub = trigger.on_reveal(move || count_cb.set(count_cb.get() + 1));
        assert_eq!(count.get(), 0);

        trigger.report(true);
        assert_eq!(count.get(), 1);

        trigger.report(true); // latch already set - no re-fire
        trigger.report(false);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_on_reveal_runs_immediately_when_latched() {
        let trigger = VisibilityTrigger::new();
        trigger.report(true);

        let count = Rc::new(Cell::new(0u32));
        let count_cb = count.clone();
        let _unsub = trigger.on_reveal(move || count_cb.set(count_cb.get() + 1));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_on_reveal_unsubscribe() {
        let trigger = VisibilityTrigger::new();
        let count = Rc::new(Cell::new(0u32));

        let count_cb = count.clone();
        let unsub = trigger.on_reveal(move || count_cb.set(count_cb.get() + 1));
        unsub();

        trigger.report(true);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_independent_triggers_per_section() {
        let viewport = Viewport::new(800.0);
        let hero = VisibilityTrigger::new();
        let grid = VisibilityTrigger::new();
        let _a = viewport.observe(Region::new(0.0, 600.0), &hero);
        let _b = viewport.observe(Region::new(1500.0, 900.0), &grid);

        assert!(hero.is_visible());
        assert!(!grid.is_visible());

        viewport.set_scroll_y(900.0);
        assert!(grid.is_visible());
    }
}
