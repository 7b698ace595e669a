//! Ripple State Module - Decorative pointer-trail effects
//!
//! Short-lived ripples spawned from pointer events: every click
//! spawns one, pointer movement spawns with a configurable chance.
//! Each ripple self-destructs after a fixed lifetime.
//!
//! The field is an owned mechanism - the host forwards pointer events
//! into it rather than the field attaching ambient global listeners,
//! so it is constructible in isolation and disposable
//! deterministically.
//!
//! # Example
//!
//! ```ignore
//! use edumaster_ui::state::{RippleConfig, RippleField};
//! use edumaster_ui::time::Timeline;
//!
//! let timeline = Timeline::new();
//! let field = RippleField::new(&timeline, RippleConfig::default());
//!
//! field.pointer_clicked(120.0, 300.0);
//! assert_eq!(field.active().len(), 1);
//!
//! timeline.advance(1500);
//! assert!(field.active().is_empty());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spark_signals::{Signal, signal};

use crate::time::{TimerHandle, Timeline};

// =============================================================================
// TYPES
// =============================================================================

/// Accent color of a ripple, drawn uniformly from the site palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleColor {
    Blue,
    Purple,
    Pink,
    Cyan,
    Green,
}

impl RippleColor {
    /// All palette entries, in spawn-weight order.
    pub const ALL: [RippleColor; 5] = [
        RippleColor::Blue,
        RippleColor::Purple,
        RippleColor::Pink,
        RippleColor::Cyan,
        RippleColor::Green,
    ];

    /// CSS utility class the rendering layer applies.
    pub fn class(&self) -> &'static str {
        match self {
            RippleColor::Blue => "bg-blue-400",
            RippleColor::Purple => "bg-purple-400",
            RippleColor::Pink => "bg-pink-400",
            RippleColor::Cyan => "bg-cyan-400",
            RippleColor::Green => "bg-green-400",
        }
    }
}

/// One live ripple.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: RippleColor,
    /// Timeline time the ripple was spawned, in milliseconds.
    pub spawned_at: u64,
}

/// Tuning constants for the effect.
///
/// The move-spawn chance is a cosmetic tuning value with no functional
/// contract - it is configuration, not behavior.
#[derive(Debug, Clone)]
pub struct RippleConfig {
    /// Probability that a pointer-move event spawns a ripple.
    pub move_spawn_chance: f64,
    /// How long a ripple lives, in milliseconds.
    pub lifetime_ms: u64,
    /// Smallest spawned diameter.
    pub min_size: f64,
    /// Largest spawned diameter.
    pub max_size: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            move_spawn_chance: 0.05,
            lifetime_ms: 1500,
            min_size: 10.0,
            max_size: 30.0,
        }
    }
}

// =============================================================================
// RIPPLE FIELD
// =============================================================================

/// Process-wide ripple store fed by forwarded pointer events.
pub struct RippleField {
    timeline: Timeline,
    config: RippleConfig,
    ripples: Signal<Vec<Ripple>>,
    next_id: Cell<u64>,
    rng: RefCell<StdRng>,
    expiries: Rc<RefCell<Vec<(u64, TimerHandle)>>>,
}

impl RippleField {
    /// Create a field with entropy from the OS.
    pub fn new(timeline: &Timeline, config: RippleConfig) -> Self {
        Self::with_rng(timeline, config, StdRng::from_os_rng())
    }

    /// Create a field with a fixed seed (deterministic spawns).
    pub fn with_seed(timeline: &Timeline, config: RippleConfig, seed: u64) -> Self {
        Self::with_rng(timeline, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(timeline: &Timeline, mut config: RippleConfig, rng: StdRng) -> Self {
        config.move_spawn_chance = config.move_spawn_chance.clamp(0.0, 1.0);
        Self {
            timeline: timeline.clone(),
            config,
            ripples: signal(Vec::new()),
            next_id: Cell::new(0),
            rng: RefCell::new(rng),
            expiries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    // =========================================================================
    // POINTER EVENTS
    // =========================================================================

    /// Pointer moved - spawns with the configured chance.
    pub fn pointer_moved(&self, x: f64, y: f64) {
        let spawn = self
            .rng
            .borrow_mut()
            .random_bool(self.config.move_spawn_chance);
        if spawn {
            self.spawn(x, y);
        }
    }

    /// Pointer clicked - always spawns.
    pub fn pointer_clicked(&self, x: f64, y: f64) {
        self.spawn(x, y);
    }

    fn spawn(&self, x: f64, y: f64) {
        let (size, color) = {
            let mut rng = self.rng.borrow_mut();
            let size = rng.random_range(self.config.min_size..self.config.max_size);
            let color = RippleColor::ALL[rng.random_range(0..RippleColor::ALL.len())];
            (size, color)
        };

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let ripple = Ripple {
            id,
            x,
            y,
            size,
            color,
            spawned_at: self.timeline.now(),
        };

        let mut live = self.ripples.get();
        live.push(ripple);
        self.ripples.set(live);

        // Self-destruct after the configured lifetime.
        let ripples = self.ripples.clone();
        let expiries = self.expiries.clone();
        let handle = self.timeline.set_timeout(self.config.lifetime_ms, move || {
            let mut live = ripples.get();
            live.retain(|r| r.id != id);
            ripples.set(live);
            expiries.borrow_mut().retain(|(rid, _)| *rid != id);
        });
        self.expiries.borrow_mut().push((id, handle));
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    /// Snapshot of the live ripples.
    pub fn active(&self) -> Vec<Ripple> {
        self.ripples.get()
    }

    /// Reactive ripple list.
    pub fn ripples_signal(&self) -> Signal<Vec<Ripple>> {
        self.ripples.clone()
    }
}

impl Drop for RippleField {
    fn drop(&mut self) {
        for (_, handle) in self.expiries.borrow_mut().drain(..) {
            handle.cancel();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(chance: f64) -> (Timeline, RippleField) {
        let timeline = Timeline::new();
        let config = RippleConfig {
            move_spawn_chance: chance,
            ..RippleConfig::default()
        };
        let field = RippleField::with_seed(&timeline, config, 7);
        (timeline, field)
    }

    #[test]
    fn test_click_always_spawns() {
        let (_timeline, field) = setup(0.0);

        field.pointer_clicked(10.0, 20.0);
        field.pointer_clicked(30.0, 40.0);

        let active = field.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].x, 10.0);
        assert_eq!(active[1].y, 40.0);
    }

    #[test]
    fn test_move_with_zero_chance_never_spawns() {
        let (_timeline, field) = setup(0.0);

        for i in 0..200 {
            field.pointer_moved(f64::from(i), 0.0);
        }
        assert!(field.active().is_empty());
    }

    #[test]
    fn test_move_with_full_chance_always_spawns() {
        let (_timeline, field) = setup(1.0);

        for i in 0..10 {
            field.pointer_moved(f64::from(i), 0.0);
        }
        assert_eq!(field.active().len(), 10);
    }

    #[test]
    fn test_ripple_expires_after_lifetime() {
        let (timeline, field) = setup(0.0);

        field.pointer_clicked(0.0, 0.0);
        timeline.advance(1499);
        assert_eq!(field.active().len(), 1);

        timeline.advance(1);
        assert!(field.active().is_empty());
    }

    #[test]
    fn test_overlapping_lifetimes() {
        let (timeline, field) = setup(0.0);

        field.pointer_clicked(0.0, 0.0);
        timeline.advance(1000);
        field.pointer_clicked(1.0, 1.0);

        timeline.advance(500); // first expires at 1500
        assert_eq!(field.active().len(), 1);
        assert_eq!(field.active()[0].x, 1.0);

        timeline.advance(1000); // second expires at 2500
        assert!(field.active().is_empty());
    }

    #[test]
    fn test_size_within_configured_bounds() {
        let (_timeline, field) = setup(0.0);

        for _ in 0..50 {
            field.pointer_clicked(0.0, 0.0);
        }
        for ripple in field.active() {
            assert!(ripple.size >= 10.0 && ripple.size < 30.0);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let (_timeline, field) = setup(0.0);

        for _ in 0..20 {
            field.pointer_clicked(0.0, 0.0);
        }
        let mut ids: Vec<u64> = field.active().iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_spawned_at_records_timeline_time() {
        let (timeline, field) = setup(0.0);

        timeline.advance(4200);
        field.pointer_clicked(0.0, 0.0);
        assert_eq!(field.active()[0].spawned_at, 4200);
    }

    #[test]
    fn test_drop_cancels_pending_expiries() {
        let timeline = Timeline::new();
        {
            let field = RippleField::with_seed(&timeline, RippleConfig::default(), 1);
            field.pointer_clicked(0.0, 0.0);
            assert_eq!(timeline.pending(), 1);
        }
        assert_eq!(timeline.pending(), 0);
        timeline.advance(10_000); // expiry must not fire after teardown
    }

    #[test]
    fn test_chance_is_clamped() {
        let timeline = Timeline::new();
        let config = RippleConfig {
            move_spawn_chance: 7.5,
            ..RippleConfig::default()
        };
        let field = RippleField::with_seed(&timeline, config, 1);

        // Clamped to 1.0 - must not panic, must spawn.
        field.pointer_moved(0.0, 0.0);
        assert_eq!(field.active().len(), 1);
    }

    #[test]
    fn test_seeded_fields_are_reproducible() {
        let (_t1, a) = setup(0.5);
        let (_t2, b) = setup(0.5);

        for i in 0..50 {
            a.pointer_moved(f64::from(i), 0.0);
            b.pointer_moved(f64::from(i), 0.0);
        }
        assert_eq!(a.active().len(), b.active().len());
    }
}
