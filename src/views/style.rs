//! Style decisions - pure view-state to style-record functions.
//!
//! All animation *decision* logic lives here, free of any rendering
//! framework: given `{visible, index, ramp value}`, produce the plain
//! style record the rendering layer applies.

// =============================================================================
// REVEAL
// =============================================================================

/// Vertical offset applied to hidden content, in spacing units.
pub const REVEAL_OFFSET: f32 = 8.0;

/// Entrance-transition state for one staggered grid item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Vertical translation in spacing units (0 once revealed).
    pub translate_y: f32,
    /// 0.0 hidden, 1.0 revealed.
    pub opacity: f32,
    /// Transition delay staggered by item position.
    pub delay_ms: u64,
}

/// Style for the `index`-th item of a section, staggered by
/// `stagger_ms` per item.
pub fn reveal(visible: bool, index: usize, stagger_ms: u64) -> RevealStyle {
    RevealStyle {
        translate_y: if visible { 0.0 } else { REVEAL_OFFSET },
        opacity: if visible { 1.0 } else { 0.0 },
        delay_ms: index as u64 * stagger_ms,
    }
}

// =============================================================================
// SLIDES & BARS
// =============================================================================

/// Horizontal track offset for a slide strip, in percent of one slide.
pub fn slide_offset_pct(index: usize) -> f64 {
    -100.0 * index as f64
}

/// Whether the `index`-th pagination dot is the active one.
pub fn dot_active(index: usize, current: usize) -> bool {
    index == current
}

/// Bar width as a percentage of `max`, clamped to 0-100.
///
/// A zero maximum renders an empty bar rather than dividing.
pub fn progress_width_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Chart-bar width: collapsed until the section is revealed, then
/// proportional to the series maximum.
pub fn chart_bar_pct(visible: bool, value: f64, max: f64) -> f64 {
    if !visible {
        return 0.0;
    }
    progress_width_pct(value, max)
}

// =============================================================================
// TESTS
// =============================================================================
