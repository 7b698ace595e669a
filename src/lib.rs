//! # edumaster-ui
//!
//! Reactive view-state engine for the EduMaster course platform.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The site's behavior decomposes into four small mechanisms plus the
//! static catalog they operate on:
//!
//! ```text
//! Timeline ticks ─→ CycleScheduler / ValueRamp ─┐
//! Viewport events ─→ VisibilityTrigger ─────────┼─→ view models ─→ style records
//! Filter signals ─→ CatalogFilter ──────────────┘
//! ```
//!
//! Everything is single-threaded and event-driven: the host forwards
//! pointer and scroll events in, pumps the [`time::Timeline`], and
//! reads signals out. No mechanism polls, and a cancelled timer is
//! guaranteed never to fire again.
//!
//! ## Modules
//!
//! - [`time`] - Timeline, the deterministic timer scheduler
//! - [`state`] - CycleScheduler, ValueRamp, VisibilityTrigger, RippleField
//! - [`catalog`] - record types, sample data, pure filtering
//! - [`views`] - per-screen composition (carousel, stats, pages)

pub mod catalog;
pub mod state;
pub mod time;
pub mod types;
pub mod views;

// Re-export commonly used items
pub use types::{Cleanup, Region};

pub use time::{Timeline, TimerHandle};

pub use state::{
    CycleScheduler, Ripple, RippleColor, RippleConfig, RippleField, ValueRamp, Viewport,
    VisibilityTrigger,
};

pub use catalog::{
    BlogPost, CatalogEntry, Course, FilterSignals, FilterState, Instructor, MonthlyStudy,
    PricingPlan, ProgressMetric, StatItem, Testimonial, WILDCARD, filter, matches,
};

pub use views::{
    BlogPage, Carousel, CoursesPage, Loader, ProgressDashboard, RevealStyle, StatsStrip,
    TestimonialRotator,
};
