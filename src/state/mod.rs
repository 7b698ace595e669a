//! State Module - Reactive mechanisms behind the site's behavior
//!
//! - **Cycle** - wrapping index for carousels and tickers
//! - **Ramp** - animated counters and progress bars
//! - **Visibility** - scroll-reveal latches fed by an owned viewport
//! - **Ripple** - decorative pointer-trail effects

mod cycle;
mod ramp;
mod ripple;
mod visibility;

pub use cycle::*;
pub use ramp::*;
pub use ripple::*;
pub use visibility::*;
