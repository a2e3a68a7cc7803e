//! Request handlers for match state and statistics.

mod live;
mod stats;

pub use live::*;
pub use stats::*;
