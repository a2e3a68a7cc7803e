//! Database module for PostgreSQL persistence.

mod players;
mod pool;

pub use players::*;
pub use pool::*;
