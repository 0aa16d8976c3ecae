//! Single-key left joins.

mod engine;
mod lookup;

pub use engine::{JoinStats, left_join, left_join_with_stats};
pub use lookup::Lookup;
