//! Batch orderings.
//!
//! - [`sort_by_spectrum`]: category buckets in spectrum order
//! - [`sort_by_target_hue`]: nearest-first to one target hue, truncated

mod spectrum;
mod strategy;
mod target;

pub use spectrum::sort_by_spectrum;
pub use strategy::SortStrategy;
pub use target::sort_by_target_hue;
