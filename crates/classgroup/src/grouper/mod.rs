//! Roster normalization, shuffling and partitioning.
//!
//! ## Structure
//!
//! - [`GroupSize`] - Validated, non-zero group size with a tolerant parser.
//! - [`Group`] / [`GroupSet`] - The ordered output of one grouping.
//! - [`group`] / [`group_with_rng`] - Normalize, shuffle, then cut into
//!   contiguous chunks.

mod partition;
mod set;
mod size;

pub use partition::*;
pub use set::*;
pub use size::*;

#[cfg(test)]
mod tests;
