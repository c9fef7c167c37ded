//! # `classgroup`: Random Class Groups
//!
//! Splits a newline-delimited roster into randomly shuffled, fixed-size groups
//! and renders the assignment as a printable PDF.
//!
//! ## Highlights
//!
//! - **Tolerant input**: blank lines and surrounding whitespace are dropped;
//!   an unparseable group size falls back to a caller-chosen default.
//! - **Uniform shuffle**: every permutation of the roster is equally likely.
//! - **Stable partitioning**: groups are contiguous cuts of the shuffled
//!   roster, so only the last group can be short.
//! - **Printable output**: A4 pages with automatic page breaks.
//!
//! ## Example
//!
//! ```
//! use classgroup::{GroupSize, group, render};
//!
//! let size = GroupSize::parse_or("2", GroupSize::DEFAULT);
//! let groups = group("Alice\nBob\n\n  Carol  \nDave", size).unwrap();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups.total_members(), 4);
//!
//! let pdf = render(&groups).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Group`], [`GroupSet`] and
//!   [`GroupSize`].
//! - `tracing`: debug-level spans around grouping and rendering.

mod error;
mod grouper;
mod render;

pub use crate::error::*;
pub use crate::grouper::*;
pub use crate::render::*;
