//! Error type shared by the grouper and the document renderer.

use thiserror::Error;

/// A result type defaulting to this crate's [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `classgroup` can emit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The roster contained no non-blank lines.
    #[error("no names provided")]
    NoNames,

    /// A group size was not a positive integer.
    ///
    /// Only produced by the strict [`FromStr`](core::str::FromStr) parser.
    /// The form path uses [`GroupSize::parse_or`](crate::GroupSize::parse_or)
    /// and never fails.
    #[error("invalid group size `{0}`: expected a positive integer")]
    InvalidGroupSize(String),

    /// [`render`](crate::render) was called with a [`GroupSet`](crate::GroupSet)
    /// holding no groups. Callers are expected to short-circuit before this.
    #[error("group set is empty")]
    EmptyGroupSet,

    /// The PDF writer failed to build or serialize the document.
    #[error("document rendering failed: {0}")]
    Render(String),
}
