use crate::{Error, Result};
use core::{fmt, num::NonZeroUsize, str::FromStr};

/// Number of members per group.
///
/// Always at least one, so chunking a roster can never loop forever or emit
/// empty groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupSize(NonZeroUsize);

impl GroupSize {
    /// The group size used when the form value cannot be parsed: 10.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(9));

    /// Returns `None` when `size` is zero.
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Parses a user-supplied group size, falling back to `fallback` instead
    /// of failing.
    ///
    /// Surrounding whitespace and a leading `+` are accepted. Anything that is
    /// not an integer, and any integer `<= 0`, yields `fallback`. Integers
    /// larger than `usize::MAX` saturate.
    ///
    /// ```
    /// use classgroup::GroupSize;
    ///
    /// let fallback = GroupSize::DEFAULT;
    /// assert_eq!(GroupSize::parse_or(" 4 ", fallback).get(), 4);
    /// assert_eq!(GroupSize::parse_or("abc", fallback).get(), 10);
    /// assert_eq!(GroupSize::parse_or("0", fallback).get(), 10);
    /// assert_eq!(GroupSize::parse_or("-3", fallback).get(), 10);
    /// ```
    pub fn parse_or(raw: &str, fallback: Self) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) if n > 0 => {
                let n = usize::try_from(n).unwrap_or(usize::MAX);
                Self::new(n).unwrap_or(fallback)
            }
            _ => fallback,
        }
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroUsize> for GroupSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl FromStr for GroupSize {
    type Err = Error;

    /// Strict parser used for configuration; rejects zero and negatives.
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::InvalidGroupSize(s.to_owned()))
    }
}

impl fmt::Display for GroupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
