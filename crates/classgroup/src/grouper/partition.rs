use crate::{Error, Group, GroupSet, GroupSize, Result};
use rand::{Rng, seq::SliceRandom};

/// Splits `raw` on line breaks, trims every line and drops blank ones.
///
/// Returns [`Error::NoNames`] if nothing is left.
pub fn normalize_names(raw: &str) -> Result<Vec<String>> {
    let names: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    if names.is_empty() {
        return Err(Error::NoNames);
    }
    Ok(names)
}

/// Cuts `names` into contiguous groups of `size`, preserving order.
///
/// Every group but the last has exactly `size` members; the last holds the
/// remainder. An empty input yields an empty set.
pub fn partition(names: Vec<String>, size: GroupSize) -> GroupSet {
    let size = size.get();
    let mut groups = Vec::with_capacity(names.len().div_ceil(size));
    let mut names = names.into_iter().peekable();

    while names.peek().is_some() {
        groups.push(Group::new(names.by_ref().take(size).collect()));
    }
    GroupSet::new(groups)
}

/// Shuffles already-normalized `names` in place, then [`partition`]s them.
///
/// Useful when the caller needs to inspect the normalized roster (e.g. to
/// enforce a size limit) before grouping it.
pub fn shuffle_into_groups<R>(mut names: Vec<String>, size: GroupSize, rng: &mut R) -> GroupSet
where
    R: Rng + ?Sized,
{
    names.shuffle(rng);
    partition(names, size)
}

/// Shuffles the roster in `raw` with the thread-local RNG and cuts it into
/// groups of `size`.
///
/// ```
/// use classgroup::{GroupSize, group};
///
/// let size = GroupSize::new(3).unwrap();
/// let groups = group("a\nb\nc\nd\ne", size).unwrap();
/// let sizes: Vec<_> = groups.iter().map(|g| g.len()).collect();
/// assert_eq!(sizes, [3, 2]);
/// ```
pub fn group(raw: &str, size: GroupSize) -> Result<GroupSet> {
    group_with_rng(raw, size, &mut rand::rng())
}

/// Like [`group`], with a caller-supplied RNG.
///
/// The shuffle is a Fisher-Yates pass, so every permutation of the normalized
/// roster is equally likely given a uniform `rng`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(size = size.get()))
)]
pub fn group_with_rng<R>(raw: &str, size: GroupSize, rng: &mut R) -> Result<GroupSet>
where
    R: Rng + ?Sized,
{
    let names = normalize_names(raw)?;
    let groups = shuffle_into_groups(names, size, rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        groups = groups.len(),
        members = groups.total_members(),
        "roster partitioned"
    );

    Ok(groups)
}
