use core::slice;

/// Members assigned together, in the order they were cut from the shuffled
/// roster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Group {
    members: Vec<String>,
}

impl Group {
    pub(crate) fn new(members: Vec<String>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The ordered groups produced by one grouping.
///
/// Group order is display order: the first group is "Group 1" on screen and in
/// the PDF.
///
/// ## Invariants
///
/// - Every group is non-empty.
/// - Every member is trimmed and non-empty when produced by
///   [`group`](crate::group).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupSet {
    groups: Vec<Group>,
}

impl GroupSet {
    pub(crate) fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of members across all groups.
    pub fn total_members(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn iter(&self) -> slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Flattens the groups back into one roster, in group order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flat_map(Group::iter).map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a GroupSet {
    type Item = &'a Group;
    type IntoIter = slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a set from already-decided groups, e.g. when restoring a session.
///
/// Empty inner vectors are dropped so the non-empty invariant holds. Names are
/// taken as-is.
impl From<Vec<Vec<String>>> for GroupSet {
    fn from(groups: Vec<Vec<String>>) -> Self {
        Self::new(
            groups
                .into_iter()
                .filter(|members| !members.is_empty())
                .map(Group::new)
                .collect(),
        )
    }
}
