//! Groups of compatible items and the ordered grouping result

use crate::item::ItemId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered members of one group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    members: SmallVec<[ItemId; 8]>,
}

impl Group {
    /// Group holding one item
    #[inline]
    #[must_use]
    pub fn singleton(item: ItemId) -> Self {
        let mut members = SmallVec::new();
        members.push(item);
        Self { members }
    }

    /// Group seeded with `item` followed by `rest` in order
    #[must_use]
    pub fn seeded(item: ItemId, rest: &[ItemId]) -> Self {
        let mut members = SmallVec::with_capacity(rest.len() + 1);
        members.push(item);
        members.extend_from_slice(rest);
        Self { members }
    }

    /// Append a member in place
    #[inline]
    pub fn push(&mut self, item: ItemId) {
        self.members.push(item);
    }

    /// Members in insertion order
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[ItemId] {
        &self.members
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.members.contains(&item)
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group has no members
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member positions as plain indices
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.members.iter().map(|id| id.0).collect()
    }
}

impl From<Vec<usize>> for Group {
    fn from(indices: Vec<usize>) -> Self {
        Self {
            members: indices.into_iter().map(ItemId).collect(),
        }
    }
}

/// Ordered list of groups, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grouping {
    groups: Vec<Group>,
}

impl Grouping {
    /// Create empty grouping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Wrap already computed groups
    #[inline]
    #[must_use]
    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Groups in creation order
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over groups
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Groups as plain index lists
    #[must_use]
    pub fn to_indices(&self) -> Vec<Vec<usize>> {
        self.groups.iter().map(Group::indices).collect()
    }

    /// Resolve member ids to references into the original items
    ///
    /// # Panics
    /// Panics if the grouping was not produced for `items`.
    #[must_use]
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        self.groups
            .iter()
            .map(|group| group.members().iter().map(|id| &items[id.0]).collect())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_keeps_order() {
        let group = Group::seeded(ItemId(4), &[ItemId(0), ItemId(2)]);
        assert_eq!(group.indices(), vec![4, 0, 2]);
        assert!(group.contains(ItemId(2)));
        assert!(!group.contains(ItemId(1)));
    }

    #[test]
    fn push_appends() {
        let mut group = Group::singleton(ItemId(1));
        group.push(ItemId(3));
        assert_eq!(group.len(), 2);
        assert_eq!(group.members(), &[ItemId(1), ItemId(3)]);
    }

    #[test]
    fn resolve_returns_original_references() {
        let items = ["a", "b", "c"];
        let grouping = Grouping::from_groups(vec![vec![2, 0].into(), vec![1].into()]);

        let resolved = grouping.resolve(&items);
        assert_eq!(resolved, vec![vec![&"c", &"a"], vec![&"b"]]);
        assert!(std::ptr::eq(resolved[0][0], &items[2]));
    }

    #[test]
    fn grouping_serializes_as_nested_indices() {
        let grouping = Grouping::from_groups(vec![vec![0, 1].into(), vec![2].into()]);
        assert_eq!(serde_json::to_string(&grouping).unwrap(), "[[0,1],[2]]");
    }

    #[test]
    fn empty_grouping() {
        let grouping = Grouping::new();
        assert!(grouping.is_empty());
        assert!(grouping.to_indices().is_empty());
    }
}
