//! Flat per-call index of items and their interned tags
//!
//! Tags are interned to dense [`TagId`]s so conflict checks compare integers
//! instead of strings. Each item keeps its tag ids sorted and de-duplicated.

use crate::item::{Blocked, ItemId};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// Interned blocked-type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(pub usize);

/// Tag ids of one item (sorted, unique)
pub type TagSet = SmallVec<[TagId; 4]>;

/// Items of one grouping call, addressed by [`ItemId`]
#[derive(Debug, Clone, Default)]
pub struct ItemArena {
    tags: IndexSet<String>,
    items: Vec<TagSet>,
}

impl ItemArena {
    /// Intern the tags of every item, preserving input order
    #[must_use]
    pub fn build<T: Blocked>(items: &[T]) -> Self {
        let mut arena = Self {
            tags: IndexSet::new(),
            items: Vec::with_capacity(items.len()),
        };

        for item in items {
            let mut set: TagSet = item
                .blocked_types()
                .iter()
                .map(|tag| arena.intern(tag))
                .collect();
            set.sort_unstable();
            set.dedup();
            arena.items.push(set);
        }

        arena
    }

    fn intern(&mut self, tag: &str) -> TagId {
        match self.tags.get_index_of(tag) {
            Some(index) => TagId(index),
            None => TagId(self.tags.insert_full(tag.to_owned()).0),
        }
    }

    /// Number of items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct tags
    #[inline]
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Interned tags of an item
    ///
    /// # Panics
    /// Panics if `id` is not an item of this arena.
    #[inline]
    #[must_use]
    pub fn tags_of(&self, id: ItemId) -> &[TagId] {
        &self.items[id.0]
    }

    /// Original string of an interned tag
    #[must_use]
    pub fn tag_name(&self, tag: TagId) -> Option<&str> {
        self.tags.get_index(tag.0).map(String::as_str)
    }

    /// Whether `item` is blocked by `member`
    ///
    /// One-directional: each of `item`'s tags is looked up in `member`'s tags.
    #[must_use]
    pub fn blocks(&self, item: ItemId, member: ItemId) -> bool {
        let member_tags = self.tags_of(member);
        self.tags_of(item)
            .iter()
            .any(|tag| member_tags.binary_search(tag).is_ok())
    }

    /// Whether `item` can join a group with the given members
    #[must_use]
    pub fn compatible_with(&self, item: ItemId, members: &[ItemId]) -> bool {
        if self.tags_of(item).is_empty() {
            return true;
        }
        !members.iter().any(|&member| self.blocks(item, member))
    }

    /// All item ids in input order
    pub fn ids(&self) -> impl Iterator<Item = ItemId> {
        (0..self.items.len()).map(ItemId)
    }
}
