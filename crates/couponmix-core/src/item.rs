//! Items and their blocked types
//!
//! Anything exposing a list of blocked-type tags can be grouped. Identity is
//! positional: two items with identical tags are still distinct, and every
//! item is addressed by its [`ItemId`] (index in the caller's slice).

use serde::{Deserialize, Serialize};

/// Position of an item in the input slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Index into the input slice
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An item that carries blocked-type tags
///
/// Two items conflict when they share a tag. Duplicate tags are harmless and
/// the order of tags is irrelevant.
pub trait Blocked {
    /// Blocked-type tags of this item
    fn blocked_types(&self) -> &[String];
}

impl<T: Blocked + ?Sized> Blocked for &T {
    fn blocked_types(&self) -> &[String] {
        (**self).blocked_types()
    }
}

impl Blocked for Vec<String> {
    fn blocked_types(&self) -> &[String] {
        self
    }
}

/// A coupon as exchanged with callers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Blocked-type tags
    #[serde(default)]
    pub blocked_types: Vec<String>,
}

impl Coupon {
    /// Create an unnamed coupon
    #[must_use]
    pub fn new<I, S>(blocked_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            blocked_types: blocked_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a named coupon
    #[must_use]
    pub fn named<I, S>(name: impl Into<String>, blocked_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            ..Self::new(blocked_types)
        }
    }

    /// Label for display: the name, or the fallback position
    #[must_use]
    pub fn label(&self, id: ItemId) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => id.to_string(),
        }
    }
}

impl Blocked for Coupon {
    fn blocked_types(&self) -> &[String] {
        &self.blocked_types
    }
}
