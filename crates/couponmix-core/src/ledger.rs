//! Pair ledgers
//!
//! A [`PairLedger`] answers whether two items already share a group in the
//! grouping being built. The engine consults it when it seeds a new group from
//! the compatible part of an existing one, so no pair is materialized twice by
//! seeding.
//!
//! Both ledgers produce identical groupings; they differ only in cost.

use crate::group::Group;
use crate::item::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Bookkeeping of which item pairs already co-occur
pub trait PairLedger: Default + std::fmt::Debug {
    /// Whether `a` and `b` are members of a common group
    ///
    /// `groups` is the grouping built so far, including every append and
    /// seeded group recorded through [`PairLedger::record`].
    fn co_located(&self, a: ItemId, b: ItemId, groups: &[Group]) -> bool;

    /// Record that `item` now shares a group with each of `peers`
    fn record(&mut self, item: ItemId, peers: &[ItemId]);

    /// Record a group seeded as `[item, candidates...]`
    ///
    /// None of `candidates` is co-located with `item` at this point.
    fn record_seed(&mut self, item: ItemId, candidates: &[ItemId]) {
        self.record(item, candidates);
    }

    /// Ledger name (for logging)
    fn name(&self) -> &'static str;
}

/// Scans every group on each lookup
///
/// Lookup is O(groups × group size).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanLedger;

impl PairLedger for ScanLedger {
    fn co_located(&self, a: ItemId, b: ItemId, groups: &[Group]) -> bool {
        groups
            .iter()
            .any(|group| group.contains(a) && group.contains(b))
    }

    fn record(&mut self, _item: ItemId, _peers: &[ItemId]) {}

    fn name(&self) -> &'static str {
        "scan"
    }
}

/// Keeps a set of normalized pairs
///
/// Lookup is O(1); every append or seed costs one insert per new pair.
#[derive(Debug, Clone, Default)]
pub struct PairIndexLedger {
    pairs: HashSet<(ItemId, ItemId)>,
}

impl PairIndexLedger {
    #[inline]
    fn key(a: ItemId, b: ItemId) -> (ItemId, ItemId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Number of distinct pairs recorded
    #[inline]
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

impl PairLedger for PairIndexLedger {
    fn co_located(&self, a: ItemId, b: ItemId, _groups: &[Group]) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    fn record(&mut self, item: ItemId, peers: &[ItemId]) {
        for &peer in peers {
            if peer != item {
                self.pairs.insert(Self::key(item, peer));
            }
        }
    }

    fn name(&self) -> &'static str {
        "pair-index"
    }
}

/// Ledger selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerKind {
    /// [`ScanLedger`]
    Scan,

    /// [`PairIndexLedger`] (default)
    #[default]
    PairIndex,
}

impl LedgerKind {
    /// Name as used in configuration and on the command line
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::PairIndex => "pair-index",
        }
    }
}

impl std::fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(Self::Scan),
            "pair-index" | "pair_index" => Ok(Self::PairIndex),
            other => Err(format!("unknown ledger: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<Group> {
        vec![vec![0, 3, 6].into(), vec![1, 3].into()]
    }

    #[test]
    fn scan_finds_shared_group() {
        let ledger = ScanLedger;
        let groups = groups();

        assert!(ledger.co_located(ItemId(0), ItemId(6), &groups));
        assert!(ledger.co_located(ItemId(3), ItemId(1), &groups));
        assert!(!ledger.co_located(ItemId(0), ItemId(1), &groups));
    }

    #[test]
    fn pair_index_is_symmetric() {
        let mut ledger = PairIndexLedger::default();
        ledger.record(ItemId(5), &[ItemId(2), ItemId(7)]);

        assert!(ledger.co_located(ItemId(2), ItemId(5), &[]));
        assert!(ledger.co_located(ItemId(7), ItemId(5), &[]));
        assert!(!ledger.co_located(ItemId(2), ItemId(7), &[]));
        assert_eq!(ledger.pair_count(), 2);
    }

    #[test]
    fn pair_index_ignores_self_and_repeats() {
        let mut ledger = PairIndexLedger::default();
        ledger.record(ItemId(1), &[ItemId(1), ItemId(2)]);
        ledger.record(ItemId(2), &[ItemId(1)]);

        assert_eq!(ledger.pair_count(), 1);
    }

    #[test]
    fn record_seed_records_candidates() {
        let mut ledger = PairIndexLedger::default();
        ledger.record_seed(ItemId(4), &[ItemId(0), ItemId(2)]);

        assert!(ledger.co_located(ItemId(0), ItemId(4), &[]));
        assert!(ledger.co_located(ItemId(4), ItemId(2), &[]));
        assert_eq!(ledger.pair_count(), 2);
    }

    #[test]
    fn ledger_kind_parse_and_display() {
        assert_eq!("scan".parse::<LedgerKind>(), Ok(LedgerKind::Scan));
        assert_eq!("pair-index".parse::<LedgerKind>(), Ok(LedgerKind::PairIndex));
        assert!("fast".parse::<LedgerKind>().is_err());
        assert_eq!(LedgerKind::default().to_string(), "pair-index");
    }

    #[test]
    fn ledger_names() {
        assert_eq!(ScanLedger.name(), LedgerKind::Scan.as_str());
        assert_eq!(PairIndexLedger::default().name(), LedgerKind::PairIndex.as_str());
    }
}
