//! Grouping engine
//!
//! Single left-to-right pass over the items. For each item, only the groups
//! that existed before the item was reached are examined, in creation order:
//!
//! - compatible group: the item is appended to it in place;
//! - incompatible group: the members that neither conflict with the item nor
//!   already share a group with it seed a new group `[item, members...]`.
//!
//! An item that was neither appended nor used as a seed becomes a singleton.
//! The result depends on input order and is not a global optimum.

use crate::arena::ItemArena;
use crate::config::EngineConfig;
use crate::error::GroupingError;
use crate::group::{Group, Grouping};
use crate::item::{Blocked, ItemId};
use crate::ledger::{LedgerKind, PairIndexLedger, PairLedger, ScanLedger};
use smallvec::SmallVec;

/// Compute every grouping of `items` with the default engine
///
/// Groups hold references into `items`, in creation order.
#[must_use]
pub fn compute_groupings<T: Blocked>(items: &[T]) -> Vec<Vec<&T>> {
    GroupingEngine::default().group(items).resolve(items)
}

/// Grouping engine
///
/// Stateless between calls; all bookkeeping lives inside one call.
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    config: EngineConfig,
}

impl GroupingEngine {
    /// Create engine with configuration
    #[inline]
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create engine using a specific ledger
    #[inline]
    #[must_use]
    pub fn with_ledger(ledger: LedgerKind) -> Self {
        Self::new(EngineConfig::new().with_ledger(ledger))
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Group items; never fails
    #[must_use]
    pub fn group<T: Blocked>(&self, items: &[T]) -> Grouping {
        let arena = ItemArena::build(items);
        self.group_arena(&arena)
    }

    /// Group items, enforcing the configured item limit
    ///
    /// # Errors
    /// Returns [`GroupingError::CapacityExceeded`] when `items` is longer than
    /// `max_items`.
    pub fn try_group<T: Blocked>(&self, items: &[T]) -> Result<Grouping, GroupingError> {
        if let Some(limit) = self.config.max_items {
            if items.len() > limit {
                tracing::warn!(items = items.len(), limit, "refusing oversized input");
                return Err(GroupingError::CapacityExceeded {
                    items: items.len(),
                    limit,
                });
            }
        }
        Ok(self.group(items))
    }

    /// Group an already built arena
    #[must_use]
    pub fn group_arena(&self, arena: &ItemArena) -> Grouping {
        match self.config.ledger {
            LedgerKind::Scan => group_with::<ScanLedger>(arena),
            LedgerKind::PairIndex => group_with::<PairIndexLedger>(arena),
        }
    }
}

/// Run the grouping pass with ledger `L`
#[must_use]
pub fn group_with<L: PairLedger>(arena: &ItemArena) -> Grouping {
    let mut ledger = L::default();
    let mut groups: Vec<Group> = Vec::new();

    for item in arena.ids() {
        place_item(arena, &mut ledger, &mut groups, item);
    }

    tracing::debug!(
        items = arena.len(),
        tags = arena.tag_count(),
        groups = groups.len(),
        ledger = ledger.name(),
        "grouping complete"
    );
    Grouping::from_groups(groups)
}

fn place_item<L: PairLedger>(
    arena: &ItemArena,
    ledger: &mut L,
    groups: &mut Vec<Group>,
    item: ItemId,
) {
    // Groups created while placing this item are not revisited.
    let existing = groups.len();
    let mut placed = false;

    for index in 0..existing {
        if arena.compatible_with(item, groups[index].members()) {
            ledger.record(item, groups[index].members());
            groups[index].push(item);
            placed = true;
            tracing::trace!(%item, group = index, "appended");
            continue;
        }

        let current: &[Group] = groups;
        let candidates: SmallVec<[ItemId; 8]> = current[index]
            .members()
            .iter()
            .copied()
            .filter(|&member| {
                !arena.blocks(item, member) && !ledger.co_located(member, item, current)
            })
            .collect();

        if !candidates.is_empty() {
            ledger.record_seed(item, &candidates);
            groups.push(Group::seeded(item, &candidates));
            placed = true;
            tracing::trace!(%item, from = index, group = groups.len() - 1, "seeded");
        }
    }

    if !placed {
        groups.push(Group::singleton(item));
        tracing::trace!(%item, group = groups.len() - 1, "singleton");
    }
}
