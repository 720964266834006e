//! Grouping validation
//!
//! Checks a produced [`Grouping`] against the items it was computed for.
//! Structural problems and conflicting members fail validation; a pair that
//! co-occurs in more than one group is only reported as a warning, since the
//! in-place append step is allowed to produce it.

use crate::arena::ItemArena;
use crate::error::{GroupingError, ValidationDiagnostic, ViolationKind};
use crate::group::Grouping;
use crate::item::{Blocked, ItemId};
use std::collections::{HashMap, HashSet};

/// Outcome of a successful validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingReport {
    /// Number of input items
    pub item_count: usize,

    /// Number of groups
    pub group_count: usize,

    /// Size of the largest group
    pub largest_group: usize,

    /// Number of distinct item pairs sharing a group
    pub distinct_pairs: usize,

    /// Non-fatal findings
    pub warnings: Vec<ValidationDiagnostic>,
}

impl GroupingReport {
    /// Check if validation produced no warnings
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validate a grouping against its items
///
/// # Errors
/// Returns [`GroupingError::ValidationFailed`] with the first fatal violation:
/// an empty group, an unknown or repeated member, two conflicting members, or
/// an item that appears in no group.
pub fn validate<T: Blocked>(
    items: &[T],
    grouping: &Grouping,
) -> Result<GroupingReport, GroupingError> {
    let arena = ItemArena::build(items);
    validate_arena(&arena, grouping)
}

/// Validate a grouping against an already built arena
///
/// # Errors
/// See [`validate`].
pub fn validate_arena(
    arena: &ItemArena,
    grouping: &Grouping,
) -> Result<GroupingReport, GroupingError> {
    let mut covered = vec![false; arena.len()];
    let mut pair_groups: HashMap<(ItemId, ItemId), Vec<usize>> = HashMap::new();
    let mut largest_group = 0;

    for (index, group) in grouping.iter().enumerate() {
        check_structure(arena, index, group.members())?;
        check_conflicts(arena, index, group.members())?;

        largest_group = largest_group.max(group.len());
        for (position, &a) in group.members().iter().enumerate() {
            covered[a.0] = true;
            for &b in &group.members()[position + 1..] {
                let key = if a <= b { (a, b) } else { (b, a) };
                pair_groups.entry(key).or_default().push(index);
            }
        }
    }

    let mut warnings = Vec::new();

    if let Some(missing) = covered.iter().position(|&seen| !seen) {
        escalate(
            ValidationDiagnostic {
                kind: ViolationKind::UncoveredItem,
                involved_items: vec![ItemId(missing)],
                group_index: None,
                description: format!("item {} is not in any group", ItemId(missing)),
            },
            &mut warnings,
        )?;
    }

    let mut repeated: Vec<_> = pair_groups
        .iter()
        .filter(|(_, groups)| groups.len() > 1)
        .collect();
    repeated.sort_by_key(|(pair, _)| **pair);

    for (&(a, b), groups) in repeated {
        escalate(
            ValidationDiagnostic {
                kind: ViolationKind::RepeatedPair,
                involved_items: vec![a, b],
                group_index: groups.first().copied(),
                description: format!("items {a} and {b} share groups {groups:?}"),
            },
            &mut warnings,
        )?;
    }

    Ok(GroupingReport {
        item_count: arena.len(),
        group_count: grouping.len(),
        largest_group,
        distinct_pairs: pair_groups.len(),
        warnings,
    })
}

/// Fail on a fatal diagnostic, keep the rest as warnings
fn escalate(
    diagnostic: ValidationDiagnostic,
    warnings: &mut Vec<ValidationDiagnostic>,
) -> Result<(), GroupingError> {
    if diagnostic.kind.is_fatal() {
        return Err(GroupingError::validation_failed(diagnostic));
    }
    warnings.push(diagnostic);
    Ok(())
}

fn check_structure(
    arena: &ItemArena,
    index: usize,
    members: &[ItemId],
) -> Result<(), GroupingError> {
    if members.is_empty() {
        return Err(GroupingError::validation_failed(ValidationDiagnostic {
            kind: ViolationKind::EmptyGroup,
            involved_items: vec![],
            group_index: Some(index),
            description: format!("group {index} is empty"),
        }));
    }

    let mut seen = HashSet::with_capacity(members.len());
    for &member in members {
        if member.0 >= arena.len() {
            return Err(GroupingError::validation_failed(ValidationDiagnostic {
                kind: ViolationKind::UnknownItem,
                involved_items: vec![member],
                group_index: Some(index),
                description: format!(
                    "group {index} references {member} but only {} items exist",
                    arena.len()
                ),
            }));
        }
        if !seen.insert(member) {
            return Err(GroupingError::validation_failed(ValidationDiagnostic {
                kind: ViolationKind::DuplicateMember,
                involved_items: vec![member],
                group_index: Some(index),
                description: format!("group {index} contains {member} twice"),
            }));
        }
    }

    Ok(())
}

fn check_conflicts(
    arena: &ItemArena,
    index: usize,
    members: &[ItemId],
) -> Result<(), GroupingError> {
    for (position, &a) in members.iter().enumerate() {
        for &b in &members[position + 1..] {
            if arena.blocks(a, b) || arena.blocks(b, a) {
                return Err(GroupingError::validation_failed(ValidationDiagnostic {
                    kind: ViolationKind::ForbiddenPair,
                    involved_items: vec![a, b],
                    group_index: Some(index),
                    description: format!("{a} and {b} share a blocked type in group {index}"),
                }));
            }
        }
    }
    Ok(())
}
