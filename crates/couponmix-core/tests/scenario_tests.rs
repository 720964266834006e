use couponmix_core::{compute_groupings, validate, GroupingEngine, ItemId, LedgerKind};
use couponmix_test_utils::{
    assert_groups_unordered, coupons, named_groups, seasonal_scenario, two_flat_scenario,
};
use pretty_assertions::assert_eq;

fn both_ledgers() -> [GroupingEngine; 2] {
    [
        GroupingEngine::with_ledger(LedgerKind::Scan),
        GroupingEngine::with_ledger(LedgerKind::PairIndex),
    ]
}

#[test]
fn test_blocks_blocked_types() {
    let items = coupons(&[&["1"], &["1"]]);
    let groups = compute_groupings(&items);

    assert_eq!(groups.len(), 2);
    assert!(std::ptr::eq(groups[0][0], &items[0]));
    assert!(std::ptr::eq(groups[1][0], &items[1]));
}

#[test]
fn test_combines_coupons() {
    let items = coupons(&[&[], &[]]);
    let groups = compute_groupings(&items);

    assert_eq!(groups, vec![vec![&items[0], &items[1]]]);
}

#[test]
fn test_blocks_multiple_types() {
    let items = coupons(&[&["1", "2"], &["1"], &["2"]]);
    let groups = compute_groupings(&items);

    assert_eq!(groups.len(), 2);
    assert!(std::ptr::eq(groups[0][0], &items[0]));
    assert_eq!(groups[0].len(), 1);
    assert!(std::ptr::eq(groups[1][0], &items[1]));
    assert!(std::ptr::eq(groups[1][1], &items[2]));
}

#[test]
fn test_long_term_variants_share_flat_coupon() {
    let items = seasonal_scenario(&[]);

    for engine in both_ledgers() {
        let grouping = engine.group(&items);
        assert_eq!(
            grouping.to_indices(),
            vec![
                vec![0, 3, 6],
                vec![1, 3, 6],
                vec![2, 3, 6],
                vec![4, 6],
                vec![5, 6],
            ]
        );
        assert_groups_unordered(
            &items,
            &grouping,
            &[
                &["lz1", "coupon", "test"],
                &["lz2", "coupon", "test"],
                &["lz3", "coupon", "test"],
                &["fb1", "test"],
                &["fb2", "test"],
            ],
        );

        // `coupon` and `test` are appended together into every long-term group.
        let report = validate(&items, &grouping).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].involved_items, vec![ItemId(3), ItemId(6)]);
    }
}

#[test]
fn test_test_coupon_blocking_long_term() {
    let items = seasonal_scenario(&["r"]);

    for engine in both_ledgers() {
        let grouping = engine.group(&items);
        // `test` seeds its own group with `coupon` first in member order.
        assert_eq!(
            named_groups(&items, &grouping),
            vec![
                vec!["lz1", "coupon"],
                vec!["lz2", "coupon"],
                vec!["lz3", "coupon"],
                vec!["fb1", "test"],
                vec!["fb2", "test"],
                vec!["test", "coupon"],
            ]
        );
        assert!(validate(&items, &grouping).unwrap().is_clean());
    }
}

#[test]
fn test_test_coupon_blocking_flat() {
    let items = seasonal_scenario(&["f"]);

    for engine in both_ledgers() {
        let grouping = engine.group(&items);
        assert_eq!(
            named_groups(&items, &grouping),
            vec![
                vec!["lz1", "coupon"],
                vec!["lz2", "coupon"],
                vec!["lz3", "coupon"],
                vec!["fb1"],
                vec!["fb2"],
                vec!["test", "lz1"],
                vec!["test", "lz2"],
                vec!["test", "lz3"],
            ]
        );
        assert!(validate(&items, &grouping).unwrap().is_clean());
    }
}

#[test]
fn test_two_flat_coupons() {
    let items = two_flat_scenario();

    for engine in both_ledgers() {
        let grouping = engine.group(&items);
        assert_eq!(grouping.len(), 8);
        assert_groups_unordered(
            &items,
            &grouping,
            &[
                &["lz1", "coupon", "test"],
                &["coupon2", "lz1", "test"],
                &["lz2", "coupon", "test"],
                &["coupon2", "lz2", "test"],
                &["lz3", "coupon", "test"],
                &["coupon2", "lz3", "test"],
                &["fb1", "test"],
                &["fb2", "test"],
            ],
        );
    }
}

#[test]
fn test_order_changes_result() {
    let forward = coupons(&[&["a"], &[], &["a"]]);
    let reversed = coupons(&[&["a"], &["a"], &[]]);

    let first = GroupingEngine::default().group(&forward);
    let second = GroupingEngine::default().group(&reversed);

    assert_eq!(first.to_indices(), vec![vec![0, 1], vec![2, 1]]);
    assert_eq!(second.to_indices(), vec![vec![0, 2], vec![1, 2]]);
    assert!(validate(&forward, &first).is_ok());
    assert!(validate(&reversed, &second).is_ok());
}
