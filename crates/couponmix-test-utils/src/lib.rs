//! Testing utilities for couponmix workspace
//!
//! Shared fixtures, scenario builders and assertions.

#![allow(missing_docs)]

use couponmix_core::{Blocked, Coupon, Grouping};
use proptest::prelude::*;

pub const LONG_TERM: [&str; 2] = ["l", "r"];
pub const FLAT: [&str; 1] = ["f"];
pub const EARLY_BIRD: [&str; 2] = ["l", "f"];

pub fn coupon(name: &str, tags: &[&str]) -> Coupon {
    Coupon::named(name, tags.iter().copied())
}

pub fn unnamed(tags: &[&str]) -> Coupon {
    Coupon::new(tags.iter().copied())
}

pub fn coupons(tags: &[&[&str]]) -> Vec<Coupon> {
    tags.iter().map(|t| unnamed(t)).collect()
}

/// Three long-term variants, one flat coupon, two early-bird variants and a
/// trailing `test` coupon with the given tags.
pub fn seasonal_scenario(test_tags: &[&str]) -> Vec<Coupon> {
    vec![
        coupon("lz1", &LONG_TERM),
        coupon("lz2", &LONG_TERM),
        coupon("lz3", &LONG_TERM),
        coupon("coupon", &FLAT),
        coupon("fb1", &EARLY_BIRD),
        coupon("fb2", &EARLY_BIRD),
        coupon("test", test_tags),
    ]
}

/// Like [`seasonal_scenario`] with an untagged `test`, plus a second flat
/// coupon after the first.
pub fn two_flat_scenario() -> Vec<Coupon> {
    vec![
        coupon("lz1", &LONG_TERM),
        coupon("lz2", &LONG_TERM),
        coupon("lz3", &LONG_TERM),
        coupon("coupon", &FLAT),
        coupon("coupon2", &FLAT),
        coupon("fb1", &EARLY_BIRD),
        coupon("fb2", &EARLY_BIRD),
        coupon("test", &[]),
    ]
}

/// Group names, in order, for coupons that all carry a name
pub fn named_groups(items: &[Coupon], grouping: &Grouping) -> Vec<Vec<String>> {
    grouping
        .resolve(items)
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .map(|c| c.name.clone().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Assert that `grouping` contains exactly `expected` groups of names,
/// ignoring the order in which groups were created but not member order.
pub fn assert_groups_unordered(items: &[Coupon], grouping: &Grouping, expected: &[&[&str]]) {
    let actual = named_groups(items, grouping);
    assert_eq!(
        actual.len(),
        expected.len(),
        "group count mismatch: {actual:?}"
    );
    for group in expected {
        let group: Vec<String> = group.iter().map(|s| (*s).to_string()).collect();
        assert!(
            actual.contains(&group),
            "missing group {group:?} in {actual:?}"
        );
    }
}

/// Whether two items share a blocked type
pub fn conflict<T: Blocked>(a: &T, b: &T) -> bool {
    a.blocked_types()
        .iter()
        .any(|tag| b.blocked_types().contains(tag))
}

/// Strategy for coupon lists drawing tags from a small alphabet
pub fn arb_coupons(
    max_items: usize,
    alphabet: &'static [&'static str],
) -> impl Strategy<Value = Vec<Coupon>> {
    let tags = proptest::sample::subsequence(alphabet, 0..=alphabet.len().min(3));
    proptest::collection::vec(tags, 0..=max_items)
        .prop_map(|lists| lists.iter().map(|t| unnamed(t)).collect::<Vec<Coupon>>())
}
