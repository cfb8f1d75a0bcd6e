#![cfg(feature = "query")]
//! Property-based tests for the border searches and prefix queries.
//!
//! Every query is checked against a linear scan over the same sorted phrases,
//! using phrases drawn from a small alphabet so that shared prefixes, case
//! variants and duplicates are common.

use std::cmp::Ordering;

use autocomplete::border::{left_border, right_border};
use autocomplete::compare::{compare_ignore_case, compare_prefix, starts_with_ignore_case};
use autocomplete::query::{count_by_prefix, find_first, search_range, top_by_prefix};
use proptest::prelude::*;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for a phrase list sorted case-insensitively.
fn sorted_phrases(max_size: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[aAbBc_]{0,5}", 0..max_size).prop_map(|mut phrases| {
        phrases.sort_by(|left, right| compare_ignore_case(left, right));
        phrases
    })
}

/// Strategy for a prefix over the same alphabet.
fn prefix() -> impl Strategy<Value = String> {
    "[aAbBc_]{0,3}"
}

fn matching(phrases: &[String], prefix: &str) -> Vec<String> {
    phrases
        .iter()
        .filter(|phrase| starts_with_ignore_case(phrase, prefix))
        .cloned()
        .collect()
}

// =============================================================================
// Border Laws
// =============================================================================

proptest! {
    /// Law: the range is never inverted.
    /// left_border + 1 <= right_border
    #[test]
    fn prop_borders_never_cross(phrases in sorted_phrases(40), prefix in prefix()) {
        prop_assert!(left_border(&phrases, &prefix) + 1 <= right_border(&phrases, &prefix));
    }

    /// Law: the left border counts the phrases sorting strictly before the prefix.
    #[test]
    fn prop_left_border_counts_smaller_phrases(phrases in sorted_phrases(40), prefix in prefix()) {
        let smaller = phrases
            .iter()
            .filter(|phrase| compare_prefix(&prefix, phrase) == Ordering::Greater)
            .count();
        prop_assert_eq!(left_border(&phrases, &prefix), isize::try_from(smaller).unwrap() - 1);
    }

    /// Law: the right border counts the phrases not sorting strictly after the prefix.
    #[test]
    fn prop_right_border_counts_non_greater_phrases(phrases in sorted_phrases(40), prefix in prefix()) {
        let not_greater = phrases
            .iter()
            .filter(|phrase| compare_prefix(&prefix, phrase) != Ordering::Less)
            .count();
        prop_assert_eq!(right_border(&phrases, &prefix), isize::try_from(not_greater).unwrap());
    }

    /// Law: everything inside the range matches, nothing outside does.
    #[test]
    fn prop_search_range_is_exact(phrases in sorted_phrases(40), prefix in prefix()) {
        let range = search_range(&phrases, &prefix);
        for (index, phrase) in phrases.iter().enumerate() {
            prop_assert_eq!(range.contains(index), starts_with_ignore_case(phrase, &prefix));
        }
    }
}

// =============================================================================
// Query Laws
// =============================================================================

proptest! {
    /// Law: count agrees with top over the whole list.
    /// count_by_prefix(p, x) == top_by_prefix(p, x, len(p)).len()
    #[test]
    fn prop_count_equals_unbounded_top(phrases in sorted_phrases(40), prefix in prefix()) {
        prop_assert_eq!(
            count_by_prefix(&phrases, &prefix),
            top_by_prefix(&phrases, &prefix, phrases.len()).len()
        );
    }

    /// Law: count agrees with a linear scan.
    #[test]
    fn prop_count_matches_linear_scan(phrases in sorted_phrases(40), prefix in prefix()) {
        prop_assert_eq!(count_by_prefix(&phrases, &prefix), matching(&phrases, &prefix).len());
    }

    /// Law: top returns the first `count` matches of a linear scan, in order.
    #[test]
    fn prop_top_matches_linear_scan(
        phrases in sorted_phrases(40),
        prefix in prefix(),
        count in 0usize..50
    ) {
        let expected: Vec<String> = matching(&phrases, &prefix).into_iter().take(count).collect();
        prop_assert_eq!(top_by_prefix(&phrases, &prefix, count), expected);
    }

    /// Law: the empty prefix matches everything.
    /// top_by_prefix(p, "", k) == p[..min(k, len)]
    #[test]
    fn prop_empty_prefix_returns_leading_phrases(phrases in sorted_phrases(40), count in 0usize..50) {
        let expected: Vec<&str> = phrases.iter().take(count).map(String::as_str).collect();
        prop_assert_eq!(top_by_prefix(&phrases, "", count), expected);
    }

    /// Law: a non-positive count yields nothing.
    #[test]
    fn prop_non_positive_count_is_empty(
        phrases in sorted_phrases(40),
        prefix in prefix(),
        count in i64::MIN..=0
    ) {
        prop_assert!(top_by_prefix(&phrases, &prefix, count).is_empty());
    }

    /// Law: find_first is the first match of a linear scan.
    #[test]
    fn prop_find_first_matches_linear_scan(phrases in sorted_phrases(40), prefix in prefix()) {
        let expected = phrases
            .iter()
            .find(|phrase| starts_with_ignore_case(phrase, &prefix))
            .map(String::as_str);
        prop_assert_eq!(find_first(&phrases, &prefix), expected);
    }

    /// Law: queries ignore the ASCII case of the prefix.
    #[test]
    fn prop_queries_ignore_prefix_case(phrases in sorted_phrases(40), prefix in prefix()) {
        let upper = prefix.to_ascii_uppercase();
        let lower = prefix.to_ascii_lowercase();
        prop_assert_eq!(count_by_prefix(&phrases, &upper), count_by_prefix(&phrases, &lower));
        prop_assert_eq!(search_range(&phrases, &upper), search_range(&phrases, &lower));
    }

    /// Law: repeated queries give identical answers.
    #[test]
    fn prop_queries_are_idempotent(phrases in sorted_phrases(40), prefix in prefix(), count in 0usize..10) {
        prop_assert_eq!(top_by_prefix(&phrases, &prefix, count), top_by_prefix(&phrases, &prefix, count));
        prop_assert_eq!(count_by_prefix(&phrases, &prefix), count_by_prefix(&phrases, &prefix));
        prop_assert_eq!(find_first(&phrases, &prefix), find_first(&phrases, &prefix));
    }
}
