//! Prefix queries built on the two border searches.
//!
//! Every query here resolves the run of matching phrases with
//! [`left_border`] and [`right_border`] and then reads only inside it:
//!
//! | Query               | Result                           | Complexity         |
//! |---------------------|----------------------------------|--------------------|
//! | [`search_range`]    | `[start, end)` of the matches    | O(log n * L)       |
//! | [`find_first`]      | first match, if any              | O(log n * L)       |
//! | [`top_by_prefix`]   | first `count` matches, in order  | O(log n * L + count) |
//! | [`count_by_prefix`] | number of matches                | O(log n * L)       |
//!
//! L is the prefix length in characters.
//!
//! # Preconditions
//!
//! The phrases must be sorted by
//! [`compare_ignore_case`](crate::compare::compare_ignore_case). This is not
//! verified on every query. Debug builds assert that the first and last
//! phrases of the computed run really start with the prefix, which catches
//! most unsorted inputs; release builds return an unspecified (but in-bounds)
//! answer. Use [`PhraseCollection`](crate::collection::PhraseCollection) to
//! have the order checked once up front.
//!
//! # Examples
//!
//! ```rust
//! use autocomplete::query::{count_by_prefix, find_first, top_by_prefix};
//!
//! let phrases = ["ab", "ac", "aca", "acb", "ba", "bc", "gg"];
//!
//! assert_eq!(find_first(&phrases, "AC"), Some("ac"));
//! assert_eq!(top_by_prefix(&phrases, "ac", 2), vec!["ac", "aca"]);
//! assert_eq!(count_by_prefix(&phrases, "ac"), 3);
//! assert_eq!(count_by_prefix(&phrases, "zz"), 0);
//! ```

mod range;

pub use range::SearchRange;

use tracing::trace;

use crate::border::{left_border, right_border};
use crate::compare::starts_with_ignore_case;
use crate::source::PhraseSource;

/// Returns the range of phrases starting with `prefix`.
///
/// # Examples
///
/// ```rust
/// use autocomplete::query::search_range;
///
/// let phrases = ["ab", "ac", "ba"];
/// assert_eq!(search_range(&phrases, "b").as_range(), 2..3);
/// assert!(search_range(&phrases, "c").is_empty());
/// assert_eq!(search_range(&phrases, "").len(), 3);
/// ```
pub fn search_range<P>(phrases: &P, prefix: &str) -> SearchRange
where
    P: PhraseSource + ?Sized,
{
    let left = left_border(phrases, prefix);
    let right = right_border(phrases, prefix);
    debug_assert!(
        left < right,
        "left border {left} not before right border {right} for prefix {prefix:?}"
    );

    let range = SearchRange::new(position(left + 1), position(right));
    debug_assert_run_matches(phrases, prefix, range);
    trace!(prefix, start = range.start(), end = range.end(), "resolved prefix range");
    range
}

/// Returns the first phrase, in list order, that starts with `prefix`.
///
/// Returns `None` when no phrase matches, including for an empty list. An
/// empty prefix matches the first phrase.
///
/// # Examples
///
/// ```rust
/// use autocomplete::query::find_first;
///
/// let phrases = ["ab", "ac", "aca"];
/// assert_eq!(find_first(&phrases, "ac"), Some("ac"));
/// assert_eq!(find_first(&phrases, "ad"), None);
/// assert_eq!(find_first(&phrases, ""), Some("ab"));
/// ```
pub fn find_first<'a, P>(phrases: &'a P, prefix: &str) -> Option<&'a str>
where
    P: PhraseSource + ?Sized,
{
    let index = position(left_border(phrases, prefix) + 1);
    if index >= phrases.len() {
        return None;
    }
    let phrase = phrases.phrase(index);
    starts_with_ignore_case(phrase, prefix).then_some(phrase)
}

/// Returns up to `count` phrases starting with `prefix`, in list order.
///
/// A `count` of zero, or one that does not convert to `usize` (a negative
/// count), yields an empty vector. Only the matching run is read, so the cost
/// does not depend on how many phrases precede or follow it.
///
/// # Examples
///
/// ```rust
/// use autocomplete::query::top_by_prefix;
///
/// let phrases = ["ab", "ac", "aca", "acb", "ba"];
/// assert_eq!(top_by_prefix(&phrases, "ac", 2), vec!["ac", "aca"]);
/// assert_eq!(top_by_prefix(&phrases, "ac", 100), vec!["ac", "aca", "acb"]);
/// assert!(top_by_prefix(&phrases, "ac", 0).is_empty());
/// assert!(top_by_prefix(&phrases, "ac", -5).is_empty());
/// ```
pub fn top_by_prefix<'a, P, C>(phrases: &'a P, prefix: &str, count: C) -> Vec<&'a str>
where
    P: PhraseSource + ?Sized,
    C: TryInto<usize>,
{
    let Ok(count) = count.try_into() else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }

    search_range(phrases, prefix)
        .take(count)
        .as_range()
        .map(|index| phrases.phrase(index))
        .collect()
}

/// Returns the number of phrases starting with `prefix`.
///
/// # Examples
///
/// ```rust
/// use autocomplete::query::count_by_prefix;
///
/// let phrases = ["Ab", "ac"];
/// assert_eq!(count_by_prefix(&phrases, "AB"), 1);
/// assert_eq!(count_by_prefix(&phrases, "a"), 2);
/// assert_eq!(count_by_prefix(&phrases, ""), 2);
/// ```
pub fn count_by_prefix<P>(phrases: &P, prefix: &str) -> usize
where
    P: PhraseSource + ?Sized,
{
    search_range(phrases, prefix).len()
}

/// Converts a border in `-1..=len` to an index, mapping the `-1` sentinel to 0.
#[inline]
#[allow(clippy::cast_sign_loss)]
const fn position(border: isize) -> usize {
    if border < 0 { 0 } else { border as usize }
}

/// Checks that the run starts and ends with a match. Both ends hold by
/// construction only when the phrases are sorted.
#[inline]
fn debug_assert_run_matches<P>(phrases: &P, prefix: &str, range: SearchRange)
where
    P: PhraseSource + ?Sized,
{
    if cfg!(debug_assertions) && !range.is_empty() {
        for index in [range.start(), range.end() - 1] {
            let phrase = phrases.phrase(index);
            debug_assert!(
                starts_with_ignore_case(phrase, prefix),
                "phrase {phrase:?} at {index} lies inside the run for prefix {prefix:?} without matching it: phrases are not sorted"
            );
        }
    }
}
