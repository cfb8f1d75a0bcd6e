//! Right border: the first phrase past the prefix run.

use std::cmp::Ordering;

use super::{full_bracket, narrow};
use crate::source::PhraseSource;

/// Finds the right border of the run of phrases starting with `prefix`,
/// within the bracket `(left, right)`.
///
/// Returns the index of the first phrase whose first `L` characters sort
/// strictly after `prefix`, or `right` if no phrase inside the bracket does.
/// That is one past the last phrase starting with `prefix`.
///
/// The bracket rules are those of
/// [`left_border_index`](super::left_border_index).
///
/// # Edge Cases
///
/// - An empty prefix returns `right` (`phrases.len()` for the full bracket).
/// - A prefix before every phrase returns `0`.
/// - A prefix after every phrase returns `phrases.len()`.
///
/// # Complexity
///
/// O(log n * L).
///
/// # Examples
///
/// ```rust
/// use autocomplete::border::right_border_index;
///
/// let phrases = ["ab", "ac", "aca", "acb", "ba"];
/// assert_eq!(right_border_index(&phrases, "ac", -1, 5), 4);
/// assert_eq!(right_border_index(&phrases, "aa", -1, 5), 0);
/// assert_eq!(right_border_index(&phrases, "", -1, 5), 5);
/// ```
pub fn right_border_index<P>(phrases: &P, prefix: &str, left: isize, right: isize) -> isize
where
    P: PhraseSource + ?Sized,
{
    // A truncated tie is a match and stays left of the border.
    let (_, right) = narrow(phrases, prefix, left, right, |ordering| {
        ordering != Ordering::Less
    });
    right
}

/// [`right_border_index`] over the full `(-1, len)` bracket.
///
/// # Examples
///
/// ```rust
/// use autocomplete::border::right_border;
///
/// assert_eq!(right_border(&["ab", "ac", "ba"], "a"), 2);
/// ```
#[inline]
pub fn right_border<P>(phrases: &P, prefix: &str) -> isize
where
    P: PhraseSource + ?Sized,
{
    let (left, right) = full_bracket(phrases.len());
    right_border_index(phrases, prefix, left, right)
}
