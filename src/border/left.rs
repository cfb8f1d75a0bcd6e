//! Left border: the last phrase that sorts strictly before the prefix.

use std::cmp::Ordering;

use super::{full_bracket, narrow};
use crate::source::PhraseSource;

/// Finds the left border of the run of phrases starting with `prefix`, within
/// the bracket `(left, right)`.
///
/// Returns the index of the last phrase whose first `L` characters sort
/// strictly before `prefix` (L being the prefix length), or `left` if no
/// phrase inside the bracket does. One past the result is the first phrase
/// that can match.
///
/// The bracket must satisfy `-1 <= left < right <= phrases.len()` and contain
/// the border; [`full_bracket`] always does. Pass `-1` and `phrases.len()`
/// unless an outer search has already narrowed the range.
///
/// # Edge Cases
///
/// - An empty prefix returns `left` (`-1` for the full bracket): every phrase
///   matches it.
/// - A prefix before every phrase returns `-1`.
/// - A prefix after every phrase returns `phrases.len() - 1`.
///
/// # Complexity
///
/// O(log n * L).
///
/// # Examples
///
/// ```rust
/// use autocomplete::border::left_border_index;
///
/// let phrases = ["ab", "ac", "aca", "acb", "ba"];
/// assert_eq!(left_border_index(&phrases, "AC", -1, 5), 0);
/// assert_eq!(left_border_index(&phrases, "zz", -1, 5), 4);
/// assert_eq!(left_border_index(&phrases, "", -1, 5), -1);
/// ```
///
/// [`full_bracket`]: super::full_bracket
pub fn left_border_index<P>(phrases: &P, prefix: &str, left: isize, right: isize) -> isize
where
    P: PhraseSource + ?Sized,
{
    // Only phrases that sort before the prefix may become the left end; a
    // truncated tie is already part of the run.
    let (left, _) = narrow(phrases, prefix, left, right, |ordering| {
        ordering == Ordering::Greater
    });
    left
}

/// [`left_border_index`] over the full `(-1, len)` bracket.
///
/// # Examples
///
/// ```rust
/// use autocomplete::border::left_border;
///
/// assert_eq!(left_border(&["ab", "ac", "ba"], "b"), 1);
/// ```
#[inline]
pub fn left_border<P>(phrases: &P, prefix: &str) -> isize
where
    P: PhraseSource + ?Sized,
{
    let (left, right) = full_bracket(phrases.len());
    left_border_index(phrases, prefix, left, right)
}
