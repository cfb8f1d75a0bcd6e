//! Left and right borders of a prefix run.
//!
//! In a phrase list sorted by [`compare_ignore_case`], all phrases starting
//! with a given prefix form one contiguous run. This module finds the two
//! indices that bracket that run:
//!
//! - [`left_border_index`]: the last index whose phrase sorts strictly before
//!   the prefix (`-1` if there is none).
//! - [`right_border_index`]: the first index whose phrase sorts strictly after
//!   the prefix once truncated to the prefix length (`len` if there is none).
//!
//! The matches are exactly `left + 1 .. right`.
//!
//! # Sentinel Bracket
//!
//! Both searches start from the out-of-bounds bracket `(-1, len)` returned by
//! [`full_bracket`]. Index `-1` stands for an element smaller than everything
//! and `len` for one larger than everything; neither is ever dereferenced.
//! Each step halves the bracket while keeping the answer inside it, so an
//! empty list and a prefix outside the data need no special cases.
//!
//! # Complexity
//!
//! O(log n) iterations, each an O(L) truncated comparison where L is the
//! prefix length. No recursion and no allocation.
//!
//! # Examples
//!
//! ```rust
//! use autocomplete::border::{left_border, right_border};
//!
//! let phrases = ["ab", "ac", "aca", "acb", "ba", "bc", "gg"];
//! assert_eq!(left_border(&phrases, "ac"), 0);
//! assert_eq!(right_border(&phrases, "ac"), 4);
//! ```
//!
//! [`compare_ignore_case`]: crate::compare::compare_ignore_case

mod left;
mod right;

pub use left::{left_border, left_border_index};
pub use right::{right_border, right_border_index};

use std::cmp::Ordering;

use crate::compare::compare_prefix;
use crate::source::PhraseSource;

/// The left sentinel: a virtual element before index 0.
pub const LEFT_SENTINEL: isize = -1;

/// Returns the initial `(-1, len)` bracket for a list of `len` phrases.
///
/// # Examples
///
/// ```rust
/// use autocomplete::border::full_bracket;
///
/// assert_eq!(full_bracket(0), (-1, 0));
/// assert_eq!(full_bracket(7), (-1, 7));
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn full_bracket(len: usize) -> (isize, isize) {
    // Slice lengths never exceed `isize::MAX`.
    (LEFT_SENTINEL, len as isize)
}

/// Shared skeleton of both borders.
///
/// Narrows `(left, right)` until it has width one. `moves_left` receives the
/// truncated comparison of `prefix` against the middle phrase and decides
/// whether the middle becomes the new `left`; otherwise it becomes `right`.
#[inline]
pub(crate) fn narrow<P, F>(
    phrases: &P,
    prefix: &str,
    mut left: isize,
    mut right: isize,
    moves_left: F,
) -> (isize, isize)
where
    P: PhraseSource + ?Sized,
    F: Fn(Ordering) -> bool,
{
    debug_assert!(
        LEFT_SENTINEL <= left && left < right && right <= full_bracket(phrases.len()).1,
        "bracket ({left}, {right}) outside (-1, {})",
        phrases.len()
    );

    while left + 1 < right {
        let middle = left + (right - left) / 2;
        if moves_left(compare_prefix(prefix, phrases.phrase(to_index(middle)))) {
            left = middle;
        } else {
            right = middle;
        }
    }

    (left, right)
}

/// Converts a bracket position known to be in bounds into a slice index.
#[inline]
#[allow(clippy::cast_sign_loss)]
const fn to_index(position: isize) -> usize {
    debug_assert!(position >= 0);
    position as usize
}
