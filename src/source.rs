//! Read-only, indexable access to a sorted phrase list.
//!
//! The border searches only ever need two things from the phrase list: its
//! length and the phrase at a given index. [`PhraseSource`] captures exactly
//! that, so slices, vectors and arrays of anything string-like can be queried
//! in place without copying into a dedicated container.
//!
//! # Examples
//!
//! ```rust
//! use autocomplete::source::{PhraseSource, is_sorted_ignore_case};
//!
//! let phrases = vec!["ab".to_string(), "AC".to_string(), "ba".to_string()];
//! assert_eq!(PhraseSource::len(&phrases), 3);
//! assert_eq!(phrases.phrase(1), "AC");
//! assert!(is_sorted_ignore_case(&phrases));
//! ```

use std::cmp::Ordering;

use crate::compare::compare_ignore_case;

/// An immutable, randomly indexable sequence of phrases.
///
/// Implementations must return the same phrase for the same index for as long
/// as the source is borrowed.
pub trait PhraseSource {
    /// Returns the number of phrases.
    fn len(&self) -> usize;

    /// Returns the phrase at `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index >= self.len()`.
    fn phrase(&self, index: usize) -> &str;

    /// Returns `true` if there are no phrases.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: AsRef<str>> PhraseSource for [S] {
    #[inline]
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    #[inline]
    fn phrase(&self, index: usize) -> &str {
        self[index].as_ref()
    }
}

impl<S: AsRef<str>> PhraseSource for Vec<S> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn phrase(&self, index: usize) -> &str {
        self[index].as_ref()
    }
}

impl<S: AsRef<str>, const N: usize> PhraseSource for [S; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn phrase(&self, index: usize) -> &str {
        self[index].as_ref()
    }
}

impl<P: PhraseSource + ?Sized> PhraseSource for &P {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn phrase(&self, index: usize) -> &str {
        (**self).phrase(index)
    }
}

/// Returns the index `i` of the first adjacent pair with
/// `phrases[i] > phrases[i + 1]` under [`compare_ignore_case`], or `None` if
/// the phrases are sorted.
///
/// # Complexity
///
/// O(n * L) where L bounds the phrase length.
///
/// # Examples
///
/// ```rust
/// use autocomplete::source::first_unsorted_index;
///
/// assert_eq!(first_unsorted_index(&["a", "B", "c"]), None);
/// assert_eq!(first_unsorted_index(&["a", "c", "B"]), Some(1));
/// ```
pub fn first_unsorted_index<P: PhraseSource + ?Sized>(phrases: &P) -> Option<usize> {
    (1..phrases.len()).find_map(|next| {
        let previous = next - 1;
        (compare_ignore_case(phrases.phrase(previous), phrases.phrase(next)) == Ordering::Greater)
            .then_some(previous)
    })
}

/// Returns `true` if the phrases are sorted ascending under
/// [`compare_ignore_case`]. Equal neighbours are allowed.
#[inline]
pub fn is_sorted_ignore_case<P: PhraseSource + ?Sized>(phrases: &P) -> bool {
    first_unsorted_index(phrases).is_none()
}
