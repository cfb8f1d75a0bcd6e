//! Owned, validated phrase lists.
//!
//! This module provides [`PhraseCollection`], an immutable list of phrases
//! whose case-insensitive order is checked (or established) once, when it is
//! built. Every prefix query on it can then rely on that order.
//!
//! # Overview
//!
//! - [`PhraseCollection::from_sorted`] checks the order and rejects unsorted
//!   input with [`UnsortedPhrasesError`].
//! - [`PhraseCollection::from_unsorted`] (and `collect()`) sorts the input
//!   with [`compare_ignore_case`].
//! - Once built, a collection is never mutated; share it by reference.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity          |
//! |---------------------|---------------------|
//! | `from_sorted`       | O(n * L)            |
//! | `from_unsorted`     | O(n log n * L)      |
//! | `search_range`      | O(log n * L)        |
//! | `find_first`        | O(log n * L)        |
//! | `top_by_prefix`     | O(log n * L + k)    |
//! | `count_by_prefix`   | O(log n * L)        |
//! | `len` / `get`       | O(1)                |
//!
//! # Examples
//!
//! ```rust
//! use autocomplete::collection::PhraseCollection;
//!
//! let phrases: PhraseCollection = ["gg", "acb", "AB", "ba", "aca", "ac", "bc"]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(phrases.count_by_prefix("ac"), 3);
//! assert_eq!(phrases.top_by_prefix("a", 2), vec!["AB", "ac"]);
//! assert_eq!(phrases.find_first("B"), Some("ba"));
//! assert_eq!(phrases.find_first("zz"), None);
//! ```

use tracing::{debug, warn};

use crate::border;
use crate::compare::compare_ignore_case;
use crate::error::UnsortedPhrasesError;
use crate::query::{self, SearchRange};
use crate::source::{PhraseSource, first_unsorted_index};

/// An immutable phrase list sorted by [`compare_ignore_case`].
///
/// # Examples
///
/// ```rust
/// use autocomplete::collection::PhraseCollection;
///
/// let phrases = PhraseCollection::from_sorted(["Apple", "apricot", "banana"]).unwrap();
/// assert_eq!(phrases.len(), 3);
/// assert_eq!(phrases.prefixed("AP"), &["Apple", "apricot"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhraseCollection {
    phrases: Vec<String>,
}

impl PhraseCollection {
    /// Creates an empty collection.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phrases: Vec::new(),
        }
    }

    /// Builds a collection from phrases that are already sorted.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedPhrasesError`] naming the first adjacent pair that is
    /// out of order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use autocomplete::collection::PhraseCollection;
    ///
    /// assert!(PhraseCollection::from_sorted(["ab", "AC", "ba"]).is_ok());
    /// assert!(PhraseCollection::from_sorted(["ba", "ab"]).is_err());
    /// ```
    pub fn from_sorted<I, S>(phrases: I) -> Result<Self, UnsortedPhrasesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::try_from(phrases.into_iter().map(Into::into).collect::<Vec<String>>())
    }

    /// Builds a collection from phrases in any order, sorting them with
    /// [`compare_ignore_case`].
    ///
    /// The sort is stable: phrases that differ only in ASCII case keep their
    /// input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use autocomplete::collection::PhraseCollection;
    ///
    /// let phrases = PhraseCollection::from_unsorted(["b", "A", "a"]);
    /// assert_eq!(phrases.as_slice(), &["A", "a", "b"]);
    /// ```
    pub fn from_unsorted<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        phrases.sort_by(|left, right| compare_ignore_case(left, right));
        debug!(len = phrases.len(), "sorted phrase collection");
        Self { phrases }
    }

    /// Returns the number of phrases.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` if the collection holds no phrases.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Returns the phrase at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    /// Returns an iterator over the phrases in sorted order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.phrases.iter().map(String::as_str)
    }

    /// Returns the phrases as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }

    /// Consumes the collection and returns the sorted phrases.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.phrases
    }

    /// Returns the left border for `prefix`: the last index sorting strictly
    /// before it, or `-1`.
    ///
    /// See [`border::left_border_index`].
    #[inline]
    pub fn left_border_index(&self, prefix: &str) -> isize {
        border::left_border(self, prefix)
    }

    /// Returns the right border for `prefix`: one past the last match, or
    /// `len()`.
    ///
    /// See [`border::right_border_index`].
    #[inline]
    pub fn right_border_index(&self, prefix: &str) -> isize {
        border::right_border(self, prefix)
    }

    /// Returns the range of phrases starting with `prefix`.
    #[inline]
    pub fn search_range(&self, prefix: &str) -> SearchRange {
        query::search_range(self, prefix)
    }

    /// Returns every phrase starting with `prefix` as a subslice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use autocomplete::collection::PhraseCollection;
    ///
    /// let phrases = PhraseCollection::from_unsorted(["ab", "ac", "aca", "ba"]);
    /// assert_eq!(phrases.prefixed("ac"), &["ac", "aca"]);
    /// assert!(phrases.prefixed("c").is_empty());
    /// ```
    #[inline]
    pub fn prefixed(&self, prefix: &str) -> &[String] {
        &self.phrases[self.search_range(prefix).as_range()]
    }

    /// Returns the first phrase starting with `prefix`.
    ///
    /// See [`query::find_first`].
    #[inline]
    pub fn find_first(&self, prefix: &str) -> Option<&str> {
        query::find_first(self, prefix)
    }

    /// Returns up to `count` phrases starting with `prefix`, in order.
    ///
    /// See [`query::top_by_prefix`].
    #[inline]
    pub fn top_by_prefix<C: TryInto<usize>>(&self, prefix: &str, count: C) -> Vec<&str> {
        query::top_by_prefix(self, prefix, count)
    }

    /// Returns the number of phrases starting with `prefix`.
    ///
    /// See [`query::count_by_prefix`].
    #[inline]
    pub fn count_by_prefix(&self, prefix: &str) -> usize {
        query::count_by_prefix(self, prefix)
    }
}

impl PhraseSource for PhraseCollection {
    #[inline]
    fn len(&self) -> usize {
        self.phrases.len()
    }

    #[inline]
    fn phrase(&self, index: usize) -> &str {
        &self.phrases[index]
    }
}

impl TryFrom<Vec<String>> for PhraseCollection {
    type Error = UnsortedPhrasesError;

    fn try_from(phrases: Vec<String>) -> Result<Self, Self::Error> {
        if let Some(index) = first_unsorted_index(&phrases) {
            let error = UnsortedPhrasesError {
                index,
                previous: phrases[index].clone(),
                next: phrases[index + 1].clone(),
            };
            warn!(%error, "rejected phrase list");
            return Err(error);
        }
        debug!(len = phrases.len(), "validated phrase collection");
        Ok(Self { phrases })
    }
}

impl From<PhraseCollection> for Vec<String> {
    #[inline]
    fn from(collection: PhraseCollection) -> Self {
        collection.phrases
    }
}

impl AsRef<[String]> for PhraseCollection {
    #[inline]
    fn as_ref(&self) -> &[String] {
        &self.phrases
    }
}

impl<S: Into<String>> FromIterator<S> for PhraseCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_unsorted(iter)
    }
}

impl<'a> IntoIterator for &'a PhraseCollection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.phrases.iter()
    }
}

impl IntoIterator for PhraseCollection {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.phrases.into_iter()
    }
}

static_assertions::assert_impl_all!(PhraseCollection: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for PhraseCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for phrase in self {
            seq.serialize_element(phrase)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PhraseCollectionVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for PhraseCollectionVisitor {
    type Value = PhraseCollection;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of phrases sorted case-insensitively")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut phrases = Vec::with_capacity(capacity);
        while let Some(phrase) = seq.next_element::<String>()? {
            phrases.push(phrase);
        }
        PhraseCollection::try_from(phrases).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PhraseCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PhraseCollectionVisitor)
    }
}
