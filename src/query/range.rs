//! Half-open index range of the phrases matching a prefix.

use std::fmt;
use std::ops::Range;

/// The half-open interval `[start, end)` of phrases that start with a prefix.
///
/// A `SearchRange` is only meaningful for the phrase list it was computed
/// from. It is empty when `start == end`; `start` is then the position where a
/// phrase with that prefix would be inserted.
///
/// # Examples
///
/// ```rust
/// use autocomplete::query::search_range;
///
/// let phrases = ["ab", "ac", "aca", "acb", "ba"];
/// let range = search_range(&phrases, "ac");
/// assert_eq!(range.as_range(), 1..4);
/// assert_eq!(range.len(), 3);
/// assert_eq!(&phrases[range.as_range()], &["ac", "aca", "acb"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SearchRangeFields")
)]
pub struct SearchRange {
    start: usize,
    end: usize,
}

/// Unchecked wire form of [`SearchRange`]; deserialization goes through
/// [`SearchRange::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SearchRangeFields {
    start: usize,
    end: usize,
}

#[cfg(feature = "serde")]
impl From<SearchRangeFields> for SearchRange {
    fn from(fields: SearchRangeFields) -> Self {
        Self::new(fields.start, fields.end)
    }
}

impl SearchRange {
    /// Creates a range from its bounds.
    ///
    /// An inverted pair (`end < start`) is collapsed to the empty range at
    /// `start`.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// Returns the first matching index.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns one past the last matching index.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of matching phrases.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if no phrase matches.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `index` lies inside the range.
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns the range as a [`Range`] suitable for slicing.
    #[inline]
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the first `count` indices of the range, or all of them if the
    /// range is shorter.
    #[inline]
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        Self::new(self.start, self.start + count.min(self.len()))
    }
}

impl From<SearchRange> for Range<usize> {
    #[inline]
    fn from(range: SearchRange) -> Self {
        range.as_range()
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}, {})", self.start, self.end)
    }
}

static_assertions::assert_impl_all!(SearchRange: Send, Sync, Copy);
