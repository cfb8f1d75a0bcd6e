//! Error types for building phrase collections.

/// A phrase list was not sorted by
/// [`compare_ignore_case`](crate::compare::compare_ignore_case).
///
/// Holds the first adjacent pair found out of order.
///
/// # Examples
///
/// ```rust
/// use autocomplete::collection::PhraseCollection;
/// use autocomplete::error::UnsortedPhrasesError;
///
/// let error = PhraseCollection::from_sorted(["ab", "ba", "ac"]).unwrap_err();
/// assert_eq!(
///     error,
///     UnsortedPhrasesError {
///         index: 1,
///         previous: "ba".to_string(),
///         next: "ac".to_string(),
///     }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "phrases are not sorted: \"ba\" at index 1 sorts after \"ac\" at index 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsortedPhrasesError {
    /// The index of `previous`; `next` sits at `index + 1`.
    pub index: usize,
    /// The phrase that sorts too late.
    pub previous: String,
    /// The phrase that sorts too early.
    pub next: String,
}

impl std::fmt::Display for UnsortedPhrasesError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "phrases are not sorted: {:?} at index {} sorts after {:?} at index {}",
            self.previous,
            self.index,
            self.next,
            self.index + 1
        )
    }
}

impl std::error::Error for UnsortedPhrasesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsorted_phrases_error_display() {
        let error = UnsortedPhrasesError {
            index: 0,
            previous: "b".to_string(),
            next: "A".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "phrases are not sorted: \"b\" at index 0 sorts after \"A\" at index 1"
        );
    }

    #[test]
    fn test_unsorted_phrases_error_is_error() {
        use std::error::Error;

        let error: Box<dyn Error> = Box::new(UnsortedPhrasesError {
            index: 3,
            previous: "z".to_string(),
            next: "a".to_string(),
        });
        assert!(error.source().is_none());
    }
}
