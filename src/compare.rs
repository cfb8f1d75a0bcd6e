//! Ordinal, case-insensitive string comparison.
//!
//! Every ordering decision in this crate goes through the functions in this
//! module, so a phrase list sorted with [`compare_ignore_case`] is exactly the
//! order the border searches expect.
//!
//! # Folding Rule
//!
//! Characters are compared one `char` at a time after ASCII uppercasing, then
//! by Unicode scalar value. The comparison is locale-independent:
//!
//! - `'a'..='z'` fold onto `'A'..='Z'`, so `"ab"` and `"AB"` compare equal.
//! - Because folding goes to uppercase, `'_'` (and `'['`, `'\\'`, `']'`, `'^'`,
//!   `` '`' ``) sorts *after* every letter.
//! - Non-ASCII characters are not folded: `'é'` and `'É'` are distinct.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use autocomplete::compare::{compare_ignore_case, compare_prefix};
//!
//! assert_eq!(compare_ignore_case("Apple", "apple"), Ordering::Equal);
//! assert_eq!(compare_ignore_case("a_b", "aZ"), Ordering::Greater);
//!
//! // Only the first `prefix` characters of the candidate take part.
//! assert_eq!(compare_prefix("ac", "ACB"), Ordering::Equal);
//! assert_eq!(compare_prefix("ac", "ab"), Ordering::Greater);
//! assert_eq!(compare_prefix("ac", "a"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

#[inline]
const fn fold(character: char) -> char {
    character.to_ascii_uppercase()
}

/// Compares two whole strings, ignoring ASCII case.
///
/// This is the ordering a phrase list must be sorted by. A string that is a
/// case-insensitive prefix of another sorts first.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use autocomplete::compare::compare_ignore_case;
///
/// assert_eq!(compare_ignore_case("ac", "ACA"), Ordering::Less);
/// assert_eq!(compare_ignore_case("Ba", "ab"), Ordering::Greater);
/// ```
#[inline]
pub fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars().map(fold).cmp(right.chars().map(fold))
}

/// Compares `prefix` against the first `prefix.chars().count()` characters of
/// `candidate`, ignoring ASCII case.
///
/// Returns [`Ordering::Less`] when the prefix sorts before the truncated
/// candidate, [`Ordering::Greater`] when it sorts after (including when the
/// candidate runs out of characters first), and [`Ordering::Equal`] when the
/// candidate starts with the prefix.
///
/// The candidate is walked lazily and never copied.
///
/// # Complexity
///
/// O(L) where L is the length of `prefix` in characters.
#[inline]
pub fn compare_prefix(prefix: &str, candidate: &str) -> Ordering {
    let mut candidate_characters = candidate.chars();
    for prefix_character in prefix.chars() {
        let Some(candidate_character) = candidate_characters.next() else {
            return Ordering::Greater;
        };
        match fold(prefix_character).cmp(&fold(candidate_character)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Returns `true` if `phrase` starts with `prefix`, ignoring ASCII case.
///
/// # Examples
///
/// ```rust
/// use autocomplete::compare::starts_with_ignore_case;
///
/// assert!(starts_with_ignore_case("Autocomplete", "AUTO"));
/// assert!(starts_with_ignore_case("anything", ""));
/// assert!(!starts_with_ignore_case("auto", "automatic"));
/// ```
#[inline]
pub fn starts_with_ignore_case(phrase: &str, prefix: &str) -> bool {
    compare_prefix(prefix, phrase) == Ordering::Equal
}
