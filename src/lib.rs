//! # autocomplete
//!
//! Prefix queries over a sorted phrase list: the first phrase with a prefix,
//! the first `k` such phrases, and how many there are.
//!
//! ## Overview
//!
//! All phrases sharing a prefix sit next to each other in a list sorted by
//! case-insensitive ordinal comparison. Two non-recursive binary searches find
//! the ends of that run in O(log n) comparisons, each O(L) for a prefix of L
//! characters; every query is answered from that run alone.
//!
//! - **Comparison**: ordinal, locale-independent, ASCII case-insensitive
//!   ([`compare`])
//! - **Phrase access**: any slice, vector or array of strings ([`source`])
//! - **Borders**: left and right border searches over a sentinel bracket
//!   ([`border`])
//! - **Queries**: `find_first`, `top_by_prefix`, `count_by_prefix` ([`query`])
//! - **Collection**: an owned phrase list whose order is checked once
//!   ([`collection`])
//!
//! ## Feature Flags
//!
//! - `border`: Left and right border searches
//! - `query`: Prefix queries (implies `border`)
//! - `collection`: `PhraseCollection` (implies `query`)
//! - `serde`: Serialization for `PhraseCollection` and `SearchRange`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use autocomplete::prelude::*;
//!
//! let phrases = ["ab", "ac", "aca", "acb", "ba", "bc", "gg"];
//!
//! assert_eq!(left_border(&phrases, "ac"), 0);
//! assert_eq!(right_border(&phrases, "ac"), 4);
//! assert_eq!(count_by_prefix(&phrases, "AC"), 3);
//! assert_eq!(top_by_prefix(&phrases, "ac", 1), vec!["ac"]);
//! assert_eq!(find_first(&phrases, "b"), Some("ba"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use autocomplete::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::*;
    pub use crate::source::*;

    #[cfg(feature = "border")]
    pub use crate::border::*;

    #[cfg(feature = "query")]
    pub use crate::query::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::error::*;
}

pub mod compare;

pub mod source;

#[cfg(feature = "border")]
pub mod border;

#[cfg(feature = "query")]
pub mod query;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "collection")]
pub mod error;
