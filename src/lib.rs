#![warn(missing_docs)]

//! Typo-tolerant fuzzy matching and relevance ranking.
//!
//! `fuzzyrank` decides whether a candidate string approximately matches a
//! query, scores the match with a blend of bigram similarity and Levenshtein
//! distance, and ranks collections by relevance. All comparisons run on
//! normalized text: trimmed, lower-cased, `ё` folded to `е`, and
//! NFC-composed.

/// String canonicalization applied before every comparison.
pub mod normalize;

/// Levenshtein edit distance, raw and length-normalized.
pub mod distance;

/// Bigram-set Jaccard similarity with a substring fast path.
pub mod ngram;

/// Score fusion and per-field scoring.
pub mod ranking;

/// Text projection from items to one or more candidate fields.
pub mod key;

/// Configuration options for matching and search.
pub mod options;

/// Tie-tolerant stable ordering of search results.
pub mod sort;

/// Match predicates and ranked search.
pub mod search;

// Re-export primary public API types and functions at the crate root.
pub use distance::{levenshtein_distance, normalized_levenshtein_distance};
pub use key::TextFields;
pub use ngram::{DEFAULT_NGRAM_SIZE, ngram_set, ngram_similarity};
pub use normalize::normalize;
pub use options::{DEFAULT_THRESHOLD, INCLUDES_THRESHOLD, MatchOptions, OptionsError};
pub use ranking::{FieldScore, MatchResult, SCORE_TIE_TOLERANCE, score_field, similarity};
pub use search::{fuzzy_includes, fuzzy_match, fuzzy_search, fuzzy_search_scored};
pub use sort::{compare_matches, stable_sort_by};
