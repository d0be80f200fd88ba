//! Score fusion and per-field scoring.
//!
//! [`similarity`] blends n-gram similarity with edit-distance similarity into
//! one score. [`score_field`] decides how a single text field scores against
//! a query inside a ranked search, and [`MatchResult`] records the winning
//! field's score for each item that survives.

use memchr::memmem::Finder;

use crate::distance::{distance_normalized, normalized_distance_normalized};
use crate::ngram::{DEFAULT_NGRAM_SIZE, contains, ngram_similarity_normalized};
use crate::normalize::{char_len, normalize, normalize_into};
use crate::options::MatchOptions;

/// Weight of n-gram similarity in [`similarity`].
pub const NGRAM_WEIGHT: f64 = 0.7;

/// Weight of `1 - normalized_levenshtein_distance` in [`similarity`].
pub const EDIT_WEIGHT: f64 = 0.3;

/// Scores closer than this are ranked as equal and ordered by distance.
pub const SCORE_TIE_TOLERANCE: f64 = 0.001;

/// Combined similarity of two strings in `[0, 1]`.
///
/// Computed as `ngram_similarity(a, b, 2) * 0.7 + (1 - normalized_distance) * 0.3`.
/// The n-gram term dominates; the edit-distance term catches differences
/// bigrams under-penalize, such as a swap inside one bigram window.
///
/// # Examples
///
/// ```
/// use fuzzyrank::similarity;
///
/// assert_eq!(similarity("Москва", "москва"), 1.0);
/// assert_eq!(similarity("ёлка", "елка"), 1.0);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// assert!(similarity("корабль", "карабль") > similarity("корабль", "дом"));
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    let ngram = ngram_similarity_normalized(&a, &b, DEFAULT_NGRAM_SIZE);
    let edit = 1.0 - normalized_distance_normalized(&a, &b);
    ngram * NGRAM_WEIGHT + edit * EDIT_WEIGHT
}

/// Score and edit distance of one accepted text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScore {
    /// Relevance in `[0, 1]`.
    pub score: f64,
    /// Levenshtein distance to the query; `0` for substring hits.
    pub distance: usize,
}

/// One item that survived a ranked search, with its best field's score.
///
/// `index` is the item's position in the input slice.
#[derive(Debug)]
pub struct MatchResult<'a, T> {
    /// The matched item.
    pub item: &'a T,
    /// Position of the item in the searched slice.
    pub index: usize,
    /// Best score over the item's fields.
    pub score: f64,
    /// Distance belonging to the best-scoring field.
    pub distance: usize,
}

// Manual impls: the derives would demand `T: Clone` even though only a
// reference to `T` is stored.
impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatchResult<'_, T> {}

/// Score a single text field against a query.
///
/// Returns `None` when the field is rejected. Checks run in this order:
///
/// 1. Empty field (after normalization): rejected.
/// 2. Field contains the query: score `len(query) / len(text)`, distance 0.
/// 3. Query is longer and contains the field: score `1.0`, distance 0.
/// 4. Otherwise the n-gram similarity is the score and the full Levenshtein
///    distance is the distance. With `max_distance` set the field is
///    accepted iff `distance <= max_distance`; without it, iff
///    `score >= threshold`.
///
/// # Examples
///
/// ```
/// use fuzzyrank::{MatchOptions, score_field};
///
/// let opts = MatchOptions::default();
///
/// let hit = score_field("Северное сияние", "север", &opts).unwrap();
/// assert_eq!(hit.score, 5.0 / 15.0);
/// assert_eq!(hit.distance, 0);
///
/// let typo = score_field("карабль", "корабль", &opts).unwrap();
/// assert_eq!(typo.distance, 1);
///
/// assert!(score_field("дом", "корабль", &opts).is_none());
/// ```
pub fn score_field(text: &str, query: &str, options: &MatchOptions) -> Option<FieldScore> {
    let pq = PreparedQuery::new(query);
    let mut buf = String::new();
    score_field_prepared(text, &pq, options, &mut buf)
}

/// Pre-computed query data for amortizing repeated per-field scoring.
///
/// Holds the normalized query, its character count, and a substring finder
/// so a ranked search normalizes and indexes the query once per call.
pub(crate) struct PreparedQuery {
    pub(crate) normalized: String,
    char_len: usize,
    finder: Finder<'static>,
}

impl PreparedQuery {
    pub(crate) fn new(query: &str) -> Self {
        let normalized = normalize(query);
        let char_len = char_len(&normalized);
        let finder = Finder::new(normalized.as_bytes()).into_owned();
        Self {
            normalized,
            char_len,
            finder,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Inner hot-path scoring using a prepared query and a reusable buffer for
/// the normalized field text.
pub(crate) fn score_field_prepared(
    text: &str,
    pq: &PreparedQuery,
    options: &MatchOptions,
    text_buf: &mut String,
) -> Option<FieldScore> {
    normalize_into(text, text_buf);
    let text = text_buf.as_str();
    if text.is_empty() {
        return None;
    }

    let text_len = char_len(text);

    if pq.finder.find(text.as_bytes()).is_some() {
        return Some(FieldScore {
            score: pq.char_len as f64 / text_len as f64,
            distance: 0,
        });
    }

    if pq.char_len > text_len && contains(&pq.normalized, text) {
        return Some(FieldScore {
            score: 1.0,
            distance: 0,
        });
    }

    let score = ngram_similarity_normalized(text, &pq.normalized, DEFAULT_NGRAM_SIZE);
    let distance = distance_normalized(text, &pq.normalized);

    let accepted = match options.max_distance {
        Some(max_distance) => distance <= max_distance,
        None => score >= options.threshold,
    };

    accepted.then_some(FieldScore { score, distance })
}
