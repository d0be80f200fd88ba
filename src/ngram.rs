//! Bigram-set similarity with a substring fast path.
//!
//! Scores two strings by the Jaccard overlap of their character n-gram sets,
//! blended with the ratio of their lengths. Exact and substring matches are
//! decided before any n-gram is extracted.

use std::collections::HashSet;

use crate::normalize::{char_len, normalize};

/// N-gram length used throughout the engine (bigrams).
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Weight of the Jaccard coefficient in the blended n-gram score.
pub const JACCARD_WEIGHT: f64 = 0.7;

/// Weight of the length ratio in the blended n-gram score.
pub const LENGTH_RATIO_WEIGHT: f64 = 0.3;

/// Extract the set of contiguous `k`-character windows of `s`.
///
/// A string shorter than `k` characters yields a single-element set holding
/// the whole string. Duplicate windows collapse. A `k` of zero is treated as
/// one. The input is used as given; normalize it first if needed.
///
/// # Examples
///
/// ```
/// use fuzzyrank::ngram_set;
///
/// let grams = ngram_set("привет", 2);
/// assert_eq!(grams.len(), 5);
/// assert!(grams.contains("пр") && grams.contains("ет"));
///
/// // Shorter than k: the whole string is the only gram.
/// assert_eq!(ngram_set("я", 2).into_iter().collect::<Vec<_>>(), vec!["я"]);
///
/// // Repeated windows collapse.
/// assert_eq!(ngram_set("aaaa", 2).len(), 1);
/// ```
pub fn ngram_set(s: &str, k: usize) -> HashSet<&str> {
    let k = k.max(1);

    // Byte offset of every char boundary, including the end of the string,
    // so that window `i` is `bounds[i]..bounds[i + k]`.
    let bounds: Vec<usize> = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect();
    let len = bounds.len() - 1;

    if len < k {
        return HashSet::from([s]);
    }

    (0..=len - k).map(|i| &s[bounds[i]..bounds[i + k]]).collect()
}

/// N-gram similarity of two strings in `[0, 1]`.
///
/// Both strings are normalized, then scored in this order:
///
/// 1. Either side empty: `1.0` if both are empty, otherwise `0.0`.
/// 2. Equal: `1.0`.
/// 3. One contains the other: shorter length over longer length.
/// 4. No shared `k`-gram: `0.0`, with no credit for similar lengths.
/// 5. Otherwise `jaccard * 0.7 + length_ratio * 0.3`.
///
/// # Examples
///
/// ```
/// use fuzzyrank::ngram_similarity;
///
/// assert_eq!(ngram_similarity("Север", "север", 2), 1.0);
/// assert_eq!(ngram_similarity("северное", "север", 2), 5.0 / 8.0);
/// assert!((ngram_similarity("корабль", "карабль", 2) - 0.65).abs() < 1e-9);
/// assert_eq!(ngram_similarity("корабль", "дом", 2), 0.0);
/// ```
pub fn ngram_similarity(a: &str, b: &str, k: usize) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    ngram_similarity_normalized(&a, &b, k)
}

/// [`ngram_similarity`] for inputs that are already normalized.
pub(crate) fn ngram_similarity_normalized(a: &str, b: &str, k: usize) -> f64 {
    if a.is_empty() || b.is_empty() {
        return if a == b { 1.0 } else { 0.0 };
    }

    if a == b {
        return 1.0;
    }

    let len_a = char_len(a);
    let len_b = char_len(b);
    let length_ratio = len_a.min(len_b) as f64 / len_a.max(len_b) as f64;

    if contains(a, b) || contains(b, a) {
        return length_ratio;
    }

    let grams_a = ngram_set(a, k);
    let grams_b = ngram_set(b, k);

    let intersection = grams_a.intersection(&grams_b).count();
    if intersection == 0 {
        return 0.0;
    }

    let union = grams_a.len() + grams_b.len() - intersection;
    let jaccard = intersection as f64 / union as f64;

    jaccard * JACCARD_WEIGHT + length_ratio * LENGTH_RATIO_WEIGHT
}

/// Substring test on UTF-8 bytes.
///
/// UTF-8 is self-synchronizing, so a byte-level hit is always a match on
/// whole characters.
pub(crate) fn contains(haystack: &str, needle: &str) -> bool {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}
