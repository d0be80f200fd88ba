//! Levenshtein edit distance over normalized strings.

use crate::normalize::normalize;

/// Compute the Levenshtein distance between two strings.
///
/// Both inputs are normalized first, so case, the `ё`/`е` variant, and
/// surrounding whitespace never count as edits. Insertions, deletions, and
/// substitutions each cost one.
///
/// # Examples
///
/// ```
/// use fuzzyrank::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("Ёлка", "елка"), 0);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a = normalize(a);
    let b = normalize(b);
    distance_normalized(&a, &b)
}

/// Levenshtein distance scaled into `[0, 1]` by the longer normalized length.
///
/// Two strings that are both empty after normalization are identical and
/// score `0.0`.
///
/// # Examples
///
/// ```
/// use fuzzyrank::normalized_levenshtein_distance;
///
/// assert_eq!(normalized_levenshtein_distance("", ""), 0.0);
/// assert_eq!(normalized_levenshtein_distance("abcd", "abcx"), 0.25);
/// assert_eq!(normalized_levenshtein_distance("abc", ""), 1.0);
/// ```
pub fn normalized_levenshtein_distance(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    normalized_distance_normalized(&a, &b)
}

/// [`levenshtein_distance`] for inputs that are already normalized.
pub(crate) fn distance_normalized(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// [`normalized_levenshtein_distance`] for inputs that are already normalized.
pub(crate) fn normalized_distance_normalized(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein(&a, &b) as f64 / max_len as f64
}

/// Dynamic-programming edit distance, keeping only the previous table row.
///
/// Row `i` of the full `(len(a)+1) x (len(b)+1)` table depends only on row
/// `i - 1`, so two rows of `len(b) + 1` cells suffice.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
