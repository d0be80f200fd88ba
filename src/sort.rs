//! Ordering of ranked-search results.
//!
//! Results are ordered by descending score, except that scores within
//! [`SCORE_TIE_TOLERANCE`] of each other are treated as equal and ordered by
//! ascending edit distance. Items equal on both keep their input order.

use std::cmp::Ordering;

use crate::ranking::{MatchResult, SCORE_TIE_TOLERANCE};

/// Tie-tolerant comparator for match results.
///
/// 1. **Scores differ by at least the tolerance**: higher score first.
/// 2. **Scores within the tolerance**: lower distance first.
///
/// The tolerance makes this comparator intransitive (0.0000, 0.0009 and
/// 0.0018 chain into "equal" pairs that are not all equal), so it must be
/// used with [`stable_sort_by`] rather than `slice::sort_by`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use fuzzyrank::{MatchResult, compare_matches};
///
/// let item = "x";
/// let close = MatchResult { item: &item, index: 0, score: 0.8000, distance: 1 };
/// let far = MatchResult { item: &item, index: 1, score: 0.8005, distance: 3 };
/// let best = MatchResult { item: &item, index: 2, score: 0.9, distance: 5 };
///
/// // Within tolerance: distance decides.
/// assert_eq!(compare_matches(&close, &far), Ordering::Less);
/// // Outside tolerance: score decides.
/// assert_eq!(compare_matches(&best, &close), Ordering::Less);
/// ```
pub fn compare_matches<T>(a: &MatchResult<'_, T>, b: &MatchResult<'_, T>) -> Ordering {
    if (a.score - b.score).abs() < SCORE_TIE_TOLERANCE {
        a.distance.cmp(&b.distance)
    } else {
        b.score.total_cmp(&a.score)
    }
}

/// Stable bottom-up merge sort driven by an arbitrary comparator.
///
/// Unlike `slice::sort_by`, this never panics when `compare` is not a total
/// order; the output is then deterministic but unspecified. Elements that
/// compare `Equal` keep their relative order.
///
/// # Examples
///
/// ```
/// use fuzzyrank::stable_sort_by;
///
/// let mut v = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// stable_sort_by(&mut v, |x, y| x.0.cmp(&y.0));
/// assert_eq!(v, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn stable_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut buf = v.to_vec();
    // Runs alternate between `v` and `buf` each pass; this tracks which one
    // holds the current runs.
    let mut sorted_in_v = true;
    let mut width = 1;

    while width < len {
        if sorted_in_v {
            merge_pass(v, &mut buf, width, &mut compare);
        } else {
            merge_pass(&buf, v, width, &mut compare);
        }
        sorted_in_v = !sorted_in_v;
        width = width.saturating_mul(2);
    }

    if !sorted_in_v {
        v.clone_from_slice(&buf);
    }
}

/// Merge adjacent runs of length `width` from `src` into `dst`.
fn merge_pass<T, F>(src: &[T], dst: &mut [T], width: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = src.len();
    let mut start = 0;

    while start < len {
        let mid = start.saturating_add(width).min(len);
        let end = mid.saturating_add(width).min(len);
        let (mut i, mut j, mut k) = (start, mid, start);

        while i < mid && j < end {
            // Take from the right run only when strictly less, so equal
            // elements keep their original order.
            if compare(&src[j], &src[i]) == Ordering::Less {
                dst[k] = src[j].clone();
                j += 1;
            } else {
                dst[k] = src[i].clone();
                i += 1;
            }
            k += 1;
        }

        let left_rest = mid - i;
        dst[k..k + left_rest].clone_from_slice(&src[i..mid]);
        k += left_rest;
        dst[k..end].clone_from_slice(&src[j..end]);

        start = end;
    }
}
