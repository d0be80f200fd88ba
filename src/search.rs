//! Fuzzy match predicates and ranked search over collections.

use log::{debug, trace};

use crate::distance::distance_normalized;
use crate::key::TextFields;
use crate::ngram::{DEFAULT_NGRAM_SIZE, contains, ngram_similarity_normalized};
use crate::normalize::{char_len, normalize};
use crate::options::MatchOptions;
use crate::ranking::{FieldScore, MatchResult, PreparedQuery, score_field_prepared};
use crate::sort::{compare_matches, stable_sort_by};

/// Decide whether `text` matches `query`.
///
/// Checks run in priority order:
///
/// 1. Empty (or whitespace-only) query: always `true`.
/// 2. Empty text against a non-empty query: `false`.
/// 3. Normalized text contains the normalized query: `true`, whatever the
///    options say.
/// 4. Query is longer and contains the text: `true`.
/// 5. With `options.max_distance` set: `true` iff the Levenshtein distance
///    is within budget. The threshold is not consulted.
/// 6. Otherwise: `true` iff the bigram similarity reaches `options.threshold`.
///
/// # Examples
///
/// ```
/// use fuzzyrank::{MatchOptions, fuzzy_match};
///
/// let strict = MatchOptions::default().with_threshold(1.0);
/// assert!(fuzzy_match("Северное сияние", "север", &strict));
///
/// let opts = MatchOptions::default();
/// assert!(fuzzy_match("карабль", "корабль", &opts));
/// assert!(!fuzzy_match("дом", "корабль", &opts));
///
/// let budget = MatchOptions::default().with_threshold(0.9).with_max_distance(1);
/// assert!(fuzzy_match("кот", "кит", &budget));
/// ```
pub fn fuzzy_match(text: &str, query: &str, options: &MatchOptions) -> bool {
    let query = normalize(query);
    if query.is_empty() {
        return true;
    }

    let text = normalize(text);
    if text.is_empty() {
        return false;
    }

    if contains(&text, &query) {
        return true;
    }

    if char_len(&query) > char_len(&text) && contains(&query, &text) {
        return true;
    }

    match options.max_distance {
        Some(max_distance) => distance_normalized(&text, &query) <= max_distance,
        None => ngram_similarity_normalized(&text, &query, DEFAULT_NGRAM_SIZE) >= options.threshold,
    }
}

/// Permissive drop-in replacement for a plain substring test.
///
/// Equivalent to [`fuzzy_match`] with [`MatchOptions::includes`] (threshold
/// `0.3`, no distance budget).
///
/// # Examples
///
/// ```
/// use fuzzyrank::fuzzy_includes;
///
/// assert!(fuzzy_includes("Корабль", "кораб"));
/// assert!(fuzzy_includes("карабль", "корабль"));
/// assert!(!fuzzy_includes("дом", "корабль"));
/// assert!(fuzzy_includes("anything", ""));
/// ```
pub fn fuzzy_includes(text: &str, query: &str) -> bool {
    fuzzy_match(text, query, &MatchOptions::includes())
}

/// Filter `items` to those matching `query` and order them by relevance.
///
/// `get_text` projects each item to one or more text fields (see
/// [`TextFields`]); every field is scored independently and the item keeps
/// its best one. Items with no accepted, positively scored field are dropped.
/// Survivors are ordered by descending score, scores within `0.001` of each
/// other by ascending edit distance, and otherwise by input order.
///
/// An empty or whitespace-only query returns every item in input order.
///
/// # Examples
///
/// ```
/// use fuzzyrank::{MatchOptions, fuzzy_search};
///
/// let items = ["корабль", "карабль", "дом"];
/// let found = fuzzy_search(&items, "корабль", |s| (*s).into(), &MatchOptions::default());
/// assert_eq!(found, vec![&"корабль", &"карабль"]);
///
/// let all = fuzzy_search(&items, "  ", |s| (*s).into(), &MatchOptions::default());
/// assert_eq!(all.len(), 3);
/// ```
pub fn fuzzy_search<'a, T, F>(
    items: &'a [T],
    query: &str,
    get_text: F,
    options: &MatchOptions,
) -> Vec<&'a T>
where
    F: Fn(&'a T) -> TextFields<'a>,
{
    fuzzy_search_scored(items, query, get_text, options)
        .into_iter()
        .map(|r| r.item)
        .collect()
}

/// Like [`fuzzy_search`], but returns each survivor with its score, edit
/// distance, and input index.
///
/// An empty or whitespace-only query returns every item in input order with
/// score `1.0` and distance `0`.
///
/// # Examples
///
/// ```
/// use fuzzyrank::{MatchOptions, fuzzy_search_scored};
///
/// struct City { name: &'static str, aliases: Vec<&'static str> }
///
/// let cities = [
///     City { name: "Санкт-Петербург", aliases: vec!["Питер", "СПб"] },
///     City { name: "Москва", aliases: vec![] },
/// ];
///
/// let found = fuzzy_search_scored(
///     &cities,
///     "питер",
///     |c| {
///         let mut fields = vec![c.name];
///         fields.extend(&c.aliases);
///         fields.into()
///     },
///     &MatchOptions::default(),
/// );
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].index, 0);
/// assert_eq!(found[0].score, 1.0);
/// assert_eq!(found[0].distance, 0);
/// ```
pub fn fuzzy_search_scored<'a, T, F>(
    items: &'a [T],
    query: &str,
    get_text: F,
    options: &MatchOptions,
) -> Vec<MatchResult<'a, T>>
where
    F: Fn(&'a T) -> TextFields<'a>,
{
    let pq = PreparedQuery::new(query);
    if pq.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, item)| MatchResult {
                item,
                index,
                score: 1.0,
                distance: 0,
            })
            .collect();
    }

    trace!("fuzzy search start, total: {}", items.len());
    if let Some(max_distance) = options.max_distance {
        debug!("fuzzy search: distance budget {max_distance} overrides threshold");
    }

    let mut text_buf = String::new();
    let mut results: Vec<MatchResult<'a, T>> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let fields = get_text(item);
        let mut best: Option<FieldScore> = None;

        for field in fields.iter() {
            let Some(candidate) = score_field_prepared(field, &pq, options, &mut text_buf) else {
                continue;
            };
            // Strictly better wins, so among equal scores the earliest field
            // keeps its distance.
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        if let Some(best) = best.filter(|b| b.score > 0.0) {
            results.push(MatchResult {
                item,
                index,
                score: best.score,
                distance: best.distance,
            });
        }
    }

    stable_sort_by(&mut results, compare_matches);

    trace!("fuzzy search stop, total matched: {}", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search<'a>(items: &'a [&'a str], query: &str, options: &MatchOptions) -> Vec<&'a str> {
        fuzzy_search(items, query, |s| (*s).into(), options)
            .into_iter()
            .copied()
            .collect()
    }

    // --- fuzzy_match ---

    #[test]
    fn empty_query_matches_everything() {
        let opts = MatchOptions::default();
        assert!(fuzzy_match("anything", "", &opts));
        assert!(fuzzy_match("", "", &opts));
        assert!(fuzzy_match("text", "   ", &opts));
    }

    #[test]
    fn empty_text_never_matches_a_query() {
        let opts = MatchOptions::default().with_threshold(0.0);
        assert!(!fuzzy_match("", "test", &opts));
        assert!(!fuzzy_match("  ", "test", &opts));
    }

    #[test]
    fn substring_beats_any_threshold() {
        for threshold in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let opts = MatchOptions::default().with_threshold(threshold);
            assert!(fuzzy_match("Северное сияние", "север", &opts), "threshold {threshold}");
        }
    }

    #[test]
    fn substring_beats_a_zero_budget() {
        let opts = MatchOptions::default().with_max_distance(0);
        assert!(fuzzy_match("Северное сияние", "сияние", &opts));
    }

    #[test]
    fn longer_query_containing_text_matches() {
        let opts = MatchOptions::default().with_threshold(1.0);
        assert!(fuzzy_match("кот", "котенок", &opts));
    }

    #[test]
    fn budget_overrides_threshold() {
        let opts = MatchOptions::default()
            .with_threshold(0.9)
            .with_max_distance(1);
        assert!(fuzzy_match("кот", "кит", &opts));
        // Without the budget the bigram score (0) is far below 0.9.
        assert!(!fuzzy_match("кот", "кит", &MatchOptions::default().with_threshold(0.9)));
    }

    #[test]
    fn budget_counts_a_swap_as_two_edits() {
        let one = MatchOptions::default().with_max_distance(1);
        let two = MatchOptions::default().with_max_distance(2);
        assert!(!fuzzy_match("кот", "кто", &one));
        assert!(fuzzy_match("кот", "кто", &two));
    }

    #[test]
    fn budget_ignores_a_lenient_threshold() {
        // Threshold 0 would accept anything; the budget still rejects.
        let opts = MatchOptions::default()
            .with_threshold(0.0)
            .with_max_distance(1);
        assert!(!fuzzy_match("дом", "корабль", &opts));
    }

    #[test]
    fn threshold_path_uses_ngram_similarity() {
        assert!(fuzzy_match("карабль", "корабль", &MatchOptions::default()));
        assert!(!fuzzy_match(
            "карабль",
            "корабль",
            &MatchOptions::default().with_threshold(0.7)
        ));
    }

    #[test]
    fn variant_and_case_folded() {
        assert!(fuzzy_match("ЁЛКА", "елка", &MatchOptions::default().with_threshold(1.0)));
    }

    #[test]
    fn includes_is_more_permissive() {
        // "корова" vs "корабль": 2 shared bigrams of 9, lengths 6/7.
        // 2/9 * 0.7 + 6/7 * 0.3 ~= 0.41: between the two thresholds.
        assert!(fuzzy_includes("корова", "корабль"));
        assert!(!fuzzy_match("корова", "корабль", &MatchOptions::default()));
    }

    // --- fuzzy_search ---

    #[test]
    fn ranks_exact_before_typo_and_drops_unrelated() {
        let items = ["корабль", "карабль", "дом"];
        let found = search(&items, "корабль", &MatchOptions::default());
        assert_eq!(found, vec!["корабль", "карабль"]);
    }

    #[test]
    fn typo_listed_first_still_ranks_second() {
        let items = ["карабль", "дом", "корабль"];
        let found = search(&items, "корабль", &MatchOptions::default());
        assert_eq!(found, vec!["корабль", "карабль"]);
    }

    #[test]
    fn empty_query_is_identity() {
        let items = ["b", "a", "c"];
        assert_eq!(search(&items, "", &MatchOptions::default()), vec!["b", "a", "c"]);
        assert_eq!(search(&items, " \t ", &MatchOptions::default()), vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_items_yield_empty_results() {
        let items: [&str; 0] = [];
        assert!(search(&items, "кот", &MatchOptions::default()).is_empty());
    }

    #[test]
    fn empty_fields_are_dropped() {
        let items = ["", "   ", "кот"];
        let found = search(&items, "кот", &MatchOptions::default().with_threshold(0.0));
        assert_eq!(found, vec!["кот"]);
    }

    #[test]
    fn shorter_substring_hosts_rank_higher() {
        // Score is len(query) / len(text): tighter hosts win.
        let items = ["северное сияние", "север", "северный"];
        let found = search(&items, "север", &MatchOptions::default());
        assert_eq!(found, vec!["север", "северный", "северное сияние"]);
    }

    #[test]
    fn tied_substring_hits_keep_input_order() {
        let items = ["абвг", "вгде", "бвгд"];
        let found = search(&items, "вг", &MatchOptions::default());
        assert_eq!(found, vec!["абвг", "вгде", "бвгд"]);
    }

    #[test]
    fn equal_scores_ordered_by_distance() {
        // Both share one of five distinct bigrams with "abcd" at equal
        // length (score 0.44), but "abxd" is one edit away and "bacd" two.
        let items = ["bacd", "abxd"];
        let opts = MatchOptions::default().with_threshold(0.4);
        assert_eq!(search(&items, "abcd", &opts), vec!["abxd", "bacd"]);
    }

    #[test]
    fn zero_score_within_budget_is_dropped() {
        // "кит" is one edit from "кот" but shares no bigram, so its score is
        // zero and the item is not included.
        let items = ["кит"];
        let opts = MatchOptions::default().with_max_distance(1);
        assert!(search(&items, "кот", &opts).is_empty());
    }

    #[test]
    fn budget_admits_close_typos() {
        let items = ["карабль", "корабли", "дом"];
        let opts = MatchOptions::default().with_max_distance(1);
        let found = search(&items, "корабль", &opts);
        assert_eq!(found.len(), 2);
        assert!(!found.contains(&"дом"));
    }

    #[test]
    fn best_field_wins() {
        struct Product {
            title: &'static str,
            tags: Vec<&'static str>,
        }

        let products = [
            Product {
                title: "Стол",
                tags: vec!["мебель", "дерево"],
            },
            Product {
                title: "Дерево",
                tags: vec![],
            },
        ];

        let found = fuzzy_search_scored(
            &products,
            "дерево",
            |p| {
                let mut fields = vec![p.title];
                fields.extend(&p.tags);
                fields.into()
            },
            &MatchOptions::default(),
        );

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.score == 1.0 && r.distance == 0));
        // Fully tied: input order preserved.
        assert_eq!(found[0].index, 0);
        assert_eq!(found[1].index, 1);
    }

    #[test]
    fn scored_results_carry_best_distance() {
        let items = ["карабль"];
        let found = fuzzy_search_scored(&items, "корабль", |s| (*s).into(), &MatchOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].distance, 1);
        assert!((found[0].score - 0.65).abs() < 1e-9);
    }

    #[test]
    fn empty_query_scored_passthrough() {
        let items = ["x", "y"];
        let found = fuzzy_search_scored(&items, "", |s| (*s).into(), &MatchOptions::default());
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.score == 1.0 && r.distance == 0));
        assert_eq!(found[1].index, 1);
    }
}
