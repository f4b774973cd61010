use std::cmp::Ordering;
use std::collections::HashMap;

/// Reduces a word tally to its `limit` most popular words
///
/// # Ordering
///
/// 1. Count, descending
/// 2. Word length in characters, descending
/// 3. Word, lexicographically ascending
///
/// The order is total, so the output is deterministic for a given tally.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use word_ripple::rank_words;
///
/// let tally: HashMap<String, u64> = [("y", 4), ("x", 3), ("zz", 3)]
///     .into_iter()
///     .map(|(w, c)| (w.to_string(), c))
///     .collect();
///
/// let ranked = rank_words(&tally, 2);
/// assert_eq!(ranked, vec![("y".to_string(), 4), ("zz".to_string(), 3)]);
/// ```
pub fn rank_words(tally: &HashMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(&String, &u64)> = tally.iter().collect();
    entries.sort_by(|a, b| compare_entries(a, b));

    entries
        .into_iter()
        .take(limit)
        .map(|(word, count)| (word.clone(), *count))
        .collect()
}

fn compare_entries(a: &(&String, &u64), b: &(&String, &u64)) -> Ordering {
    b.1.cmp(a.1)
        .then_with(|| b.0.chars().count().cmp(&a.0.chars().count()))
        .then_with(|| a.0.cmp(b.0))
}
