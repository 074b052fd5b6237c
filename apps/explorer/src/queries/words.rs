//! Snippet word counting.
//!
//! Tokens are the runs of ASCII word characters (letters, digits, `_`) in a
//! snippet, lower-cased. Counts are accumulated across all jobs combined.

use std::collections::HashMap;

use crate::models::job::Job;

pub type WordCounts = HashMap<String, u64>;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Non-empty lower-cased tokens of a snippet, split on non-word runs.
pub fn tokens(snippet: &str) -> impl Iterator<Item = String> + '_ {
    snippet
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

/// Counts for a single snippet.
pub fn snippet_counts(snippet: &str) -> WordCounts {
    tokens(snippet).fold(WordCounts::new(), |mut counts, word| {
        *counts.entry(word).or_insert(0) += 1;
        counts
    })
}

/// Word counts built by grouping each snippet and reducing with [`merge_counts`].
pub fn word_frequency<'a, I>(jobs: I) -> WordCounts
where
    I: IntoIterator<Item = &'a Job>,
{
    jobs.into_iter()
        .map(|job| snippet_counts(&job.snippet))
        .reduce(merge_counts)
        .unwrap_or_default()
}

/// Word counts built with an explicit running total per word.
pub fn word_frequency_imperatively(jobs: &[Job]) -> WordCounts {
    let mut counts = WordCounts::new();
    for job in jobs {
        for word in job.snippet.split(|c: char| !is_word_char(c)) {
            if word.is_empty() {
                continue;
            }
            let word = word.to_lowercase();
            let count = counts.get(&word).copied().unwrap_or(0);
            counts.insert(word, count + 1);
        }
    }
    counts
}

/// Key-wise sum of two partial count maps.
pub fn merge_counts(mut left: WordCounts, right: WordCounts) -> WordCounts {
    for (word, count) in right {
        *left.entry(word).or_insert(0) += count;
    }
    left
}

/// The `n` most frequent words, highest count first, ties broken alphabetically.
pub fn most_common(counts: &WordCounts, n: usize) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = counts
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::fixtures::make_job_with_snippet;

    fn jobs_with(snippets: &[&str]) -> Vec<Job> {
        snippets
            .iter()
            .map(|s| make_job_with_snippet("Engineer", s))
            .collect()
    }

    fn expected(pairs: &[(&str, u64)]) -> WordCounts {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_counts_across_all_snippets() {
        let jobs = jobs_with(&["Go devs. Go!", "go team"]);
        let counts = word_frequency(&jobs);
        assert_eq!(counts, expected(&[("go", 3), ("devs", 1), ("team", 1)]));
    }

    #[test]
    fn test_both_forms_agree() {
        let jobs = jobs_with(&[
            "  Leading whitespace, trailing punctuation...",
            "Rust_lang & rust-lang; RUST 2021",
            "",
            "!!!",
        ]);
        assert_eq!(word_frequency(&jobs), word_frequency_imperatively(&jobs));
    }

    #[test]
    fn test_snippet_counts() {
        let counts = snippet_counts("Go devs. Go!");
        assert_eq!(counts, expected(&[("go", 2), ("devs", 1)]));
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let jobs = jobs_with(&["snake_case v2 c++"]);
        let counts = word_frequency(&jobs);
        assert_eq!(counts, expected(&[("snake_case", 1), ("v2", 1), ("c", 1)]));
    }

    #[test]
    fn test_non_ascii_letters_split_tokens() {
        let jobs = jobs_with(&["café"]);
        assert_eq!(word_frequency(&jobs), expected(&[("caf", 1)]));
    }

    #[test]
    fn test_total_equals_token_count() {
        let jobs = jobs_with(&["a b. c", "A -- b", "...", "d"]);
        let counts = word_frequency(&jobs);
        let total: u64 = counts.values().sum();
        let token_count = jobs.iter().flat_map(|j| tokens(&j.snippet)).count() as u64;
        assert_eq!(total, token_count);
        assert_eq!(total, 6);
    }

    #[test]
    fn test_rerun_is_stable() {
        let jobs = jobs_with(&["one two two", "three three three"]);
        assert_eq!(word_frequency(&jobs), word_frequency(&jobs));
    }

    #[test]
    fn test_merging_partitions_matches_single_pass() {
        let jobs = jobs_with(&["Go devs. Go!", "go team", "Team work", "devs devs"]);
        let (left, right) = jobs.split_at(2);
        let merged = merge_counts(word_frequency(left), word_frequency(right));
        assert_eq!(merged, word_frequency(&jobs));

        let swapped = merge_counts(word_frequency(right), word_frequency(left));
        assert_eq!(swapped, merged);
    }

    #[test]
    fn test_most_common_orders_by_count_then_word() {
        let counts = expected(&[("go", 3), ("team", 1), ("devs", 1), ("rust", 2)]);
        let top = most_common(&counts, 3);
        assert_eq!(top, vec![("go", 3), ("rust", 2), ("devs", 1)]);
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        assert!(word_frequency(&[] as &[Job]).is_empty());
    }
}
