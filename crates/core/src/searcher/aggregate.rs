//! Flattening and ranking of tracker outcomes.

use super::{SearchOutcome, SearchResult};

/// All results from successful outcomes, in collection order.
///
/// Duplicates reported by different trackers are kept.
pub fn flatten_results(outcomes: &[SearchOutcome]) -> Vec<SearchResult> {
    outcomes
        .iter()
        .flat_map(|outcome| outcome.results().iter().cloned())
        .collect()
}

/// The result with the most seeders (unknown counts as 0).
///
/// Ties go to the earliest result in iteration order.
pub fn select_best<'a, I>(results: I) -> Option<&'a SearchResult>
where
    I: IntoIterator<Item = &'a SearchResult>,
{
    let mut best: Option<&SearchResult> = None;
    for result in results {
        match best {
            Some(current) if result.seeders_or_zero() <= current.seeders_or_zero() => {}
            _ => best = Some(result),
        }
    }
    best
}

/// Best release across all outcomes, or `None` when nothing was found.
pub fn best_release(outcomes: &[SearchOutcome]) -> Option<SearchResult> {
    select_best(outcomes.iter().flat_map(|outcome| outcome.results())).cloned()
}

/// Results sorted by seeders, descending. Equal counts keep their order.
pub fn rank_results(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    results.sort_by(|a, b| b.seeders_or_zero().cmp(&a.seeders_or_zero()));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searcher::SearchError;
    use crate::testing::fixtures::search_result;

    fn outcome(tracker: &str, results: Vec<SearchResult>) -> SearchOutcome {
        SearchOutcome {
            tracker: tracker.to_string(),
            duration_ms: 1,
            result: Ok(results),
        }
    }

    fn failed(tracker: &str) -> SearchOutcome {
        SearchOutcome {
            tracker: tracker.to_string(),
            duration_ms: 15_000,
            result: Err(SearchError::Timeout),
        }
    }

    #[test]
    fn test_no_outcomes_no_result() {
        assert!(best_release(&[]).is_none());
    }

    #[test]
    fn test_only_failures_no_result() {
        assert!(best_release(&[failed("a"), outcome("b", vec![])]).is_none());
    }

    #[test]
    fn test_highest_seeders_wins() {
        let outcomes = vec![
            outcome(
                "b",
                vec![
                    search_result("b", "Low", Some(5)),
                    search_result("b", "High", Some(400)),
                ],
            ),
            failed("a"),
            outcome("c", vec![search_result("c", "Mid", Some(40))]),
        ];

        let best = best_release(&outcomes).unwrap();
        assert_eq!(best.title, "High");
        for result in flatten_results(&outcomes) {
            assert!(best.seeders_or_zero() >= result.seeders_or_zero());
        }
    }

    #[test]
    fn test_tie_goes_to_earliest() {
        let outcomes = vec![
            outcome("b", vec![search_result("b", "First", Some(40))]),
            outcome("c", vec![search_result("c", "Second", Some(40))]),
        ];

        for _ in 0..10 {
            assert_eq!(best_release(&outcomes).unwrap().title, "First");
        }
    }

    #[test]
    fn test_unknown_seeders_rank_as_zero() {
        let results = vec![
            search_result("a", "Unknown", None),
            search_result("a", "Zero", Some(0)),
            search_result("a", "One", Some(1)),
        ];
        assert_eq!(select_best(&results).unwrap().title, "One");

        let unknown_first = vec![
            search_result("a", "Unknown", None),
            search_result("a", "Zero", Some(0)),
        ];
        assert_eq!(select_best(&unknown_first).unwrap().title, "Unknown");
    }

    #[test]
    fn test_flatten_keeps_cross_tracker_duplicates() {
        let same = search_result("x", "Same Release", Some(9));
        let outcomes = vec![
            outcome("a", vec![same.clone()]),
            failed("b"),
            outcome("c", vec![same.clone()]),
        ];
        assert_eq!(flatten_results(&outcomes).len(), 2);
    }

    #[test]
    fn test_rank_results_is_stable() {
        let ranked = rank_results(vec![
            search_result("a", "A", Some(10)),
            search_result("b", "B", None),
            search_result("c", "C", Some(30)),
            search_result("d", "D", Some(10)),
        ]);
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "D", "B"]);
    }
}
