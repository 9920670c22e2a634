//! Property-based tests for the allocation engine.
//!
//! # Invariants tested
//!
//! - **Filter idempotence:** filtering twice equals filtering once.
//! - **Threshold monotonicity:** a higher threshold never keeps more entries.
//! - **Bounded suggestions:** backfill never exceeds the requested size and
//!   never repeats a name.
//! - **Best match wins:** every assigned activity sits under its
//!   highest-scoring candidate that any destination lists.

use std::collections::HashSet;

use proptest::prelude::*;
use wanderlist_core::test_support::scored;
use wanderlist_core::{
    CandidateMap, ScoredLocation, assign_activities, backfill_suggestions,
    compare_scores_descending, filter_by_rating,
};

fn candidate_strategy() -> impl Strategy<Value = ScoredLocation> {
    (0_usize..8, 0.0_f32..5.0_f32, 0.0_f32..1.0_f32)
        .prop_map(|(place, rating, score)| scored(&format!("place-{place}"), rating, score))
}

fn candidates_strategy() -> impl Strategy<Value = Vec<ScoredLocation>> {
    prop::collection::vec(candidate_strategy(), 0..8)
}

fn map_strategy(prefix: &'static str) -> impl Strategy<Value = CandidateMap> {
    prop::collection::vec(candidates_strategy(), 0..6).prop_map(move |lists| {
        lists
            .into_iter()
            .enumerate()
            .map(|(index, candidates)| (format!("{prefix}-{index}"), candidates))
            .collect()
    })
}

fn names_of(candidates: &[ScoredLocation]) -> Vec<&str> {
    candidates.iter().map(ScoredLocation::name).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn filtering_is_idempotent(
        candidates in candidates_strategy(),
        threshold in 0.0_f32..5.0_f32,
    ) {
        let once = filter_by_rating(&candidates, threshold);
        let twice = filter_by_rating(&once, threshold);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn raising_threshold_never_keeps_more(
        candidates in candidates_strategy(),
        first in 0.0_f32..5.0_f32,
        second in 0.0_f32..5.0_f32,
    ) {
        let low = first.min(second);
        let high = first.max(second);
        let kept_low = filter_by_rating(&candidates, low);
        let kept_high = filter_by_rating(&candidates, high);
        prop_assert!(kept_high.len() <= kept_low.len());
        prop_assert!(kept_low.len() <= candidates.len());
    }

    #[test]
    fn filtering_preserves_relative_order(
        candidates in candidates_strategy(),
        threshold in 0.0_f32..5.0_f32,
    ) {
        let kept = filter_by_rating(&candidates, threshold);
        let mut remaining = candidates.iter();
        for entry in &kept {
            prop_assert!(remaining.any(|candidate| candidate == entry));
        }
    }

    #[test]
    fn backfill_is_bounded_and_unique(
        activity_locations in map_strategy("activity"),
        place_similarities in map_strategy("destination"),
        num_suggestions in 0_usize..8,
    ) {
        let activities: Vec<String> = activity_locations.keys().map(str::to_owned).collect();
        let assignment = assign_activities(&activities, &activity_locations, &place_similarities);

        let suggestions = backfill_suggestions(&assignment.places, &place_similarities, num_suggestions);

        prop_assert!(suggestions.len() <= num_suggestions);
        let unique: HashSet<&String> = suggestions.iter().collect();
        prop_assert_eq!(unique.len(), suggestions.len());
        let known: HashSet<&str> = place_similarities
            .iter()
            .flat_map(|(_, similar)| names_of(similar))
            .collect();
        prop_assert!(suggestions.iter().all(|name| known.contains(name.as_str())));
    }

    #[test]
    fn activities_land_on_best_matching_candidate(
        activity_locations in map_strategy("activity"),
        place_similarities in map_strategy("destination"),
    ) {
        let activities: Vec<String> = activity_locations.keys().map(str::to_owned).collect();
        let assignment = assign_activities(&activities, &activity_locations, &place_similarities);
        let similar_names: HashSet<&str> = place_similarities
            .iter()
            .flat_map(|(_, similar)| names_of(similar))
            .collect();

        let mut expected_covered = 0_usize;
        for (activity, candidates) in activity_locations.iter() {
            let mut ranked: Vec<&ScoredLocation> = candidates.iter().collect();
            ranked.sort_by(|left, right| compare_scores_descending(left.score, right.score));
            let best = ranked
                .iter()
                .map(|candidate| candidate.name())
                .find(|name| similar_names.contains(name));
            match best {
                Some(place) => {
                    expected_covered += 1;
                    let assigned = assignment.places.get(place).unwrap_or_default();
                    prop_assert!(assigned.iter().any(|name| name == activity));
                }
                None => prop_assert!(
                    assignment.places.iter().all(|(_, assigned)| !assigned.iter().any(|name| name == activity))
                ),
            }
        }
        prop_assert_eq!(assignment.activities_covered, expected_covered);
        prop_assert_eq!(assignment.places_covered, assignment.places.len());
    }
}
