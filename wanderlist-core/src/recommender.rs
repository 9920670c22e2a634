//! Recommendation pipeline tying the lookups to the allocation engine.
//!
//! A call runs lookup, rating filter, assignment and backfill in sequence.
//! Every intermediate structure is local to the call, so a single
//! [`Recommender`] can serve concurrent requests by shared reference.

use log::warn;
use thiserror::Error;

use crate::{
    ActivityLocations, ActivityLookup, Assignment, DEFAULT_RATING_THRESHOLD,
    DEFAULT_SUGGESTION_COUNT, DestinationLookup, PlaceSimilarities, RecommendationRequest,
    assign_activities, backfill_suggestions,
};

/// Tunable parameters for a [`Recommender`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommenderSettings {
    /// Minimum rating a candidate place needs.
    pub rating_threshold: f32,
    /// Target length of the suggestion list.
    pub suggestion_count: usize,
}

impl RecommenderSettings {
    /// Threshold 0.4 and five suggestions.
    pub const DEFAULT: Self = Self {
        rating_threshold: DEFAULT_RATING_THRESHOLD,
        suggestion_count: DEFAULT_SUGGESTION_COUNT,
    };

    /// Validate the settings and return a copy.
    ///
    /// # Errors
    /// Returns [`RecommenderError::InvalidThreshold`] when the rating
    /// threshold is NaN or infinite.
    pub const fn validate(self) -> Result<Self, RecommenderError> {
        if self.rating_threshold.is_finite() {
            Ok(self)
        } else {
            Err(RecommenderError::InvalidThreshold {
                threshold: self.rating_threshold,
            })
        }
    }
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors raised when configuring a [`Recommender`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecommenderError {
    /// The rating threshold cannot be compared against ratings.
    #[error("rating threshold must be finite, found {threshold}")]
    InvalidThreshold {
        /// Rejected threshold.
        threshold: f32,
    },
}

/// Places to suggest together with the assignment that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendation {
    /// Suggested place names, at most the configured suggestion count.
    pub places: Vec<String>,
    /// Activities grouped by the place they were assigned to.
    pub assignment: Assignment,
}

/// Recommend places from activity and destination lookups.
///
/// # Examples
/// ```
/// use wanderlist_core::{
///     ActivityLookup, DestinationLookup, DestinationMatch, LocationEntry, Recommender,
///     ScoredLocation,
/// };
///
/// struct Yosemite;
///
/// fn trailhead() -> Vec<ScoredLocation> {
///     let entry = LocationEntry::from_lat_lon("Yosemite Trailhead", 37.7, -119.6, 4.5);
///     vec![ScoredLocation::new(entry, 0.8)]
/// }
///
/// impl DestinationLookup for Yosemite {
///     fn similar_places(&self, _destination: &str) -> DestinationMatch {
///         DestinationMatch::Found(trailhead())
///     }
/// }
///
/// impl ActivityLookup for Yosemite {
///     fn relevant_places(&self, _activity: &str) -> Vec<ScoredLocation> {
///         trailhead()
///     }
/// }
///
/// let recommender = Recommender::new(Yosemite, Yosemite);
/// let places = recommender.best_places(&["hiking".to_owned()], &["Yosemite".to_owned()]);
/// assert_eq!(places, ["Yosemite Trailhead"]);
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<D, A> {
    destinations: D,
    activities: A,
    settings: RecommenderSettings,
}

impl<D: DestinationLookup, A: ActivityLookup> Recommender<D, A> {
    /// Build a recommender with [`RecommenderSettings::DEFAULT`].
    pub const fn new(destinations: D, activities: A) -> Self {
        Self {
            destinations,
            activities,
            settings: RecommenderSettings::DEFAULT,
        }
    }

    /// Build a recommender with custom settings.
    ///
    /// # Errors
    /// Returns [`RecommenderError`] when the settings fail validation.
    pub fn with_settings(
        destinations: D,
        activities: A,
        settings: RecommenderSettings,
    ) -> Result<Self, RecommenderError> {
        Ok(Self {
            destinations,
            activities,
            settings: settings.validate()?,
        })
    }

    /// Settings applied to every call.
    #[must_use]
    pub const fn settings(&self) -> RecommenderSettings {
        self.settings
    }

    /// Return the suggested place names for `activities` and `destinations`.
    #[must_use]
    pub fn best_places(&self, activities: &[String], destinations: &[String]) -> Vec<String> {
        self.recommend(activities, destinations).places
    }

    /// Run the pipeline for a decoded request, using its bucket list as the
    /// destinations.
    #[must_use]
    pub fn recommend_request(&self, request: &RecommendationRequest) -> Vec<String> {
        self.best_places(&request.activities, &request.bucket_list)
    }

    /// Run the pipeline and keep the activity assignment alongside the
    /// suggestions.
    #[must_use]
    pub fn recommend(&self, activities: &[String], destinations: &[String]) -> Recommendation {
        let threshold = self.settings.rating_threshold;
        let activity_locations = self.lookup_activities(activities).filtered(threshold);
        let place_similarities = self.lookup_destinations(destinations).filtered(threshold);

        let assignment = assign_activities(activities, &activity_locations, &place_similarities);
        let places = backfill_suggestions(
            &assignment.places,
            &place_similarities,
            self.settings.suggestion_count,
        );

        Recommendation { places, assignment }
    }

    fn lookup_activities(&self, activities: &[String]) -> ActivityLocations {
        activities
            .iter()
            .map(|activity| {
                (
                    activity.as_str(),
                    self.activities.relevant_places(activity),
                )
            })
            .collect()
    }

    fn lookup_destinations(&self, destinations: &[String]) -> PlaceSimilarities {
        destinations
            .iter()
            .map(|destination| {
                let found = self.destinations.similar_places(destination);
                if !found.is_found() {
                    warn!("destination {destination:?} did not resolve to a known place");
                }
                (destination.as_str(), found.into_candidates())
            })
            .collect()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast on invalid settings")]
mod tests {
    use super::*;
    use crate::CandidateMap;
    use crate::test_support::{MemoryLookup, names, scored};
    use rstest::{fixture, rstest};

    #[fixture]
    fn lookup() -> MemoryLookup {
        let activities: CandidateMap = [
            (
                "hiking",
                vec![scored("Yosemite Trailhead", 4.5, 0.6), scored("City Park", 3.0, 0.9)],
            ),
            ("museums", vec![scored("Art Museum", 0.2, 0.9)]),
        ]
        .into_iter()
        .collect();
        let destinations: CandidateMap = [
            (
                "Yosemite",
                vec![scored("Yosemite Trailhead", 4.5, 0.9), scored("Half Dome", 4.9, 0.8)],
            ),
            ("San Francisco", vec![scored("Art Museum", 0.2, 0.7)]),
        ]
        .into_iter()
        .collect();
        MemoryLookup::new(activities, destinations)
    }

    #[rstest]
    fn recommends_assigned_and_backfilled_places(lookup: MemoryLookup) {
        let recommender = Recommender::new(&lookup, &lookup);

        let recommendation = recommender.recommend(
            &names(&["hiking", "museums"]),
            &names(&["Yosemite", "San Francisco"]),
        );

        assert_eq!(recommendation.places, ["Yosemite Trailhead"]);
        assert_eq!(recommendation.assignment.activities_covered, 1);
        assert_eq!(
            recommendation.assignment.places.get("Yosemite Trailhead"),
            Some(names(&["hiking"]).as_slice())
        );
    }

    #[rstest]
    fn unresolved_destinations_contribute_nothing(lookup: MemoryLookup) {
        let recommender = Recommender::new(&lookup, &lookup);

        let places = recommender.best_places(&[], &names(&["Atlantis"]));

        assert!(places.is_empty());
    }

    #[rstest]
    fn lower_threshold_admits_low_rated_places(lookup: MemoryLookup) {
        let settings = RecommenderSettings {
            rating_threshold: 0.1,
            suggestion_count: 5,
        };
        let recommender =
            Recommender::with_settings(&lookup, &lookup, settings).expect("valid settings");
        assert_eq!(recommender.settings(), settings);

        let places = recommender.best_places(
            &names(&["museums"]),
            &names(&["Yosemite", "San Francisco"]),
        );

        assert_eq!(places, ["Yosemite Trailhead", "Art Museum"]);
    }

    #[rstest]
    fn unbounded_suggestion_count_returns_available_places(lookup: MemoryLookup) {
        let settings = RecommenderSettings {
            suggestion_count: usize::MAX,
            ..RecommenderSettings::DEFAULT
        };
        let recommender =
            Recommender::with_settings(&lookup, &lookup, settings).expect("valid settings");

        let places = recommender.best_places(&[], &names(&["Yosemite", "San Francisco"]));

        assert_eq!(places, ["Yosemite Trailhead"]);
    }

    #[rstest]
    fn request_uses_bucket_list_as_destinations(lookup: MemoryLookup) {
        let recommender = Recommender::new(&lookup, &lookup);
        let request = RecommendationRequest {
            activities: Vec::new(),
            bucket_list: names(&["Yosemite"]),
        };

        assert_eq!(recommender.recommend_request(&request), ["Yosemite Trailhead"]);
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    fn rejects_non_finite_threshold(lookup: MemoryLookup, #[case] threshold: f32) {
        let settings = RecommenderSettings {
            rating_threshold: threshold,
            suggestion_count: 5,
        };
        let err = Recommender::with_settings(&lookup, &lookup, settings)
            .expect_err("non-finite threshold");
        assert!(matches!(err, RecommenderError::InvalidThreshold { .. }));
    }
}
