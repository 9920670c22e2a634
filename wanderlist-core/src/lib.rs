//! Core allocation engine for Wanderlist travel recommendations.
//!
//! Two precomputed signals feed the engine: places similar to each requested
//! destination and places relevant to each requested activity. The engine
//! drops low-rated candidates, greedily assigns every activity to the most
//! specific place covering it, then backfills a fixed-size suggestion list
//! from destinations no activity landed on.
//!
//! The similarity data itself comes from implementations of
//! [`DestinationLookup`] and [`ActivityLookup`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assign;
mod backfill;
mod candidates;
mod filter;
mod location;
mod lookup;
mod recommender;
mod request;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use assign::{Assignment, PlaceActivityMap, assign_activities};
pub use backfill::{DEFAULT_SUGGESTION_COUNT, SuggestionPool, backfill_suggestions};
pub use candidates::{ActivityLocations, CandidateMap, PlaceSimilarities};
pub use filter::{DEFAULT_RATING_THRESHOLD, filter_by_rating};
pub use location::{LocationEntry, ScoredLocation, compare_scores_descending};
pub use lookup::{ActivityLookup, DestinationLookup, DestinationMatch};
pub use recommender::{Recommendation, Recommender, RecommenderError, RecommenderSettings};
pub use request::RecommendationRequest;
