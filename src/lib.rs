//! Facade crate for the Wanderlist recommendation engine.
//!
//! This crate re-exports the core allocation engine and exposes the
//! artefact-backed lookups behind the `catalog` feature.

#![forbid(unsafe_code)]

pub use wanderlist_core::{
    ActivityLocations, ActivityLookup, Assignment, CandidateMap, DEFAULT_RATING_THRESHOLD,
    DEFAULT_SUGGESTION_COUNT, DestinationLookup, DestinationMatch, LocationEntry,
    PlaceActivityMap, PlaceSimilarities, Recommendation, RecommendationRequest, Recommender,
    RecommenderError, RecommenderSettings, ScoredLocation, SuggestionPool, assign_activities,
    backfill_suggestions, filter_by_rating,
};

#[cfg(feature = "catalog")]
pub use wanderlist_catalog::{
    CatalogError, CatalogLookup, CatalogPaths, FeatureActivityLookup, FeatureIndex,
    MatrixDestinationLookup, PlaceCatalog, PlaceRecord, SimilarityMatrix,
};
