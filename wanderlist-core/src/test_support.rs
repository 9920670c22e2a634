//! In-memory lookups and fixture builders used by unit and behaviour tests.
//!
//! Available to other crates through the `test-support` feature.

use crate::{
    ActivityLookup, CandidateMap, DestinationLookup, DestinationMatch, LocationEntry,
    ScoredLocation,
};

/// Lookup serving fixed candidate maps for both activities and destinations.
///
/// Destinations missing from the map resolve to
/// [`DestinationMatch::NotFound`]; unknown activities yield no candidates.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookup {
    activities: CandidateMap,
    destinations: CandidateMap,
}

impl MemoryLookup {
    /// Serve `activities` and `destinations` verbatim.
    #[must_use]
    pub const fn new(activities: CandidateMap, destinations: CandidateMap) -> Self {
        Self {
            activities,
            destinations,
        }
    }
}

impl DestinationLookup for MemoryLookup {
    fn similar_places(&self, destination: &str) -> DestinationMatch {
        self.destinations
            .get(destination)
            .map_or(DestinationMatch::NotFound, |similar| {
                DestinationMatch::Found(similar.to_vec())
            })
    }
}

impl ActivityLookup for MemoryLookup {
    fn relevant_places(&self, activity: &str) -> Vec<ScoredLocation> {
        self.activities
            .get(activity)
            .map(<[ScoredLocation]>::to_vec)
            .unwrap_or_default()
    }
}

/// Build a scored candidate at the origin.
#[must_use]
pub fn scored(name: &str, rating: f32, score: f32) -> ScoredLocation {
    ScoredLocation::new(LocationEntry::from_lat_lon(name, 0.0, 0.0, rating), score)
}

/// Convert string literals into owned names.
#[must_use]
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}
