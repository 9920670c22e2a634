//! Greedy assignment of activities to the places that cover them.
//!
//! Each activity walks its candidates from highest to lowest score and is
//! assigned to the first similar place, across all destinations, whose name
//! matches a candidate. Destinations are searched in key order and each
//! destination's similar places in rank order, so the earliest destination
//! and the earliest-ranked similar place win ties.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::{ActivityLocations, PlaceSimilarities, ScoredLocation, compare_scores_descending};

/// Activities grouped under the specific place each was assigned to.
///
/// Places iterate in the order they first received an activity, and each
/// place lists its activities in assignment order. A place only appears once
/// an activity has been assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceActivityMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl PlaceActivityMap {
    fn push(&mut self, place: &str, activity: &str) {
        if let Some(activities) = self
            .index
            .get(place)
            .copied()
            .and_then(|position| self.entries.get_mut(position))
            .map(|(_, activities)| activities)
        {
            activities.push(activity.to_owned());
            return;
        }
        self.index.insert(place.to_owned(), self.entries.len());
        self.entries
            .push((place.to_owned(), vec![activity.to_owned()]));
    }

    /// Activities assigned to `place`, in assignment order.
    #[must_use]
    pub fn get(&self, place: &str) -> Option<&[String]> {
        self.index
            .get(place)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, activities)| activities.as_slice())
    }

    /// Report whether any activity was assigned to `place`.
    #[must_use]
    pub fn contains_place(&self, place: &str) -> bool {
        self.index.contains_key(place)
    }

    /// Iterate over assigned places in first-assignment order.
    pub fn places(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(place, _)| place.as_str())
    }

    /// Iterate over `(place, activities)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(place, activities)| (place.as_str(), activities.as_slice()))
    }

    /// Number of places holding at least one activity.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no activity was assigned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PlaceActivityMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (place, activities) in &self.entries {
            map.serialize_entry(place, activities)?;
        }
        map.end()
    }
}

/// Outcome of one assignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assignment {
    /// Activities grouped by the place they were assigned to.
    pub places: PlaceActivityMap,
    /// Number of distinct activities that were assigned.
    pub activities_covered: usize,
    /// Number of distinct places that received an activity.
    pub places_covered: usize,
}

#[derive(Debug, Default)]
struct Coverage {
    activities: HashSet<String>,
    places: HashSet<String>,
}

impl Coverage {
    fn record(&mut self, activity: &str, place: &str) {
        self.activities.insert(activity.to_owned());
        self.places.insert(place.to_owned());
    }
}

/// Assign each activity to the most specific place covering it.
///
/// Activities without a matching candidate stay unassigned; that is a normal
/// outcome rather than an error.
///
/// # Examples
/// ```
/// use wanderlist_core::{CandidateMap, LocationEntry, ScoredLocation, assign_activities};
///
/// let trailhead = LocationEntry::from_lat_lon("Yosemite Trailhead", 37.7, -119.6, 4.5);
/// let activities: CandidateMap =
///     [("hiking", vec![ScoredLocation::new(trailhead.clone(), 0.8)])].into_iter().collect();
/// let similarities: CandidateMap =
///     [("Yosemite", vec![ScoredLocation::new(trailhead, 0.9)])].into_iter().collect();
///
/// let assignment = assign_activities(&["hiking".to_owned()], &activities, &similarities);
/// assert_eq!(assignment.activities_covered, 1);
/// assert_eq!(
///     assignment.places.get("Yosemite Trailhead"),
///     Some(&["hiking".to_owned()][..])
/// );
/// ```
#[must_use]
pub fn assign_activities(
    activities: &[String],
    activity_locations: &ActivityLocations,
    place_similarities: &PlaceSimilarities,
) -> Assignment {
    let mut places = PlaceActivityMap::default();
    let mut coverage = Coverage::default();

    for activity in activities {
        let candidates = ranked_candidates(activity_locations.get(activity).unwrap_or_default());
        let matched = candidates
            .iter()
            .find_map(|candidate| find_specific_place(candidate.name(), place_similarities));
        match matched {
            Some(place) => {
                debug!("assigned activity {activity:?} to {:?}", place.name());
                places.push(place.name(), activity);
                coverage.record(activity, place.name());
            }
            None => debug!("activity {activity:?} matched no similar place"),
        }
    }

    Assignment {
        places,
        activities_covered: coverage.activities.len(),
        places_covered: coverage.places.len(),
    }
}

/// Sort candidates by score, highest first, keeping upstream order on ties.
fn ranked_candidates(candidates: &[ScoredLocation]) -> Vec<&ScoredLocation> {
    let mut ranked: Vec<&ScoredLocation> = candidates.iter().collect();
    ranked.sort_by(|left, right| compare_scores_descending(left.score, right.score));
    ranked
}

/// Find the first similar place, across destinations, named `candidate`.
///
/// The returned entry is the assignment target; its own identity is used
/// rather than the candidate's.
fn find_specific_place<'a>(
    candidate: &str,
    place_similarities: &'a PlaceSimilarities,
) -> Option<&'a ScoredLocation> {
    place_similarities.iter().find_map(|(_, similar)| {
        similar
            .iter()
            .find(|sub_location| sub_location.name() == candidate)
    })
}
