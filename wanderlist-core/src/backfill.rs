//! Pad recommendations to a fixed size from unused similar places.
//!
//! Destinations that no activity landed on are drawn from first so the list
//! introduces new categories before repeating covered ones.

use std::collections::HashSet;

use log::debug;

use crate::{PlaceActivityMap, PlaceSimilarities, ScoredLocation};

/// Number of places returned when the caller does not ask for another size.
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

/// Ordered, duplicate-free set of suggested place names with a fixed cap.
///
/// # Examples
/// ```
/// use wanderlist_core::SuggestionPool;
///
/// let mut pool = SuggestionPool::with_limit(2);
/// assert!(pool.insert("Pier"));
/// assert!(!pool.insert("Pier"));
/// assert!(pool.insert("Museum"));
/// assert!(!pool.insert("Harbour"));
/// assert_eq!(pool.into_names(), ["Pier", "Museum"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionPool {
    names: Vec<String>,
    seen: HashSet<String>,
    limit: usize,
}

impl SuggestionPool {
    /// Create an empty pool holding at most `limit` names.
    ///
    /// Storage grows with the names actually inserted, not with `limit`.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            names: Vec::new(),
            seen: HashSet::new(),
            limit,
        }
    }

    /// Add `name` unless the pool is full or already holds it.
    ///
    /// Returns `true` when the name was added.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.is_full() || self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_owned());
        self.names.push(name.to_owned());
        true
    }

    /// Report whether `name` has been suggested.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Report whether the pool reached its cap.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.names.len() >= self.limit
    }

    /// Number of suggested names.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Report whether nothing has been suggested yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the pool and return the names in insertion order.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Fill a suggestion list of up to `num_suggestions` place names.
///
/// The first pass takes one fresh similar place from each destination that
/// received no activity. The second pass, only reached while the list is
/// short, does the same for destinations that did. Names already covered by
/// an assigned place's similar places are never suggested.
///
/// # Examples
/// ```
/// use wanderlist_core::{
///     CandidateMap, LocationEntry, PlaceActivityMap, ScoredLocation, backfill_suggestions,
/// };
///
/// let place = |name: &str| ScoredLocation::new(LocationEntry::from_lat_lon(name, 0.0, 0.0, 4.0), 0.5);
/// let similarities: CandidateMap = [
///     ("Yosemite", vec![place("Half Dome"), place("Mist Trail")]),
///     ("Big Sur", vec![place("Half Dome"), place("McWay Falls")]),
/// ]
/// .into_iter()
/// .collect();
///
/// let suggestions = backfill_suggestions(&PlaceActivityMap::default(), &similarities, 5);
/// assert_eq!(suggestions, ["Half Dome", "McWay Falls"]);
/// ```
#[must_use]
pub fn backfill_suggestions(
    place_activity_map: &PlaceActivityMap,
    cleaned_place_similarities: &PlaceSimilarities,
    num_suggestions: usize,
) -> Vec<String> {
    let covered_sublocations = covered_sublocations(place_activity_map, cleaned_place_similarities);
    let (covered, uncovered): (Vec<_>, Vec<_>) = cleaned_place_similarities
        .iter()
        .partition(|(place, _)| place_activity_map.contains_place(place));

    let mut pool = SuggestionPool::with_limit(num_suggestions);
    fill_from(&mut pool, &uncovered, &covered_sublocations);
    debug!(
        "suggested {} of {num_suggestions} places from {} uncovered destinations",
        pool.len(),
        uncovered.len()
    );
    if !pool.is_full() {
        fill_from(&mut pool, &covered, &covered_sublocations);
        debug!(
            "suggested {} of {num_suggestions} places after {} covered destinations",
            pool.len(),
            covered.len()
        );
    }
    pool.into_names()
}

/// Names of every similar place belonging to an assigned place.
fn covered_sublocations<'a>(
    place_activity_map: &PlaceActivityMap,
    cleaned_place_similarities: &'a PlaceSimilarities,
) -> HashSet<&'a str> {
    place_activity_map
        .places()
        .filter_map(|place| cleaned_place_similarities.get(place))
        .flatten()
        .map(ScoredLocation::name)
        .collect()
}

/// Take at most one unused similar place from each listed destination.
fn fill_from(
    pool: &mut SuggestionPool,
    places: &[(&str, &[ScoredLocation])],
    excluded: &HashSet<&str>,
) {
    for (_, similar) in places {
        if pool.is_full() {
            break;
        }
        let fresh = similar
            .iter()
            .map(ScoredLocation::name)
            .find(|name| !excluded.contains(name) && !pool.contains(name));
        if let Some(name) = fresh {
            pool.insert(name);
        }
    }
}
