//! Insertion-ordered candidate mappings.
//!
//! Both upstream lookups produce a mapping from a query (an activity or a
//! destination) to ranked places. Assignment tie-breaks depend on key order,
//! so the mapping keeps an explicit ordered key list instead of relying on
//! hash iteration order.

use std::collections::HashMap;

use crate::ScoredLocation;

/// Mapping from a query name to its ranked candidate places.
///
/// Keys iterate in first-insertion order. Re-inserting an existing key
/// replaces its candidates without moving it.
///
/// # Examples
/// ```
/// use wanderlist_core::{CandidateMap, LocationEntry, ScoredLocation};
///
/// let mut map = CandidateMap::default();
/// map.insert("Yosemite", Vec::new());
/// map.insert("Big Sur", Vec::new());
/// map.insert(
///     "Yosemite",
///     vec![ScoredLocation::new(
///         LocationEntry::from_lat_lon("Half Dome", 37.74, -119.53, 4.8),
///         0.9,
///     )],
/// );
///
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["Yosemite", "Big Sur"]);
/// assert_eq!(map.get("Yosemite").map(<[_]>::len), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateMap {
    entries: Vec<(String, Vec<ScoredLocation>)>,
    index: HashMap<String, usize>,
}

/// Ranked place candidates keyed by activity name.
pub type ActivityLocations = CandidateMap;

/// Similar places keyed by destination name.
pub type PlaceSimilarities = CandidateMap;

impl CandidateMap {
    /// Insert or replace the candidates for `name`.
    pub fn insert(&mut self, name: impl Into<String>, candidates: Vec<ScoredLocation>) {
        let key = name.into();
        if let Some(slot) = self
            .index
            .get(&key)
            .copied()
            .and_then(|position| self.entries.get_mut(position))
        {
            slot.1 = candidates;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, candidates));
    }

    /// Return the candidates stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[ScoredLocation]> {
        self.index
            .get(name)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, candidates)| candidates.as_slice())
    }

    /// Report whether `name` is a key of the mapping.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over `(key, candidates)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScoredLocation])> {
        self.entries
            .iter()
            .map(|(key, candidates)| (key.as_str(), candidates.as_slice()))
    }

    /// Number of keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the mapping has no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<ScoredLocation>)> for CandidateMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<ScoredLocation>)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, Vec<ScoredLocation>)> for CandidateMap {
    fn extend<I: IntoIterator<Item = (K, Vec<ScoredLocation>)>>(&mut self, iter: I) {
        for (name, candidates) in iter {
            self.insert(name, candidates);
        }
    }
}
