//! Upstream similarity lookups consumed by the recommender.
//!
//! The engine never computes similarities itself. Implementations of these
//! traits wrap precomputed artefacts and hand back ranked candidates.

use crate::ScoredLocation;

/// Result of resolving a destination against the similarity data.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationMatch {
    /// The destination resolved; similar places in rank order.
    Found(Vec<ScoredLocation>),
    /// The destination could not be resolved to any known place.
    NotFound,
}

impl DestinationMatch {
    /// Report whether the destination resolved.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Return the similar places, treating [`DestinationMatch::NotFound`] as
    /// an empty list.
    #[must_use]
    pub fn into_candidates(self) -> Vec<ScoredLocation> {
        match self {
            Self::Found(candidates) => candidates,
            Self::NotFound => Vec::new(),
        }
    }
}

/// Find places similar to a destination.
///
/// Implementations return at most a handful of non-zero-similarity places.
/// They must be `Send` + `Sync` so a recommender can serve concurrent
/// requests from shared, read-only data.
///
/// # Examples
///
/// ```rust
/// use wanderlist_core::{DestinationLookup, DestinationMatch, LocationEntry, ScoredLocation};
///
/// struct SinglePlace;
///
/// impl DestinationLookup for SinglePlace {
///     fn similar_places(&self, destination: &str) -> DestinationMatch {
///         if destination != "Yosemite" {
///             return DestinationMatch::NotFound;
///         }
///         let entry = LocationEntry::from_lat_lon("Half Dome", 37.74, -119.53, 4.8);
///         DestinationMatch::Found(vec![ScoredLocation::new(entry, 0.9)])
///     }
/// }
///
/// assert!(SinglePlace.similar_places("Yosemite").is_found());
/// assert!(!SinglePlace.similar_places("Atlantis").is_found());
/// ```
pub trait DestinationLookup: Send + Sync {
    /// Return places similar to `destination`.
    fn similar_places(&self, destination: &str) -> DestinationMatch;
}

/// Find places relevant to a free-text activity.
///
/// An empty result means nothing relevant is known; it is not an error.
pub trait ActivityLookup: Send + Sync {
    /// Return places relevant to `activity`, most relevant first.
    fn relevant_places(&self, activity: &str) -> Vec<ScoredLocation>;
}

impl<T: DestinationLookup + ?Sized> DestinationLookup for &T {
    fn similar_places(&self, destination: &str) -> DestinationMatch {
        (**self).similar_places(destination)
    }
}

impl<T: ActivityLookup + ?Sized> ActivityLookup for &T {
    fn relevant_places(&self, activity: &str) -> Vec<ScoredLocation> {
        (**self).relevant_places(activity)
    }
}
