//! Drop low-rated candidates before assignment.

use crate::{CandidateMap, ScoredLocation};

/// Minimum rating a candidate needs to survive filtering.
pub const DEFAULT_RATING_THRESHOLD: f32 = 0.4_f32;

/// Keep candidates whose rating is at least `threshold`.
///
/// The boundary is inclusive and the input order is preserved. A NaN rating
/// never passes.
///
/// # Examples
/// ```
/// use wanderlist_core::{LocationEntry, ScoredLocation, filter_by_rating};
///
/// let candidates = vec![
///     ScoredLocation::new(LocationEntry::from_lat_lon("Cafe", 0.0, 0.0, 0.39), 0.8),
///     ScoredLocation::new(LocationEntry::from_lat_lon("Park", 0.0, 0.0, 0.4), 0.6),
/// ];
/// let kept = filter_by_rating(&candidates, 0.4);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].name(), "Park");
/// ```
#[must_use]
pub fn filter_by_rating(data: &[ScoredLocation], threshold: f32) -> Vec<ScoredLocation> {
    data.iter()
        .filter(|candidate| candidate.entry.rating() >= threshold)
        .cloned()
        .collect()
}

impl CandidateMap {
    /// Apply [`filter_by_rating`] to every value, keeping all keys.
    #[must_use]
    pub fn filtered(&self, threshold: f32) -> Self {
        self.iter()
            .map(|(key, candidates)| (key, filter_by_rating(candidates, threshold)))
            .collect()
    }
}
