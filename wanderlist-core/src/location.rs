use std::cmp::Ordering;

use geo::Coord;

/// A place returned by an upstream similarity lookup.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The rating
/// is the aggregate review rating used by the rating filter.
///
/// # Examples
/// ```
/// use wanderlist_core::LocationEntry;
///
/// let entry = LocationEntry::from_lat_lon("Yosemite Trailhead", 37.74, -119.57, 4.5);
/// assert_eq!(entry.name(), "Yosemite Trailhead");
/// assert_eq!(entry.latitude(), 37.74);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationEntry {
    name: String,
    location: Coord<f64>,
    rating: f32,
}

impl LocationEntry {
    /// Construct an entry from a name, position and rating.
    pub fn new(name: impl Into<String>, location: Coord<f64>, rating: f32) -> Self {
        Self {
            name: name.into(),
            location,
            rating,
        }
    }

    /// Construct an entry from separate latitude and longitude values.
    pub fn from_lat_lon(name: impl Into<String>, latitude: f64, longitude: f64, rating: f32) -> Self {
        Self::new(
            name,
            Coord {
                x: longitude,
                y: latitude,
            },
            rating,
        )
    }

    /// Display name of the place.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geospatial position.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Aggregate review rating.
    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }
}

/// A [`LocationEntry`] paired with the similarity score that ranked it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredLocation {
    /// The candidate place.
    pub entry: LocationEntry,
    /// Similarity or relevance score; higher is better.
    pub score: f32,
}

impl ScoredLocation {
    /// Pair an entry with its score.
    #[must_use]
    pub const fn new(entry: LocationEntry, score: f32) -> Self {
        Self { entry, score }
    }

    /// Name of the underlying entry.
    #[must_use]
    pub fn name(&self) -> &str {
        self.entry.name()
    }
}

/// Order two scores from highest to lowest, placing NaN last.
///
/// Equal scores compare as [`Ordering::Equal`] so stable sorts keep their
/// original relative order.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use wanderlist_core::compare_scores_descending;
///
/// assert_eq!(compare_scores_descending(0.9, 0.1), Ordering::Less);
/// assert_eq!(compare_scores_descending(f32::NAN, 0.1), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_scores_descending(left: f32, right: f32) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (false, false) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}
