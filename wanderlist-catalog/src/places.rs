//! Places table and destination name resolution.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use wanderlist_core::LocationEntry;

use crate::CatalogError;

/// One row of `places.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Aggregate review rating.
    pub rating: f32,
    /// Postal address used by the full-text fallback.
    #[serde(default)]
    pub address: String,
    /// Review snippets used by the full-text fallback.
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl PlaceRecord {
    /// Convert the record into the engine's location type.
    #[must_use]
    pub fn to_entry(&self) -> LocationEntry {
        LocationEntry::from_lat_lon(self.name.clone(), self.latitude, self.longitude, self.rating)
    }
}

/// Normalise a place name or query for matching.
///
/// Lowercases the text and collapses runs of whitespace into single spaces.
///
/// # Examples
/// ```
/// use wanderlist_catalog::clean_name;
///
/// assert_eq!(clean_name("  Golden   Gate\tPark "), "golden gate park");
/// ```
#[must_use]
pub fn clean_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Places table indexed by cleaned name.
///
/// Row `i` of every other artefact describes `places[i]`.
#[derive(Debug, Clone)]
pub struct PlaceCatalog {
    places: Vec<PlaceRecord>,
    by_name: HashMap<String, usize>,
    search_text: Vec<String>,
}

impl PlaceCatalog {
    /// Index a list of places.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicatePlace`] when two names clean to the
    /// same value, since resolution would be ambiguous.
    pub fn new(places: Vec<PlaceRecord>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(places.len());
        for (position, place) in places.iter().enumerate() {
            match by_name.entry(clean_name(&place.name)) {
                Entry::Occupied(occupied) => {
                    return Err(CatalogError::DuplicatePlace {
                        name: occupied.key().clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(position);
                }
            }
        }
        let search_text = places.iter().map(searchable_text).collect();
        Ok(Self {
            places,
            by_name,
            search_text,
        })
    }

    /// Load and index `places.json`.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the file is unreadable, malformed, or
    /// holds duplicate names.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, CatalogError> {
        let bytes =
            wanderlist_fs::read_utf8_file(path).map_err(|source| CatalogError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let places: Vec<PlaceRecord> =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::ParsePlaces {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(places)
    }

    /// Number of places.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.places.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Return the place at row `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlaceRecord> {
        self.places.get(index)
    }

    /// Resolve a destination to a row.
    ///
    /// An exact cleaned-name match wins. Otherwise the first place whose
    /// address or reviews contain the cleaned query is used.
    #[must_use]
    pub fn resolve(&self, destination: &str) -> Option<usize> {
        let query = clean_name(destination);
        if query.is_empty() {
            return None;
        }
        self.by_name.get(&query).copied().or_else(|| {
            self.search_text
                .iter()
                .position(|text| text.contains(query.as_str()))
        })
    }
}

fn searchable_text(place: &PlaceRecord) -> String {
    std::iter::once(place.address.as_str())
        .chain(place.reviews.iter().map(String::as_str))
        .map(clean_name)
        .collect::<Vec<_>>()
        .join("\n")
}
