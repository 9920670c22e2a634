//! Artefact-backed similarity lookups for the Wanderlist engine.
//!
//! The crate reads three precomputed artefacts from a directory and serves
//! the engine's two collaborators from them:
//! - **Destination similarity** resolves a destination to a row of
//!   `places.json` and reads the matching row of `similarity.bin`.
//! - **Activity relevance** turns the activity text into a TF-IDF vector and
//!   ranks places by cosine similarity against `features.bin`.
//!
//! Nothing here retrains or recomputes a model. Once loaded, every lookup is
//! immutable and can be shared across threads.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use wanderlist_catalog::{CatalogLookup, CatalogPaths};
//! use wanderlist_core::Recommender;
//!
//! let paths = CatalogPaths::in_dir(Utf8Path::new("artefacts"));
//! let catalog = CatalogLookup::open(&paths).expect("load artefacts");
//! let recommender = Recommender::new(&catalog, &catalog);
//! let places = recommender.best_places(&["hiking".to_owned()], &["Yosemite".to_owned()]);
//! println!("{places:?}");
//! ```

#![forbid(unsafe_code)]

use std::sync::Arc;

use bincode::Options;
use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use wanderlist_core::{
    ActivityLookup, DestinationLookup, DestinationMatch, ScoredLocation, compare_scores_descending,
};

mod error;
mod features;
mod places;
mod similarity;

pub use error::CatalogError;
pub use features::{FeatureActivityLookup, FeatureIndex, tokenize};
pub use places::{PlaceCatalog, PlaceRecord, clean_name};
pub use similarity::{MatrixDestinationLookup, SimilarityMatrix};

/// Default file name of the places table.
pub const PLACES_FILE: &str = "places.json";
/// Default file name of the destination similarity matrix.
pub const SIMILARITY_FILE: &str = "similarity.bin";
/// Default file name of the activity feature index.
pub const FEATURES_FILE: &str = "features.bin";
/// Maximum number of places a single lookup returns.
pub const TOP_K: usize = 5;

/// Bincode options used for the binary artefacts.
pub(crate) fn bincode_options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
}

/// Public helper exposing the bincode configuration used for artefacts.
#[must_use]
pub fn artefact_bincode_options() -> impl bincode::Options {
    bincode_options()
}

/// Decode a `bincode` artefact from disk.
pub(crate) fn read_artefact<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CatalogError> {
    let bytes = wanderlist_fs::read_utf8_file(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    bincode_options()
        .deserialize(&bytes)
        .map_err(|source| CatalogError::DecodeArtefact {
            path: path.to_path_buf(),
            source,
        })
}

/// Rank `(row, score)` pairs into at most [`TOP_K`] scored places.
///
/// Zero and non-finite scores are dropped. Ties keep row order.
pub(crate) fn top_matches(
    places: &PlaceCatalog,
    scores: impl IntoIterator<Item = (usize, f32)>,
) -> Vec<ScoredLocation> {
    let mut ranked: Vec<(usize, f32)> = scores
        .into_iter()
        .filter(|&(_, score)| score.is_finite() && score > 0.0_f32)
        .collect();
    ranked.sort_by(|left, right| compare_scores_descending(left.1, right.1));
    ranked
        .into_iter()
        .filter_map(|(row, score)| {
            places
                .get(row)
                .map(|place| ScoredLocation::new(place.to_entry(), score))
        })
        .take(TOP_K)
        .collect()
}

/// Locations of the three catalog artefacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    /// Path to `places.json`.
    pub places: Utf8PathBuf,
    /// Path to `similarity.bin`.
    pub similarity: Utf8PathBuf,
    /// Path to `features.bin`.
    pub features: Utf8PathBuf,
}

impl CatalogPaths {
    /// Use the default artefact names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            places: dir.join(PLACES_FILE),
            similarity: dir.join(SIMILARITY_FILE),
            features: dir.join(FEATURES_FILE),
        }
    }
}

/// Both engine collaborators backed by one loaded catalog.
#[derive(Debug, Clone)]
pub struct CatalogLookup {
    destinations: MatrixDestinationLookup,
    activities: FeatureActivityLookup,
}

impl CatalogLookup {
    /// Load and validate every artefact named by `paths`.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when an artefact is missing, malformed, or
    /// disagrees with the places table.
    pub fn open(paths: &CatalogPaths) -> Result<Self, CatalogError> {
        let places = Arc::new(PlaceCatalog::from_json_file(&paths.places)?);
        let matrix: SimilarityMatrix = read_artefact(&paths.similarity)?;
        let index: FeatureIndex = read_artefact(&paths.features)?;
        let catalog = Self::from_parts(places, matrix, index)?;
        log::info!(
            "loaded catalog of {} places from {}",
            catalog.destinations.places().len(),
            paths.places
        );
        Ok(catalog)
    }

    /// Assemble a catalog from artefacts already in memory.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when either artefact disagrees with `places`.
    pub fn from_parts(
        places: Arc<PlaceCatalog>,
        matrix: SimilarityMatrix,
        index: FeatureIndex,
    ) -> Result<Self, CatalogError> {
        let destinations = MatrixDestinationLookup::new(Arc::clone(&places), matrix)?;
        let activities = FeatureActivityLookup::new(places, index)?;
        Ok(Self {
            destinations,
            activities,
        })
    }

    /// Return the places table shared by both lookups.
    #[must_use]
    pub fn places(&self) -> &PlaceCatalog {
        self.destinations.places()
    }
}

impl DestinationLookup for CatalogLookup {
    fn similar_places(&self, destination: &str) -> DestinationMatch {
        self.destinations.similar_places(destination)
    }
}

impl ActivityLookup for CatalogLookup {
    fn relevant_places(&self, activity: &str) -> Vec<ScoredLocation> {
        self.activities.relevant_places(activity)
    }
}
