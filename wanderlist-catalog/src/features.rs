//! Activity relevance via TF-IDF vectors and cosine similarity.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wanderlist_core::{ActivityLookup, ScoredLocation};

use crate::{CatalogError, PlaceCatalog, top_matches};

/// Fitted TF-IDF vocabulary plus one sparse feature row per place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureIndex {
    /// Term to column index.
    pub vocabulary: BTreeMap<String, u32>,
    /// Inverse document frequency per column.
    pub idf: Vec<f32>,
    /// Sparse `(column, weight)` pairs per place, in places-table order.
    pub rows: Vec<Vec<(u32, f32)>>,
}

impl FeatureIndex {
    fn validate(&self, places: usize) -> Result<(), CatalogError> {
        if self.rows.len() != places {
            return Err(CatalogError::DimensionMismatch {
                artefact: "feature rows",
                expected: places,
                found: self.rows.len(),
            });
        }
        let terms = self.idf.len();
        if self.vocabulary.len() != terms {
            return Err(CatalogError::DimensionMismatch {
                artefact: "feature idf",
                expected: self.vocabulary.len(),
                found: terms,
            });
        }
        let columns = self
            .vocabulary
            .values()
            .copied()
            .chain(self.rows.iter().flatten().map(|&(column, _)| column));
        for column in columns {
            if self.idf_for(column).is_none() {
                return Err(CatalogError::VocabularyOutOfRange {
                    term: column,
                    terms,
                });
            }
        }
        Ok(())
    }

    fn idf_for(&self, column: u32) -> Option<f32> {
        usize::try_from(column)
            .ok()
            .and_then(|index| self.idf.get(index))
            .copied()
    }

    /// Build the unit-length TF-IDF vector for `text`.
    ///
    /// Terms outside the vocabulary are ignored. Returns an empty vector when
    /// no known term remains.
    #[expect(
        clippy::float_arithmetic,
        reason = "TF-IDF weighting and L2 normalisation are float maths"
    )]
    #[must_use]
    pub fn vectorize(&self, text: &str) -> BTreeMap<u32, f32> {
        let mut weights: BTreeMap<u32, f32> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *weights.entry(column).or_insert(0.0_f32) += 1.0_f32;
            }
        }
        for (column, weight) in &mut weights {
            *weight *= self.idf_for(*column).unwrap_or(0.0_f32);
        }
        let norm = weights.values().map(|weight| weight * weight).sum::<f32>().sqrt();
        if !norm.is_finite() || norm == 0.0_f32 {
            return BTreeMap::new();
        }
        weights
            .into_iter()
            .map(|(column, weight)| (column, weight / norm))
            .collect()
    }
}

/// Split text into lowercase alphanumeric tokens.
///
/// # Examples
/// ```
/// use wanderlist_catalog::tokenize;
///
/// assert_eq!(tokenize("Rock-climbing & BBQ!"), ["rock", "climbing", "bbq"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|character: char| !character.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity is a normalised dot product"
)]
fn cosine(query: &BTreeMap<u32, f32>, row: &[(u32, f32)]) -> f32 {
    let row_norm = row.iter().map(|&(_, weight)| weight * weight).sum::<f32>().sqrt();
    if !row_norm.is_finite() || row_norm == 0.0_f32 {
        return 0.0_f32;
    }
    let dot: f32 = row
        .iter()
        .filter_map(|&(column, weight)| query.get(&column).map(|query_weight| query_weight * weight))
        .sum();
    dot / row_norm
}

/// [`ActivityLookup`] ranking places by cosine similarity to the activity.
#[derive(Debug, Clone)]
pub struct FeatureActivityLookup {
    places: Arc<PlaceCatalog>,
    index: FeatureIndex,
}

impl FeatureActivityLookup {
    /// Pair a feature index with the places table it describes.
    ///
    /// # Errors
    /// Returns [`CatalogError::DimensionMismatch`] when the row or IDF counts
    /// are wrong, or [`CatalogError::VocabularyOutOfRange`] when a column
    /// points past the IDF table.
    pub fn new(places: Arc<PlaceCatalog>, index: FeatureIndex) -> Result<Self, CatalogError> {
        index.validate(places.len())?;
        Ok(Self { places, index })
    }
}

impl ActivityLookup for FeatureActivityLookup {
    fn relevant_places(&self, activity: &str) -> Vec<ScoredLocation> {
        let query = self.index.vectorize(activity);
        if query.is_empty() {
            log::debug!("activity {activity:?} shares no terms with the vocabulary");
            return Vec::new();
        }
        let scores = self
            .index
            .rows
            .iter()
            .enumerate()
            .map(|(row, features)| (row, cosine(&query, features)));
        top_matches(&self.places, scores)
    }
}
