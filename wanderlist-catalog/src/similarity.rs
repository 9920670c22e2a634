//! Destination similarity backed by a dense place-by-place matrix.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wanderlist_core::{DestinationLookup, DestinationMatch};

use crate::{CatalogError, PlaceCatalog, top_matches};

/// Square matrix of place-to-place similarity scores.
///
/// `rows[i][j]` scores how similar place `j` is to place `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    /// One row per place, in places-table order.
    pub rows: Vec<Vec<f32>>,
}

/// [`DestinationLookup`] reading rows of a [`SimilarityMatrix`].
#[derive(Debug, Clone)]
pub struct MatrixDestinationLookup {
    places: Arc<PlaceCatalog>,
    matrix: SimilarityMatrix,
}

impl MatrixDestinationLookup {
    /// Pair a matrix with the places table it was computed from.
    ///
    /// # Errors
    /// Returns [`CatalogError::DimensionMismatch`] unless the matrix is
    /// exactly `n` by `n` for `n` places.
    pub fn new(places: Arc<PlaceCatalog>, matrix: SimilarityMatrix) -> Result<Self, CatalogError> {
        let expected = places.len();
        if matrix.rows.len() != expected {
            return Err(CatalogError::DimensionMismatch {
                artefact: "similarity rows",
                expected,
                found: matrix.rows.len(),
            });
        }
        if let Some(row) = matrix.rows.iter().find(|row| row.len() != expected) {
            return Err(CatalogError::DimensionMismatch {
                artefact: "similarity columns",
                expected,
                found: row.len(),
            });
        }
        Ok(Self { places, matrix })
    }

    /// Return the places table.
    #[must_use]
    pub fn places(&self) -> &PlaceCatalog {
        &self.places
    }
}

impl DestinationLookup for MatrixDestinationLookup {
    fn similar_places(&self, destination: &str) -> DestinationMatch {
        let Some(origin) = self.places.resolve(destination) else {
            return DestinationMatch::NotFound;
        };
        let Some(row) = self.matrix.rows.get(origin) else {
            return DestinationMatch::NotFound;
        };
        let scores = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(column, _)| column != origin);
        DestinationMatch::Found(top_matches(&self.places, scores))
    }
}
