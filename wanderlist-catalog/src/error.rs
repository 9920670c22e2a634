//! Error types for catalog loading.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating catalog artefacts.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading an artefact from disk failed.
    #[error("failed to read {path}")]
    ReadFile {
        /// Artefact path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The places table was not valid JSON.
    #[error("failed to parse places from {path}")]
    ParsePlaces {
        /// Path to `places.json`.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A `bincode` artefact could not be decoded.
    #[error("failed to decode artefact at {path}")]
    DecodeArtefact {
        /// Artefact path.
        path: Utf8PathBuf,
        /// Source error from `bincode`.
        #[source]
        source: bincode::Error,
    },
    /// An artefact's shape disagrees with the places table.
    #[error("{artefact} expects {expected} entries but found {found}")]
    DimensionMismatch {
        /// Name of the mismatched artefact or component.
        artefact: &'static str,
        /// Entry count implied by the places table.
        expected: usize,
        /// Entry count found in the artefact.
        found: usize,
    },
    /// Two places clean to the same name.
    #[error("place name {name:?} appears more than once")]
    DuplicatePlace {
        /// Cleaned place name.
        name: String,
    },
    /// A feature row or vocabulary entry refers to an unknown term.
    #[error("term {term} is outside the vocabulary of {terms} terms")]
    VocabularyOutOfRange {
        /// Offending term index.
        term: u32,
        /// Number of known terms.
        terms: usize,
    },
}
