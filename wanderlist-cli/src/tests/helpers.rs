//! Test helpers for laying out request files and catalog artefacts.

use bincode::Options;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use wanderlist_catalog::{
    CatalogPaths, FeatureIndex, PlaceRecord, SimilarityMatrix, artefact_bincode_options,
};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Write a small Big Sur catalog with default names under `dir`.
pub(super) fn write_catalog(dir: &Utf8Path) -> CatalogPaths {
    let paths = CatalogPaths::in_dir(dir);
    let places: Vec<PlaceRecord> = [
        ("McWay Falls", 4.8_f32),
        ("Pfeiffer Beach", 4.6_f32),
        ("Bixby Bridge", 4.7_f32),
        ("Roadside Diner", 0.3_f32),
    ]
    .into_iter()
    .map(|(name, rating)| PlaceRecord {
        name: name.to_owned(),
        latitude: 36.16,
        longitude: -121.67,
        rating,
        address: "Highway 1, Big Sur, CA".to_owned(),
        reviews: Vec::new(),
    })
    .collect();
    write_utf8(
        &paths.places,
        &serde_json::to_vec(&places).expect("encode places"),
    );

    let matrix = SimilarityMatrix {
        rows: vec![
            vec![1.0, 0.7, 0.9, 0.6],
            vec![0.7, 1.0, 0.5, 0.4],
            vec![0.9, 0.5, 1.0, 0.8],
            vec![0.6, 0.4, 0.8, 1.0],
        ],
    };
    write_utf8(
        &paths.similarity,
        &artefact_bincode_options()
            .serialize(&matrix)
            .expect("encode matrix"),
    );

    let index = FeatureIndex {
        vocabulary: [("surfing".to_owned(), 0), ("photography".to_owned(), 1)]
            .into_iter()
            .collect(),
        idf: vec![1.0, 1.0],
        rows: vec![
            vec![(1, 1.0)],
            vec![(0, 1.0)],
            vec![(1, 1.0)],
            vec![(0, 1.0)],
        ],
    };
    write_utf8(
        &paths.features,
        &artefact_bincode_options()
            .serialize(&index)
            .expect("encode features"),
    );
    paths
}
