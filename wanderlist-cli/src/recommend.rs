//! Recommend command implementation for the Wanderlist CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use wanderlist_catalog::{CatalogLookup, CatalogPaths};
use wanderlist_core::{
    ActivityLookup, DestinationLookup, RecommendationRequest, Recommender, RecommenderSettings,
};
use wanderlist_fs::open_utf8_file;

use crate::{
    ARG_ARTEFACTS_DIR, ARG_FEATURES, ARG_PLACES, ARG_RATING_THRESHOLD, ARG_REQUEST,
    ARG_SIMILARITY, ARG_SUGGESTIONS, CliError, ENV_REQUEST,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend places for a JSON request of activities and \
                 bucket-list destinations. Similarity data is read from \
                 prepared artefacts (places.json, similarity.bin, \
                 features.bin). Paths and tuning can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Recommend places for a traveller's request"
)]
#[ortho_config(prefix = "WANDERLIST")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing activities and a bucket list.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Directory containing the default artefact filenames.
    #[arg(long = ARG_ARTEFACTS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) artefacts_dir: Option<Utf8PathBuf>,
    /// Override the path to the places table (`places.json`).
    #[arg(long = ARG_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Override the path to the similarity matrix (`similarity.bin`).
    #[arg(long = ARG_SIMILARITY, value_name = "path")]
    #[serde(default)]
    pub(crate) similarity: Option<Utf8PathBuf>,
    /// Override the path to the activity feature index (`features.bin`).
    #[arg(long = ARG_FEATURES, value_name = "path")]
    #[serde(default)]
    pub(crate) features: Option<Utf8PathBuf>,
    /// Minimum rating a suggested place needs (default 0.4).
    #[arg(long = ARG_RATING_THRESHOLD, value_name = "rating")]
    #[serde(default)]
    pub(crate) rating_threshold: Option<f32>,
    /// Number of places to suggest (default 5).
    #[arg(long = ARG_SUGGESTIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) suggestions: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Paths to the catalog artefacts.
    pub(crate) catalog: CatalogPaths,
    /// Validated recommender settings.
    pub(crate) settings: RecommenderSettings,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_REQUEST)?;
        Self::require_existing(&self.catalog.places, ARG_PLACES)?;
        Self::require_existing(&self.catalog.similarity, ARG_SIMILARITY)?;
        Self::require_existing(&self.catalog.features, ARG_FEATURES)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match wanderlist_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let artefacts_dir = args.artefacts_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let defaults = CatalogPaths::in_dir(&artefacts_dir);
        let catalog = CatalogPaths {
            places: args.places.unwrap_or(defaults.places),
            similarity: args.similarity.unwrap_or(defaults.similarity),
            features: args.features.unwrap_or(defaults.features),
        };

        let settings = RecommenderSettings {
            rating_threshold: args
                .rating_threshold
                .unwrap_or(RecommenderSettings::DEFAULT.rating_threshold),
            suggestion_count: args
                .suggestions
                .unwrap_or(RecommenderSettings::DEFAULT.suggestion_count),
        }
        .validate()?;

        Ok(Self {
            request_path,
            catalog,
            settings,
        })
    }
}

/// Both lookups the recommender consumes, behind one object.
pub(super) trait RecommendLookups: DestinationLookup + ActivityLookup {}

impl<T: DestinationLookup + ActivityLookup> RecommendLookups for T {}

/// Builds the lookups for the current recommend invocation.
pub(super) trait RecommendLookupBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn RecommendLookups>, CliError>;
}

pub(super) struct DefaultRecommendLookupBuilder;

impl RecommendLookupBuilder for DefaultRecommendLookupBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn RecommendLookups>, CliError> {
        let catalog = CatalogLookup::open(&config.catalog)?;
        Ok(Box::new(catalog))
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRecommendLookupBuilder;
    run_recommend_with(args, &builder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommendLookupBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let places = execute_recommend(args, builder)?;
    write_places(writer, &places)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn RecommendLookupBuilder,
) -> Result<Vec<String>, CliError> {
    let config = resolve_recommend_config(args)?;
    let request = load_recommendation_request(&config.request_path)?;
    let lookups = builder.build(&config)?;
    let recommender = Recommender::with_settings(&*lookups, &*lookups, config.settings)?;
    let places = recommender.recommend_request(&request);
    log::info!(
        "suggested {} places for {} activities across {} destinations",
        places.len(),
        request.activities.len(),
        request.bucket_list.len()
    );
    Ok(places)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`RecommendationRequest`] from disk.
pub(super) fn load_recommendation_request(
    path: &Utf8Path,
) -> Result<RecommendationRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_places(writer: &mut dyn Write, places: &[String]) -> Result<(), CliError> {
    let payload = serde_json::to_string(places).map_err(CliError::SerialiseRecommendation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
