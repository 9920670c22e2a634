//! Command-line interface for Wanderlist recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_REQUEST: &str = "request";
const ARG_ARTEFACTS_DIR: &str = "artefacts-dir";
const ARG_PLACES: &str = "places";
const ARG_SIMILARITY: &str = "similarity";
const ARG_FEATURES: &str = "features";
const ARG_RATING_THRESHOLD: &str = "rating-threshold";
const ARG_SUGGESTIONS: &str = "suggestions";
const ENV_REQUEST: &str = "WANDERLIST_CMDS_RECOMMEND_REQUEST_PATH";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "WANDERLIST_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the Wanderlist CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, artefacts, or the
/// request are unusable, or when writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

/// Install a stderr log subscriber filtered by [`LOG_ENV`].
///
/// `log` records from the library crates are forwarded to the subscriber.
/// The filter defaults to `warn` when the variable is unset or invalid.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        eprintln!("wanderlist: logging unavailable: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wanderlist",
    about = "Suggest places from activities and bucket-list destinations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend places for a JSON-encoded request.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
