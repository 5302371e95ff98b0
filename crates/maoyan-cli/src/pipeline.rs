//! End-to-end run: config → fetch → CSV

use std::path::PathBuf;

use maoyan_core::{
    ClientConfig, Config, CsvExporter, ExportSummary, MaoyanClient, MaoyanScraper, Result,
    DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH,
};
use tracing::{error, info, warn};

/// Inputs of a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub output_path: PathBuf,
    pub client: ClientConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            client: ClientConfig::default(),
        }
    }
}

/// How a run ended, short of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Rows were appended to the output file
    Completed(ExportSummary),
    /// Config has no cinema; nothing was fetched or written
    MissingCinemaId,
    /// The fetch yielded no movies; the output file was not touched
    NoSchedule,
}

/// Run the exporter once.
///
/// # Errors
/// Config load failures and CSV write failures. Fetch failures are not
/// errors: they end the run with `RunOutcome::NoSchedule`.
pub async fn run(options: &RunOptions) -> Result<RunOutcome> {
    let config = Config::load(&options.config_path)?;

    let Ok(cinema_id) = config.cinema_id() else {
        error!(
            "{} is missing the 'cinemaId' field",
            options.config_path.display()
        );
        return Ok(RunOutcome::MissingCinemaId);
    };

    info!("Fetching schedule for cinema {}...", cinema_id);

    let client = MaoyanClient::with_config(options.client.clone())?;
    let movies = MaoyanScraper::with_client(client)
        .fetch_show_data(cinema_id)
        .await
        .into_movies();

    if movies.is_empty() {
        warn!("No schedule obtained, exiting");
        return Ok(RunOutcome::NoSchedule);
    }

    info!("Got schedules for {} movies", movies.len());

    let summary = CsvExporter::new(&options.output_path).export(cinema_id, &movies)?;

    info!("Done! Recorded {} showings", summary.rows_written);

    Ok(RunOutcome::Completed(summary))
}
