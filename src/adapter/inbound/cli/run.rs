//! Handler for the single run.

use std::io::Write;

use tracing::info;

use crate::adapter::inbound::cli::command::Cli;
use crate::application::pipeline::RunSummary;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_pipeline;
use crate::infrastructure::config::settings::Config;

/// Execute one run.
///
/// The report is buffered and only written once the run succeeds, so a
/// failed bulk fetch leaves stdout (or the output file) untouched.
pub async fn execute(cli: &Cli) -> Result<RunSummary> {
    let config = load_config(cli)?;
    config.init_logging();
    info!(config = %cli.config_path().display(), "topline starting");

    let pipeline = build_pipeline(&config)?;

    let mut report = Vec::new();
    let summary = pipeline.run(&mut report).await?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &report)?;
            info!(path = %path.display(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&report)?;
            stdout.flush()?;
        }
    }

    Ok(summary)
}

/// Load the config file and apply command-line overrides.
///
/// A file named with `--config` must exist; the default one may be absent.
#[allow(clippy::result_large_err)]
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(cli.config_path())?,
    };

    if let Some(workers) = cli.workers {
        config.fan_out.workers = workers;
    }
    if let Some(order) = cli.order {
        config.fan_out.order = order;
    }
    if let Some(locale) = cli.locale {
        config.catalog.locale = locale;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }

    config.validate()?;
    Ok(config)
}
