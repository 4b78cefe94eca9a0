//! Command-line interface definitions.
//!
//! One command: read the line once, print the first match of every top
//! league, exit.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::application::fanout::ResultOrder;
use crate::domain::Locale;

/// Print the first upcoming match of every top league
#[derive(Parser, Debug)]
#[command(name = "topline")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file. Without it, config.toml is read if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of concurrent league workers.
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Override result order (completion, submission).
    #[arg(long)]
    pub order: Option<ResultOrder>,

    /// Override the locale used for sport names (ru, en).
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "config.toml";

impl Cli {
    /// The config path in effect, named or default.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG))
    }
}
