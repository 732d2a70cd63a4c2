use std::path::PathBuf;

use kundali_chart::ChartError;
use kundali_config::ConfigError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Rule(#[from] VedicError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("cannot read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
