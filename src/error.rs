use thiserror::Error;

use crate::visualization::PlotError;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("No rows left after {0}")]
    EmptyResult(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),
}

pub type Result<T> = core::result::Result<T, AnalysisError>;
