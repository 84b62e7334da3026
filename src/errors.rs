//! Unified application error type.
//! All modules (dataset, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Standard input was closed before a valid answer was given")]
    InputClosed,

    // ---------------------------
    // Dataset-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp '{value}' at row {row}")]
    InvalidTimestamp { row: usize, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,
}

pub type AppResult<T> = Result<T, AppError>;
