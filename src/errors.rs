//! Unified application error type.
//! All modules (db, core, store, cli) return AppError to keep the error
//! handling consistent. Fetch-level conditions live in `fetcher::FetchError`
//! so the scraper can recover from them locally.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// The first row of a period carried no usable date, so nothing can be
    /// carried forward.
    #[error("Cannot resolve date for period {period}: row {row} has no date and no earlier row does")]
    DateResolution { period: String, row: usize },

    // ---------------------------
    // Collaborators
    // ---------------------------
    #[error("Page source unavailable: {0}")]
    CollaboratorUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
