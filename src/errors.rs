//! Unified application error type.
//! All modules (core, export, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Unknown person '{0}': not in the roster")]
    UnknownUser(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure reading the attendance file.
///
/// Kept separate from [`AppError`] so callers can see *why* a load fell back
/// to an empty log.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("attendance file not found: {0}")]
    Missing(String),

    #[error("attendance file unreadable: {0}")]
    Io(#[from] io::Error),

    #[error("attendance file malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
