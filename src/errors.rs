//! Unified application error type.
//! All modules (db, core, remote, cli) return AppError to keep the error
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

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("{kind} #{id} not found")]
    NotFound { kind: &'static str, id: i64 },

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Remote sync errors
    // ---------------------------
    #[error("Not authenticated: a bearer token and an identity are required")]
    NotAuthenticated,

    #[error("Remote request failed with status {status}: {message}")]
    RemoteRequestFailed { status: u16, message: String },

    #[error("Remote transport error: {0}")]
    Transport(String),

    #[error("No remote rows belong to the current identity")]
    NoMatchingRemoteData,

    #[error("There are no local service records to back up")]
    EmptyLocalData,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
