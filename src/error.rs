use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("username is required")]
    EmptyUsername,
    #[error("use 3-20 characters (letters, digits, _ .)")]
    Format,
    #[error("username already exists")]
    DuplicateUsername,
    #[error("select at least one preference")]
    NoPreferences,
}
