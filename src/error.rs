use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("invalid profile format: {0}")]
    InvalidFormat(String),
    #[error("profile not found: {0}")]
    NotFound(String),
    #[error("launch failed: {0}")]
    Launch(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
