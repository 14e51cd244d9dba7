use thiserror::Error;

use super::{BuildError, ConfigError, HttpError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
    #[error("Failed to create request with target configuration: {0}")]
    Build(#[from] BuildError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to summarize results: {0}")]
    Summary(String),
    #[error("Target {index} finished without reporting results.")]
    TargetIncomplete { index: usize },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn build<E>(error: E) -> Self
    where
        E: Into<BuildError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }
}
