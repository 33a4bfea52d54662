//! @ai:module:intent Define error types for survey generation and reporting
//! @ai:module:layer domain
//! @ai:module:public_api SurveyError, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all survey operations
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("No parseable survey files in {0}")]
    NoData(PathBuf),

    #[error("Invalid sampling weights: {0}")]
    Sampling(#[from] rand::distr::weighted::Error),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
