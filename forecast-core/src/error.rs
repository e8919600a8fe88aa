use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::API_KEY_VAR;

/// Errors surfaced by the forecast pipeline.
///
/// Every variant is terminal: nothing retries or recovers, the CLI reports
/// the first error once and exits non-zero. Core functions only ever return
/// these as values; printing and process exit stay in the binary.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Invalid date '{input}': expected format YYYY-MM-DD")]
    DateFormat { input: String },

    #[error("Start date {start} is after end date {end}")]
    DateOrder { start: NaiveDate, end: NaiveDate },

    #[error(
        "No API key configured.\nHint: set the {} environment variable to your Visual Crossing API key.",
        API_KEY_VAR
    )]
    MissingCredential,

    #[error("Visual Crossing request failed with status {status}: {body}")]
    Provider { status: StatusCode, body: String },

    #[error("Request to Visual Crossing failed")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse Visual Crossing response JSON")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
