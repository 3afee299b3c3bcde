/// Error types for the dashboard data layer
use thiserror::Error;

use crate::sample_id::SampleId;

/// Main error type for loading and projecting sample data
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The dataset could not be retrieved (network failure, bad status)
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    /// The dataset document is not valid JSON of the expected shape
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Requested sample is absent from `samples`
    #[error("Sample not found: {0}")]
    SampleNotFound(SampleId),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
