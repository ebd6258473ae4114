use thiserror::Error;
use crate::api::gdp::ApiError;

/// Crate-level error
///
/// `Fetch` and `Decode` are both the one user-visible failure: the chart is
/// replaced by the error message. The others only concern writing outputs.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to fetch GDP data: {0}")]
    Fetch(#[from] ApiError),
    #[error("Failed to decode GDP data: {0}")]
    Decode(String),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// True for failures that happen before a usable dataset exists
    pub fn is_load_failure(&self) -> bool {
        matches!(self, ChartError::Fetch(_) | ChartError::Decode(_))
    }
}
