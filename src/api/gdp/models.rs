use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date cell of a GDP pair: usually `"1947-01-01"`, sometimes a bare year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Text(String),
    Year(i32),
}

/// One `[date, value]` pair exactly as it appears in the JSON body
pub type RawPoint = (RawDate, f64);

/// Body of the GDP dataset resource
///
/// Only `data` is required. The descriptive fields are kept when the
/// resource provides them and are used for logging only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpResponse {
    pub data: Vec<RawPoint>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Anything that goes wrong between issuing the request and holding a decoded body
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Non-success HTTP status
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Body is not the expected JSON shape
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
