use std::path::PathBuf;
use crate::api::gdp::GdpClient;

pub const DEFAULT_HTML_PATH: &str = "gdp_chart.html";

/// Runtime settings, read from the environment (`.env` honored)
///
/// Canvas size and padding are fixed and not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `GDP_DATA_URL`
    pub data_url: String,
    /// `CHART_HTML_PATH`
    pub html_path: PathBuf,
    /// `CHART_SVG_PATH`
    pub svg_path: Option<PathBuf>,
    /// `CHART_PNG_PATH`
    pub png_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            data_url: get("GDP_DATA_URL").unwrap_or_else(|| GdpClient::DEFAULT_URL.to_string()),
            html_path: get("CHART_HTML_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_PATH)),
            svg_path: get("CHART_SVG_PATH").map(PathBuf::from),
            png_path: get("CHART_PNG_PATH").map(PathBuf::from),
        }
    }
}
