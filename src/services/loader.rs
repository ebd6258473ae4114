use tracing::{error, info};
use crate::api::gdp::{GdpClient, RawDate, RawPoint};
use crate::models::{parse_date, DataPoint, Dataset};
use crate::utils::errors::ChartError;

/// Fetch the GDP resource once and decode it into a dataset
///
/// Any failure is logged here and returned; a partial dataset is never produced.
pub async fn load(client: &GdpClient) -> Result<Dataset, ChartError> {
    info!("Fetching GDP data from {}", client.url());

    let result = match client.fetch_gdp().await {
        Ok(response) => {
            if let Some(source) = &response.source_name {
                info!("Source: {}", source);
            }
            if let (Some(from), Some(to)) = (&response.from_date, &response.to_date) {
                info!("Coverage: {} to {}", from, to);
            }
            to_dataset(&response.data)
        }
        Err(e) => Err(ChartError::Fetch(e)),
    };

    match &result {
        Ok(dataset) => info!("Loaded {} GDP readings", dataset.len()),
        Err(e) => error!("Error fetching GDP data: {}", e),
    }
    result
}

/// Convert raw `[date, value]` pairs, keeping their order
pub fn to_dataset(raw: &[RawPoint]) -> Result<Dataset, ChartError> {
    raw.iter()
        .enumerate()
        .map(|(i, (raw_date, value))| {
            let date = match raw_date {
                RawDate::Text(text) => parse_date(text),
                RawDate::Year(year) => chrono::NaiveDate::from_ymd_opt(*year, 1, 1),
            }
            .ok_or_else(|| ChartError::Decode(format!("Invalid date {:?} at index {}", raw_date, i)))?;

            if !value.is_finite() || *value < 0.0 {
                return Err(ChartError::Decode(format!("Invalid GDP value {} at index {}", value, i)));
            }

            Ok(DataPoint::new(date, *value))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Dataset::new)
}
