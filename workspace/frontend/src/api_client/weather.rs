//! Weather endpoints.

use common::{LatestReading, PredictedReading};

pub const LATEST_ENDPOINT: &str = "/api/weather/latest";
pub const PREDICT_ENDPOINT: &str = "/api/weather/predict";

/// Fetches the most recent station reading.
pub async fn fetch_latest() -> Result<LatestReading, String> {
    super::get(LATEST_ENDPOINT).await
}

/// Fetches the 30-minute forecast.
pub async fn fetch_prediction() -> Result<PredictedReading, String> {
    super::get(PREDICT_ENDPOINT).await
}
