//! Weather API payload types.
//!
//! These mirror the backend's response bodies. Every reading is
//! optional; the ingest pipeline can lag on any individual sensor, and a
//! missing field renders as the `--` placeholder rather than an error.

use serde::{Deserialize, Serialize};

/// Shown in place of a reading absent from a response.
pub const MISSING_VALUE: &str = "--";

/// Body of `GET /api/weather/latest`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    /// Station timestamp, RFC 3339 when present.
    pub time: Option<String>,
}

/// Body of `GET /api/weather/predict`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictedReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

/// Formats a metric for display, substituting the placeholder for a
/// missing value.
pub fn metric_text(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let reading: LatestReading =
            serde_json::from_str("{\"temperature\": 25.4}").expect("partial body parses");
        assert_eq!(reading.temperature, Some(25.4));
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.wind_direction, None);
        assert_eq!(reading.time, None);
    }

    #[test]
    fn test_full_body_parses() {
        let json = "{\"temperature\": 25.4, \"humidity\": 80.0, \"pressure\": 1004.2, \
                    \"wind_speed\": 7.5, \"wind_direction\": 180.0, \"time\": \"2024-06-01T12:00:00Z\"}";
        let reading: LatestReading = serde_json::from_str(json).expect("full body parses");
        assert_eq!(reading.pressure, Some(1004.2));
        assert_eq!(reading.time.as_deref(), Some("2024-06-01T12:00:00Z"));
    }

    #[test]
    fn test_empty_prediction_parses() {
        let prediction: PredictedReading = serde_json::from_str("{}").expect("empty body parses");
        assert_eq!(prediction, PredictedReading::default());
    }

    #[test]
    fn test_metric_text_placeholder() {
        assert_eq!(metric_text(Some(25.4)), "25.4");
        assert_eq!(metric_text(None), "--");
    }
}
