//! Shared request/response schema for the salary prediction endpoint.
//!
//! This crate owns the JSON representation used by `server`, `client`, and
//! `cli`. Field names match the backend's expected keys exactly, so the
//! structs serialize straight onto the wire without renames.

pub mod format;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub use format::format_currency;

/// Path of the prediction endpoint.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Path of the newline-delimited job title list.
pub const JOB_TITLES_PATH: &str = "/static/job_titles.txt";

/// Accepted years of experience, inclusive on both ends.
pub const EXPERIENCE_YEARS: RangeInclusive<f64> = 0.0..=50.0;

/// Accepted age, inclusive on both ends.
pub const AGE: RangeInclusive<f64> = 18.0..=100.0;

/// Error returned by [`decode_response`].
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The body was not valid JSON for a [`PredictionResponse`].
    #[error("malformed prediction response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Body of `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub experience_years: f64,
    pub age: f64,
    pub gender: String,
    pub job_title: String,
    pub education_level: String,
}

/// The request fields as echoed back by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputEcho {
    pub experience_years: f64,
    pub age: f64,
    pub gender: String,
    pub job_title: String,
    pub education_level: String,
}

impl From<&PredictionRequest> for InputEcho {
    fn from(req: &PredictionRequest) -> Self {
        Self {
            experience_years: req.experience_years,
            age: req.age,
            gender: req.gender.clone(),
            job_title: req.job_title.clone(),
            education_level: req.education_level.clone(),
        }
    }
}

/// Body returned by `POST /predict`, for both success and failure.
///
/// Failures carry only `success: false` and `error`; every other field is
/// absent on the wire and defaults to `None` here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data: Option<InputEcho>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A complete successful prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub predicted_salary: f64,
    pub average_salary: f64,
    pub percentile: f64,
    pub input_data: InputEcho,
}

impl PredictionResponse {
    /// Build a success body from a complete prediction.
    #[must_use]
    pub fn from_prediction(prediction: Prediction) -> Self {
        Self {
            success: true,
            predicted_salary: Some(prediction.predicted_salary),
            average_salary: Some(prediction.average_salary),
            percentile: Some(prediction.percentile),
            input_data: Some(prediction.input_data),
            error: None,
        }
    }

    /// Build a failure body carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()), ..Self::default() }
    }

    /// Extract the prediction when the body reports success and is complete.
    ///
    /// # Errors
    ///
    /// Returns the server-provided error string (if any) when the body is a
    /// failure or a success missing one of its fields.
    pub fn into_prediction(self) -> Result<Prediction, Option<String>> {
        if !self.success {
            return Err(self.error);
        }
        match (self.predicted_salary, self.average_salary, self.percentile, self.input_data) {
            (Some(predicted_salary), Some(average_salary), Some(percentile), Some(input_data)) => {
                Ok(Prediction { predicted_salary, average_salary, percentile, input_data })
            }
            _ => Err(self.error),
        }
    }
}

/// Body returned by `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// Decode a `/predict` response body.
///
/// # Errors
///
/// Returns [`WireError::Malformed`] if `body` is not a JSON object matching
/// [`PredictionResponse`].
pub fn decode_response(body: &str) -> Result<PredictionResponse, WireError> {
    Ok(serde_json::from_str(body)?)
}

/// Whether `years` lies within [`EXPERIENCE_YEARS`].
#[must_use]
pub fn experience_in_range(years: f64) -> bool {
    EXPERIENCE_YEARS.contains(&years)
}

/// Whether `age` lies within [`AGE`].
#[must_use]
pub fn age_in_range(age: f64) -> bool {
    AGE.contains(&age)
}

/// Split a newline-delimited job title list into trimmed, non-empty entries.
#[must_use]
pub fn parse_job_titles(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
