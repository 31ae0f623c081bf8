//! `POST /predict` handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser form and the CLI both post a flat JSON object here. The body
//! is taken as a loose `serde_json::Value` rather than a typed request so
//! that missing fields, numeric strings, and wrong types each get their own
//! 400 message instead of a generic extractor rejection.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to a [`PredictError`], rendered as a status code plus
//! a `{"success": false, "error": ...}` body.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};
use wire::{InputEcho, Prediction, PredictionResponse};

use crate::model::{Features, ModelError, SalaryModel};
use crate::state::AppState;

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

/// Reference figures reported alongside each prediction.
pub const AVERAGE_SALARY: f64 = 60_000.0;
pub const MIN_SALARY: f64 = 30_000.0;
pub const MAX_SALARY: f64 = 150_000.0;

const REQUIRED_FIELDS: [&str; 5] = ["experience_years", "age", "gender", "job_title", "education_level"];

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Model or encoders not loaded. Please check MODEL_PATH and restart the server.")]
    ModelNotLoaded,
    #[error("No data provided")]
    NoData,
    #[error("Missing required fields: experience_years, age, gender, job_title, education_level")]
    MissingFields,
    #[error("Experience and Age must be numeric values")]
    NotNumeric,
    #[error("Experience years must be between 0 and 50")]
    ExperienceOutOfRange,
    #[error("Age must be between 18 and 100")]
    AgeOutOfRange,
    #[error("Invalid gender: {value}. Must be one of: {classes}")]
    InvalidGender { value: String, classes: String },
    #[error("Invalid job title: {0}. Please select a valid job title from the dropdown.")]
    InvalidJobTitle(String),
    #[error("Invalid education level: {value}. Must be one of: {classes}")]
    InvalidEducation { value: String, classes: String },
    #[error("Prediction error: {0}")]
    Model(#[from] ModelError),
}

impl PredictError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ModelNotLoaded | Self::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "prediction failed");
        } else {
            tracing::debug!(error = %self, "prediction rejected");
        }
        (status, Json(PredictionResponse::failure(self.to_string()))).into_response()
    }
}

pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResponse>, PredictError> {
    let model = state.model.as_deref().ok_or(PredictError::ModelNotLoaded)?;
    // An unreadable body is treated like an empty one.
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    let prediction = run_prediction(model, &body)?;
    tracing::info!(
        salary = prediction.predicted_salary,
        percentile = prediction.percentile,
        job_title = %prediction.input_data.job_title,
        "prediction served"
    );
    Ok(Json(PredictionResponse::from_prediction(prediction)))
}

/// Validate `body`, encode it, and run `model`.
///
/// # Errors
///
/// Returns the first validation failure in field order, or
/// [`PredictError::Model`] if the model itself fails.
pub fn run_prediction(model: &dyn SalaryModel, body: &Value) -> Result<Prediction, PredictError> {
    let fields = match body {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(PredictError::NoData),
    };
    let [experience, age, gender, job_title, education] = REQUIRED_FIELDS.map(|key| field(fields, key));
    let (Some(experience), Some(age), Some(gender), Some(job_title), Some(education)) =
        (experience, age, gender, job_title, education)
    else {
        return Err(PredictError::MissingFields);
    };

    let experience_years = as_number(experience).ok_or(PredictError::NotNumeric)?;
    let age = as_number(age).ok_or(PredictError::NotNumeric)?;
    if !wire::experience_in_range(experience_years) {
        return Err(PredictError::ExperienceOutOfRange);
    }
    if !wire::age_in_range(age) {
        return Err(PredictError::AgeOutOfRange);
    }

    let encoders = model.encoders();
    let gender = as_label(gender);
    let job_title = as_label(job_title);
    let education = as_label(education);

    let gender_code = encoders.gender.transform(&gender).ok_or_else(|| PredictError::InvalidGender {
        value: gender.clone(),
        classes: encoders.gender.classes_display(),
    })?;
    let job_title_code =
        encoders.job_title.transform(&job_title).ok_or_else(|| PredictError::InvalidJobTitle(job_title.clone()))?;
    let education_code = encoders.education.transform(&education).ok_or_else(|| PredictError::InvalidEducation {
        value: education.clone(),
        classes: encoders.education.classes_display(),
    })?;

    let salary = model.predict(&Features {
        experience_years,
        age,
        gender: gender_code,
        job_title: job_title_code,
        education: education_code,
    })?;

    Ok(Prediction {
        predicted_salary: round_to(salary, 2),
        average_salary: AVERAGE_SALARY,
        percentile: round_to(percentile(salary), 1),
        input_data: InputEcho { experience_years, age, gender, job_title, education_level: education },
    })
}

/// Position of `salary` between [`MIN_SALARY`] and [`MAX_SALARY`], as 0..=100.
#[must_use]
pub fn percentile(salary: f64) -> f64 {
    ((salary - MIN_SALARY) / (MAX_SALARY - MIN_SALARY) * 100.0).clamp(0.0, 100.0)
}

#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Present and non-null.
fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

/// Numbers pass through; strings are parsed after trimming.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Strings verbatim; anything else by its JSON text, which never matches a class.
fn as_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
