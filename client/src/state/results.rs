//! Display strings for a successful prediction.

use wire::Prediction;

use crate::util::format::{format_currency, format_number};

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

/// Everything the results panel prints, already formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub salary_text: String,
    pub average_text: String,
    pub percentile_text: String,
    /// CSS width of the progress bar, e.g. `"62%"`.
    pub progress_width: String,
    /// `aria-valuenow` of the progress bar, clamped to `0..=100`.
    pub progress_value: f64,
    pub experience_text: String,
    pub age_text: String,
    pub gender: String,
    pub job_title: String,
    pub education_level: String,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        let percentile = prediction.percentile.clamp(0.0, 100.0);
        let echo = &prediction.input_data;
        Self {
            salary_text: format_currency(prediction.predicted_salary),
            average_text: format_currency(prediction.average_salary),
            percentile_text: format_number(prediction.percentile),
            progress_width: format!("{}%", format_number(percentile)),
            progress_value: percentile,
            experience_text: format!("{} years", format_number(echo.experience_years)),
            age_text: format_number(echo.age),
            gender: echo.gender.clone(),
            job_title: echo.job_title.clone(),
            education_level: echo.education_level.clone(),
        }
    }
}
