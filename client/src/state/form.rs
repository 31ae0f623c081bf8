//! Raw form fields and synchronous validation.
//!
//! DESIGN
//! ======
//! Fields are held as the strings the inputs produced so validation owns the
//! numeric parse. A validated form becomes a [`PredictionRequest`]; nothing
//! reaches the network otherwise.

use wire::PredictionRequest;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Gender choices offered by the form's radio group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Label sent to the backend and shown next to the radio button.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Education levels offered by the form's select.
pub const EDUCATION_LEVELS: [&str; 4] = ["High School", "Bachelor's", "Master's", "PhD"];

/// Current contents of the prediction form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub experience: String,
    pub age: String,
    pub gender: Gender,
    pub job_title: String,
    pub education_level: String,
}

/// Reasons a submission is refused before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter valid numeric values for experience and age.")]
    NotNumeric,
    #[error("Experience years must be between 0 and 50.")]
    ExperienceOutOfRange,
    #[error("Age must be between 18 and 100.")]
    AgeOutOfRange,
    #[error("Please select a job title.")]
    MissingJobTitle,
    #[error("Please select an education level.")]
    MissingEducation,
    #[error("A prediction is already in progress.")]
    InFlight,
}

impl FormError {
    /// Whether the user should be told about this refusal. An in-flight
    /// submission is ignored silently; the disabled button already says so.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::InFlight)
    }
}

/// Validate `input` and build the request body.
///
/// Checks run in order: numeric parse, experience range, age range, job
/// title, education level. The first failure wins.
///
/// # Errors
///
/// Returns the first [`FormError`] encountered.
pub fn validate(input: &FormInput) -> Result<PredictionRequest, FormError> {
    let (Some(experience_years), Some(age)) = (parse_number(&input.experience), parse_number(&input.age)) else {
        return Err(FormError::NotNumeric);
    };
    if !wire::experience_in_range(experience_years) {
        return Err(FormError::ExperienceOutOfRange);
    }
    if !wire::age_in_range(age) {
        return Err(FormError::AgeOutOfRange);
    }
    let job_title = input.job_title.trim();
    if job_title.is_empty() {
        return Err(FormError::MissingJobTitle);
    }
    let education_level = input.education_level.trim();
    if education_level.is_empty() {
        return Err(FormError::MissingEducation);
    }

    Ok(PredictionRequest {
        experience_years,
        age,
        gender: input.gender.as_str().to_owned(),
        job_title: job_title.to_owned(),
        education_level: education_level.to_owned(),
    })
}

/// Replace a negative number typed into a numeric input with `"0"`.
/// Anything else, including partial input such as `"-"`, passes through.
pub fn non_negative_input(raw: String) -> String {
    match parse_number(&raw) {
        Some(value) if value < 0.0 => "0".to_owned(),
        _ => raw,
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
