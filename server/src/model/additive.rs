//! Additive salary model loaded from YAML.
//!
//! Salary = intercept
//!        + experience_coefficient * years
//!        + age_coefficient * age
//!        + gender[g] + education[e] + job_title[j]
//!
//! clamped at zero. The keys of the three adjustment tables define the
//! encoder classes.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{Encoders, Features, LabelEncoder, ModelError, SalaryModel};

#[cfg(test)]
#[path = "additive_test.rs"]
mod additive_test;

/// On-disk model format.
#[derive(Debug, Deserialize)]
struct ModelFile {
    intercept: f64,
    experience_coefficient: f64,
    age_coefficient: f64,
    gender: BTreeMap<String, f64>,
    education: BTreeMap<String, f64>,
    job_title: BTreeMap<String, f64>,
}

#[derive(Debug)]
pub struct AdditiveModel {
    intercept: f64,
    experience_coefficient: f64,
    age_coefficient: f64,
    encoders: Encoders,
    /// Adjustments indexed by encoder code.
    gender: Vec<f64>,
    education: Vec<f64>,
    job_title: Vec<f64>,
}

impl AdditiveModel {
    /// Load a model from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if `path` does not exist, or any
    /// error from [`AdditiveModel::from_yaml`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Parse a model from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] for malformed YAML and
    /// [`ModelError::EmptyEncoder`] if an adjustment table is empty.
    pub fn from_yaml(raw: &str) -> Result<Self, ModelError> {
        let file: ModelFile = serde_yaml::from_str(raw)?;
        let gender = adjustment_table("gender", file.gender)?;
        let education = adjustment_table("education", file.education)?;
        let job_title = adjustment_table("job title", file.job_title)?;

        Ok(Self {
            intercept: file.intercept,
            experience_coefficient: file.experience_coefficient,
            age_coefficient: file.age_coefficient,
            encoders: Encoders { gender: gender.0, education: education.0, job_title: job_title.0 },
            gender: gender.1,
            education: education.1,
            job_title: job_title.1,
        })
    }
}

/// Split a class -> adjustment map into an encoder and a code-indexed table.
/// `BTreeMap` iteration is sorted, which matches the encoder's class order.
fn adjustment_table(
    feature: &'static str,
    table: BTreeMap<String, f64>,
) -> Result<(LabelEncoder, Vec<f64>), ModelError> {
    if table.is_empty() {
        return Err(ModelError::EmptyEncoder(feature));
    }
    let encoder = LabelEncoder::new(table.keys().cloned());
    let values = table.into_values().collect();
    Ok((encoder, values))
}

fn lookup(table: &[f64], feature: &'static str, code: usize) -> Result<f64, ModelError> {
    table.get(code).copied().ok_or(ModelError::CodeOutOfRange { feature, code })
}

impl SalaryModel for AdditiveModel {
    fn encoders(&self) -> &Encoders {
        &self.encoders
    }

    fn predict(&self, features: &Features) -> Result<f64, ModelError> {
        let salary = self.intercept
            + self.experience_coefficient * features.experience_years
            + self.age_coefficient * features.age
            + lookup(&self.gender, "gender", features.gender)?
            + lookup(&self.education, "education", features.education)?
            + lookup(&self.job_title, "job title", features.job_title)?;
        if !salary.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(salary.max(0.0))
    }
}
