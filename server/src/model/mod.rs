//! Salary regression models.
//!
//! DESIGN
//! ======
//! Handlers see models only through [`SalaryModel`]: encoders to turn
//! categorical inputs into codes, and a prediction over encoded
//! [`Features`]. The shipped implementation is an additive model loaded from
//! YAML; tests substitute stubs.

pub mod additive;
pub mod encoder;

use std::path::PathBuf;

pub use additive::AdditiveModel;
pub use encoder::{Encoders, LabelEncoder};

/// Encoded feature vector, in model input order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Features {
    pub experience_years: f64,
    pub age: f64,
    pub gender: usize,
    pub job_title: usize,
    pub education: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid model file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("model has no {0} classes")]
    EmptyEncoder(&'static str),
    #[error("{feature} code {code} out of range")]
    CodeOutOfRange { feature: &'static str, code: usize },
    #[error("model produced a non-finite salary")]
    NonFinite,
}

/// Trained salary model. Enables mocking in tests.
pub trait SalaryModel: Send + Sync {
    fn encoders(&self) -> &Encoders;

    /// Predict an annual salary for encoded `features`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if a code is outside its encoder or the
    /// result is not a finite number.
    fn predict(&self, features: &Features) -> Result<f64, ModelError>;
}
