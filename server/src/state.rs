//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! model is loaded once at startup and never mutated, so handlers share it
//! through an `Arc` without locking. `None` means the model failed to load;
//! `/predict` then answers 500 and `/health` reports it.

use std::sync::Arc;

use crate::model::SalaryModel;

#[derive(Clone, Default)]
pub struct AppState {
    pub model: Option<Arc<dyn SalaryModel>>,
}

impl AppState {
    #[must_use]
    pub fn new(model: Option<Arc<dyn SalaryModel>>) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }
}
