//! Client-side state containers for the prediction page.
//!
//! DESIGN
//! ======
//! Plain structs with `&mut self` transitions; the page wraps `UiState` in a
//! single `RwSignal` so every transition is testable without a browser.

pub mod chart;
pub mod form;
pub mod notice;
pub mod results;
pub mod submission;
pub mod ui;
