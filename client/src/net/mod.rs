//! Networking modules for the prediction page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `predict` carries the single form submission request; `api` fetches the
//! static job title list used for autocomplete.

pub mod api;
pub mod predict;
