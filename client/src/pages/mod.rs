//! Route-level page components.

pub mod predict;
