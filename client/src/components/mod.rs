//! UI components for the prediction page.

pub mod notice_banner;
pub mod prediction_form;
pub mod results_panel;
pub mod salary_chart;
pub mod theme_toggle;
