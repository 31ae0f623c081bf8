//! Page-wide UI state for the prediction form.
//!
//! DESIGN
//! ======
//! One object holds every piece of state the page renders: theme, loading
//! flag, results panel, chart, notification, and job title suggestions. The
//! submission controller and theme toggle mutate it through `&mut`, and
//! components read it from a single `RwSignal<UiState>` context instead of
//! looking elements up in the document.

use wire::Prediction;

use super::chart::ChartSlot;
use super::notice::NoticeSlot;
use super::results::ResultView;
use crate::util::storage::KeyValueStore;
use crate::util::theme::{self, Theme};

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// A request is in flight: submit disabled, spinner shown.
    pub submitting: bool,
    /// Rendered results; `None` keeps the panel hidden.
    pub results: Option<ResultView>,
    pub chart: ChartSlot,
    pub notice: NoticeSlot,
    pub job_titles: Vec<String>,
    /// Bumped each time results are revealed; the page scrolls the panel
    /// into view when it changes.
    pub scroll_seq: u64,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Flip the theme, persist it, and recolor the chart if one is showing.
    pub fn toggle_theme(&mut self, store: &mut impl KeyValueStore) -> Theme {
        self.theme = theme::toggle(self.theme, store);
        self.chart.restyle(self.theme);
        self.theme
    }

    /// Render a successful prediction and reveal the panel.
    pub fn show_results(&mut self, prediction: &Prediction) {
        self.results = Some(ResultView::from_prediction(prediction));
        self.chart
            .rebuild(prediction.predicted_salary, prediction.average_salary, self.theme);
        self.scroll_seq += 1;
    }

    pub fn hide_results(&mut self) {
        self.results = None;
    }

    pub fn results_visible(&self) -> bool {
        self.results.is_some()
    }
}
