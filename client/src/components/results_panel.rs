//! Results panel: salary, percentile bar, input summary, and chart.

use leptos::prelude::*;

use super::salary_chart::ComparisonChart;
use crate::state::results::ResultView;
use crate::state::ui::UiState;

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let panel_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        let scroll_seq = Memo::new(move |_| ui.with(|u| u.scroll_seq));
        Effect::new(move || {
            if scroll_seq.get() == 0 {
                return;
            }
            if let Some(panel) = panel_ref.get() {
                panel.scroll_into_view();
            }
        });
    }

    let field = move |pick: fn(&ResultView) -> String| {
        move || ui.with(|u| u.results.as_ref().map(pick).unwrap_or_default())
    };
    let progress_width = field(|r| r.progress_width.clone());

    view! {
        <section
            id="resultsSection"
            class="results-section"
            class:d-none=move || !ui.with(UiState::results_visible)
            node_ref=panel_ref
        >
            <div class="results-card">
                <h2 class="results-card__title">"Predicted Annual Salary"</h2>
                <p id="predictedSalary" class="predicted-salary">
                    {field(|r| r.salary_text.clone())}
                </p>
                <p class="average-salary">
                    "Average: "
                    <span>{field(|r| r.average_text.clone())}</span>
                </p>
            </div>

            <div class="results-card">
                <h3>"Salary Percentile"</h3>
                <p class="percentile-label">
                    <span id="percentile">{field(|r| r.percentile_text.clone())}</span>
                    "th percentile"
                </p>
                <div class="progress">
                    <div
                        id="salaryProgress"
                        class="progress-bar"
                        role="progressbar"
                        style=move || format!("width: {}", progress_width())
                        aria-valuenow=field(|r| r.progress_value.to_string())
                        aria-valuemin="0"
                        aria-valuemax="100"
                    >
                        <span class="progress-text">{progress_width}</span>
                    </div>
                </div>
            </div>

            <div class="results-card">
                <h3>"Your Inputs"</h3>
                <dl class="input-summary">
                    <dt>"Experience"</dt>
                    <dd id="displayExperience">{field(|r| r.experience_text.clone())}</dd>
                    <dt>"Age"</dt>
                    <dd id="displayAge">{field(|r| r.age_text.clone())}</dd>
                    <dt>"Gender"</dt>
                    <dd id="displayGender">{field(|r| r.gender.clone())}</dd>
                    <dt>"Job Title"</dt>
                    <dd id="displayJobTitle">{field(|r| r.job_title.clone())}</dd>
                    <dt>"Education"</dt>
                    <dd id="displayEducation">{field(|r| r.education_level.clone())}</dd>
                </dl>
            </div>

            <div class="results-card chart-container">
                <ComparisonChart/>
            </div>
        </section>
    }
}
