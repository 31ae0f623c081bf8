//! Salary prediction page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the form signal and wires the submission controller, keyboard
//! shortcuts, and the one-time job title fetch to the shared `UiState`.

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::components::prediction_form::PredictionForm;
use crate::components::results_panel::ResultsPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::form::FormInput;
use crate::state::submission;
use crate::state::ui::UiState;

#[component]
pub fn PredictPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(FormInput::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_job_titles().await {
            Ok(titles) => {
                log::info!("Loaded {} job titles", titles.len());
                ui.update(|u| u.job_titles = titles);
            }
            Err(e) => log::error!("Error loading job titles: {e}"),
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::shortcuts::{Shortcut, match_shortcut};

        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            match match_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
                Some(Shortcut::Submit) => {
                    ev.prevent_default();
                    submit_form(ui, form);
                }
                Some(Shortcut::ToggleTheme) => {
                    ev.prevent_default();
                    crate::components::theme_toggle::toggle_theme(ui);
                }
                None => {}
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <main class="container predict-page">
            <header class="page-header">
                <div>
                    <h1 class="page-header__title">"Salary Predictor"</h1>
                    <p class="page-header__subtitle">
                        "Estimate your salary from experience, age, role, and education."
                    </p>
                </div>
                <ThemeToggle/>
            </header>
            <NoticeBanner/>
            <PredictionForm form=form on_submit=Callback::new(move |()| submit_form(ui, form))/>
            <ResultsPanel/>
        </main>
    }
}

/// Validate the form and, if it passes, send one prediction request.
///
/// Validation and the loading state are applied synchronously; the request
/// completes on a local task which then finishes the submission.
fn submit_form(ui: RwSignal<UiState>, form: RwSignal<FormInput>) {
    let input = form.get_untracked();
    let mut pending = None;
    ui.update(|u| pending = submission::begin(u, &input).ok());
    let Some(pending) = pending else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::predict::{HttpTransport, PredictTransport};

        let outcome = HttpTransport.predict(pending.request()).await;
        ui.update(|u| {
            submission::finish(u, pending, outcome);
        });
    });

    #[cfg(not(feature = "hydrate"))]
    ui.update(|u| {
        submission::finish(u, pending, Err(crate::net::predict::TransportError::Unavailable));
    });
}
