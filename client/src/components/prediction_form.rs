//! Salary prediction input form.

use leptos::prelude::*;

use crate::state::form::{EDUCATION_LEVELS, FormInput, Gender, non_negative_input};
use crate::state::ui::UiState;

/// Form fields bound to `form`. Submitting (button or Enter) runs `on_submit`.
#[component]
pub fn PredictionForm(form: RwSignal<FormInput>, on_submit: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let submitting = move || ui.with(|u| u.submitting);

    let gender_options = Gender::ALL
        .into_iter()
        .map(|gender| {
            view! {
                <label class="gender-option">
                    <input
                        type="radio"
                        name="gender"
                        value=gender.as_str()
                        prop:checked=move || form.with(|f| f.gender == gender)
                        on:change=move |_| form.update(|f| f.gender = gender)
                    />
                    <span>{gender.as_str()}</span>
                </label>
            }
        })
        .collect_view();

    let education_options = EDUCATION_LEVELS
        .into_iter()
        .map(|level| view! { <option value=level>{level}</option> })
        .collect_view();

    view! {
        <form
            id="predictionForm"
            class="prediction-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-group">
                <label for="experience">"Years of Experience"</label>
                <input
                    id="experience"
                    class="form-control"
                    type="number"
                    min="0"
                    max="50"
                    step="0.5"
                    placeholder="e.g. 5"
                    prop:value=move || form.with(|f| f.experience.clone())
                    on:input=move |ev| {
                        let value = non_negative_input(event_target_value(&ev));
                        form.update(|f| f.experience = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="age">"Age"</label>
                <input
                    id="age"
                    class="form-control"
                    type="number"
                    min="18"
                    max="100"
                    placeholder="e.g. 30"
                    prop:value=move || form.with(|f| f.age.clone())
                    on:input=move |ev| {
                        let value = non_negative_input(event_target_value(&ev));
                        form.update(|f| f.age = value);
                    }
                />
            </div>
            <fieldset class="form-group">
                <legend>"Gender"</legend>
                {gender_options}
            </fieldset>
            <div class="form-group">
                <label for="jobTitle">"Job Title"</label>
                <input
                    id="jobTitle"
                    class="form-control"
                    type="text"
                    list="jobTitlesList"
                    placeholder="Start typing a job title"
                    prop:value=move || form.with(|f| f.job_title.clone())
                    on:input=move |ev| form.update(|f| f.job_title = event_target_value(&ev))
                />
                <datalist id="jobTitlesList">
                    {move || {
                        ui.with(|u| u.job_titles.clone())
                            .into_iter()
                            .map(|title| view! { <option value=title></option> })
                            .collect_view()
                    }}
                </datalist>
            </div>
            <div class="form-group">
                <label for="education">"Education Level"</label>
                <select
                    id="education"
                    class="form-select"
                    prop:value=move || form.with(|f| f.education_level.clone())
                    on:change=move |ev| form.update(|f| f.education_level = event_target_value(&ev))
                >
                    <option value="">"Select education level"</option>
                    {education_options}
                </select>
            </div>
            <button
                type="submit"
                class="btn predict-btn"
                class:loading=submitting
                disabled=submitting
                title="Predict (Ctrl+Enter)"
            >
                <span class="button-text" class:d-none=submitting>
                    "Predict Salary"
                </span>
                <span
                    class="spinner-border spinner-border-sm"
                    class:d-none=move || !submitting()
                    role="status"
                    aria-hidden="true"
                ></span>
            </button>
        </form>
    }
}
