//! Header button switching between light and dark themes.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Toggle the page theme, persisting to `localStorage`.
pub fn toggle_theme(ui: RwSignal<UiState>) {
    let mut store = BrowserStorage;
    ui.update(|u| {
        u.toggle_theme(&mut store);
    });
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            id="themeToggle"
            type="button"
            class="btn theme-toggle"
            title="Toggle theme (Ctrl+D)"
            aria-label="Toggle theme"
            on:click=move |_| toggle_theme(ui)
        >
            <i id="themeIcon" class=move || format!("bi {}", ui.with(|u| u.theme.icon_class()))></i>
        </button>
    }
}
