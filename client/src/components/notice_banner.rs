//! Dismissible alert banner showing the current notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Starts a five second timer whenever a new notice appears. The timer clears
//! the slot only if that same notice is still showing.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notice = Memo::new(move |_| ui.with(|u| u.notice.current().cloned()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(id) = notice.with(|n| n.as_ref().map(|n| n.id)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::notice::AUTO_DISMISS).await;
            ui.update(|u| {
                u.notice.expire(id);
            });
        });
    });

    view! {
        <div id="alertContainer" class="alert-container">
            {move || {
                notice
                    .get()
                    .map(|n| {
                        let id = n.id;
                        view! {
                            <div
                                class=format!("alert {} alert-dismissible fade show", n.severity.css_class())
                                role="alert"
                            >
                                <i class=format!("bi {} me-2", n.severity.icon_class())></i>
                                {n.message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| {
                                        ui.update(|u| {
                                            u.notice.expire(id);
                                        });
                                    }
                                ></button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
