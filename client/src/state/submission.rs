//! Form submission controller.
//!
//! DESIGN
//! ======
//! A submission runs in two phases around the network call. [`begin`]
//! validates and enters the loading state, handing back a
//! [`PendingSubmission`] token. [`finish`] consumes that token, so the loading
//! state is reverted exactly once per submission whatever the outcome. The
//! reactive page calls the phases separately across `spawn_local`; [`submit`]
//! composes them for callers that own the state for the whole exchange.

use wire::PredictionRequest;

use super::form::{self, FormError, FormInput};
use super::notice::Severity;
use super::ui::UiState;
use crate::net::predict::{PredictReply, PredictTransport, TransportError};

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

pub const SUCCESS_MESSAGE: &str = "Prediction successful! 🎉";
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred during prediction.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// Proof that a submission entered the loading state. Must be handed to
/// [`finish`].
#[must_use = "a pending submission leaves the form disabled until finished"]
#[derive(Debug)]
pub struct PendingSubmission {
    request: PredictionRequest,
}

impl PendingSubmission {
    pub fn request(&self) -> &PredictionRequest {
        &self.request
    }
}

/// How a completed submission was presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results rendered.
    Rendered,
    /// The server answered but refused; carries the message shown.
    Rejected(String),
    /// The exchange never completed.
    Failed,
}

/// Validate `input` and enter the loading state.
///
/// On success the submit control is disabled, the results panel is hidden,
/// and any notification is cleared. On a validation failure an error notice
/// is shown and nothing else changes.
///
/// # Errors
///
/// Returns the [`FormError`] that blocked the submission, including
/// [`FormError::InFlight`] while another submission is pending.
pub fn begin(ui: &mut UiState, input: &FormInput) -> Result<PendingSubmission, FormError> {
    if ui.submitting {
        return Err(FormError::InFlight);
    }
    let request = match form::validate(input) {
        Ok(request) => request,
        Err(err) => {
            ui.notice.show(err.to_string(), Severity::Error);
            return Err(err);
        }
    };

    ui.submitting = true;
    ui.hide_results();
    ui.notice.clear();
    Ok(PendingSubmission { request })
}

/// Leave the loading state and present the outcome of the exchange.
pub fn finish(
    ui: &mut UiState,
    pending: PendingSubmission,
    outcome: Result<PredictReply, TransportError>,
) -> SubmitOutcome {
    ui.submitting = false;
    drop(pending);

    let reply = match outcome {
        Ok(reply) => reply,
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("prediction request failed: {err}");
            let _ = err;
            ui.notice.show(CONNECTION_ERROR_MESSAGE, Severity::Error);
            return SubmitOutcome::Failed;
        }
    };

    let http_ok = reply.is_http_success();
    match reply.body.into_prediction() {
        Ok(prediction) if http_ok => {
            ui.show_results(&prediction);
            ui.notice.show(SUCCESS_MESSAGE, Severity::Success);
            SubmitOutcome::Rendered
        }
        Ok(_) => {
            ui.notice.show(FALLBACK_ERROR_MESSAGE, Severity::Error);
            SubmitOutcome::Rejected(FALLBACK_ERROR_MESSAGE.to_owned())
        }
        Err(server_error) => {
            let message = server_error
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned());
            ui.notice.show(message.clone(), Severity::Error);
            SubmitOutcome::Rejected(message)
        }
    }
}

/// Run a whole submission against `transport`.
///
/// # Errors
///
/// Returns the [`FormError`] that blocked the submission; no request is sent
/// in that case.
pub async fn submit<T: PredictTransport>(
    ui: &mut UiState,
    input: &FormInput,
    transport: &T,
) -> Result<SubmitOutcome, FormError> {
    let pending = begin(ui, input)?;
    let outcome = transport.predict(pending.request()).await;
    Ok(finish(ui, pending, outcome))
}
