use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use wire::{InputEcho, Prediction, PredictionResponse};

use super::*;
use crate::state::form::Gender;

/// Transport that records requests and answers with a canned outcome.
struct MockTransport {
    outcome: Result<PredictReply, TransportError>,
    calls: Cell<usize>,
    last_request: RefCell<Option<PredictionRequest>>,
}

impl MockTransport {
    fn new(outcome: Result<PredictReply, TransportError>) -> Self {
        Self { outcome, calls: Cell::new(0), last_request: RefCell::new(None) }
    }

    fn replying(status: u16, body: PredictionResponse) -> Self {
        Self::new(Ok(PredictReply { status, body }))
    }
}

impl PredictTransport for MockTransport {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictReply, TransportError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        self.outcome.clone()
    }
}

fn engineer_input() -> FormInput {
    FormInput {
        experience: "5".to_owned(),
        age: "30".to_owned(),
        gender: Gender::Male,
        job_title: "Engineer".to_owned(),
        education_level: "Bachelor's".to_owned(),
    }
}

fn engineer_success() -> PredictionResponse {
    PredictionResponse::from_prediction(Prediction {
        predicted_salary: 75_000.50,
        average_salary: 60_000.0,
        percentile: 62.0,
        input_data: InputEcho {
            experience_years: 5.0,
            age: 30.0,
            gender: "Male".to_owned(),
            job_title: "Engineer".to_owned(),
            education_level: "Bachelor's".to_owned(),
        },
    })
}

fn notice_text(ui: &UiState) -> Option<&str> {
    ui.notice.current().map(|n| n.message.as_str())
}

// =============================================================
// Validation blocks the network
// =============================================================

#[test]
fn out_of_range_experience_never_reaches_transport() {
    for experience in ["-1", "-0.01", "50.01", "51", "1000"] {
        let transport = MockTransport::replying(200, engineer_success());
        let mut ui = UiState::default();
        let input = FormInput { experience: experience.to_owned(), ..engineer_input() };

        let result = block_on(submit(&mut ui, &input, &transport));

        assert_eq!(result, Err(FormError::ExperienceOutOfRange), "{experience}");
        assert_eq!(transport.calls.get(), 0);
        assert!(!ui.submitting);
        assert!(!ui.results_visible());
        assert_eq!(notice_text(&ui), Some("Experience years must be between 0 and 50."));
    }
}

#[test]
fn out_of_range_age_never_reaches_transport() {
    for age in ["17.99", "0", "100.5", "150"] {
        let transport = MockTransport::replying(200, engineer_success());
        let mut ui = UiState::default();
        let input = FormInput { age: age.to_owned(), ..engineer_input() };

        let result = block_on(submit(&mut ui, &input, &transport));

        assert_eq!(result, Err(FormError::AgeOutOfRange), "{age}");
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(notice_text(&ui), Some("Age must be between 18 and 100."));
    }
}

#[test]
fn validation_failure_leaves_previous_results_alone() {
    let transport = MockTransport::replying(200, engineer_success());
    let mut ui = UiState::default();
    block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();
    assert!(ui.results_visible());

    let bad = FormInput { job_title: String::new(), ..engineer_input() };
    let result = block_on(submit(&mut ui, &bad, &transport));

    assert_eq!(result, Err(FormError::MissingJobTitle));
    assert_eq!(transport.calls.get(), 1);
    assert!(ui.results_visible());
    assert_eq!(notice_text(&ui), Some("Please select a job title."));
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_renders_currency_and_progress() {
    let transport = MockTransport::replying(200, engineer_success());
    let mut ui = UiState::default();

    let outcome = block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rendered);
    let view = ui.results.as_ref().unwrap();
    assert_eq!(view.salary_text, "$75,000.50");
    assert_eq!(view.progress_width, "62%");
    assert_eq!(view.percentile_text, "62");
    assert_eq!(notice_text(&ui), Some(SUCCESS_MESSAGE));
    assert_eq!(ui.notice.current().unwrap().severity, Severity::Success);
    assert!(ui.chart.current().is_some());
    assert!(!ui.submitting);
}

#[test]
fn request_carries_validated_fields() {
    let transport = MockTransport::replying(200, engineer_success());
    let mut ui = UiState::default();
    block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    let sent = transport.last_request.borrow().clone().unwrap();
    assert_eq!(
        sent,
        PredictionRequest {
            experience_years: 5.0,
            age: 30.0,
            gender: "Male".to_owned(),
            job_title: "Engineer".to_owned(),
            education_level: "Bachelor's".to_owned(),
        }
    );
}

#[test]
fn server_failure_shows_server_message_and_keeps_results_hidden() {
    let transport = MockTransport::replying(200, PredictionResponse::failure("Model unavailable"));
    let mut ui = UiState::default();

    let outcome = block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected("Model unavailable".to_owned()));
    assert_eq!(notice_text(&ui), Some("Model unavailable"));
    assert!(!ui.results_visible());
    assert!(!ui.submitting);
}

#[test]
fn non_2xx_uses_error_field() {
    let body = PredictionResponse::failure("Invalid job title: Wizard. Please select a valid job title from the dropdown.");
    let transport = MockTransport::replying(400, body);
    let mut ui = UiState::default();

    block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    assert_eq!(
        notice_text(&ui),
        Some("Invalid job title: Wizard. Please select a valid job title from the dropdown.")
    );
}

#[test]
fn missing_error_field_falls_back_to_generic_message() {
    let transport = MockTransport::replying(500, PredictionResponse::default());
    let mut ui = UiState::default();

    let outcome = block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected(FALLBACK_ERROR_MESSAGE.to_owned()));
    assert_eq!(notice_text(&ui), Some(FALLBACK_ERROR_MESSAGE));
}

#[test]
fn success_body_with_error_status_is_not_rendered() {
    let transport = MockTransport::replying(503, engineer_success());
    let mut ui = UiState::default();

    let outcome = block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected(FALLBACK_ERROR_MESSAGE.to_owned()));
    assert!(!ui.results_visible());
}

#[test]
fn transport_failure_shows_connectivity_message_and_restores_button() {
    let transport = MockTransport::new(Err(TransportError::Network("offline".to_owned())));
    let mut ui = UiState::default();

    let outcome = block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(notice_text(&ui), Some(CONNECTION_ERROR_MESSAGE));
    assert!(!ui.submitting);
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn malformed_body_counts_as_transport_failure() {
    let transport = MockTransport::new(Err(TransportError::Decode("expected value".to_owned())));
    let mut ui = UiState::default();

    let outcome = block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(notice_text(&ui), Some(CONNECTION_ERROR_MESSAGE));
}

// =============================================================
// Loading state
// =============================================================

#[test]
fn begin_enters_loading_and_clears_previous_state() {
    let transport = MockTransport::replying(200, engineer_success());
    let mut ui = UiState::default();
    block_on(submit(&mut ui, &engineer_input(), &transport)).unwrap();
    assert!(ui.results_visible());
    assert!(ui.notice.current().is_some());

    let pending = begin(&mut ui, &engineer_input()).unwrap();

    assert!(ui.submitting);
    assert!(!ui.results_visible());
    assert!(ui.notice.current().is_none());
    let _ = finish(&mut ui, pending, Err(TransportError::Unavailable));
}

#[test]
fn second_begin_while_in_flight_is_refused_silently() {
    let mut ui = UiState::default();
    let pending = begin(&mut ui, &engineer_input()).unwrap();

    let second = begin(&mut ui, &engineer_input());

    assert_eq!(second.unwrap_err(), FormError::InFlight);
    assert!(ui.notice.current().is_none());
    assert!(ui.submitting);

    let _ = finish(&mut ui, pending, Ok(PredictReply { status: 200, body: engineer_success() }));
    assert!(!ui.submitting);
    assert!(begin(&mut ui, &engineer_input()).is_ok());
}
