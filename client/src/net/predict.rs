//! Transport for `POST /predict`.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`.
//! Server-side (SSR) and tests: [`HttpTransport`] reports
//! [`TransportError::Unavailable`]; tests substitute their own transport.
//!
//! ERROR HANDLING
//! ==============
//! Any HTTP status with a JSON body is a [`PredictReply`]; deciding what a
//! non-2xx or `success:false` means is the controller's job. Only failures to
//! complete the exchange or read the body become [`TransportError`].

#![allow(clippy::unused_async)]

use wire::{PredictionRequest, PredictionResponse};

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

/// Status code plus decoded body of a completed exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictReply {
    pub status: u16,
    pub body: PredictionResponse,
}

impl PredictReply {
    /// Whether the HTTP status is in the 2xx range.
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Sends one prediction request. Implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait PredictTransport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the request never completes or the
    /// body is not a prediction response.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictReply, TransportError>;
}

/// Same-origin HTTP transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl PredictTransport for HttpTransport {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(wire::PREDICT_PATH)
                .json(request)
                .map_err(|e| TransportError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| TransportError::Decode(e.to_string()))?;
            decode_reply(status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

/// Pair a status with its decoded body.
///
/// # Errors
///
/// Returns [`TransportError::Decode`] when `body` is not a prediction response.
pub fn decode_reply(status: u16, body: &str) -> Result<PredictReply, TransportError> {
    let body = wire::decode_response(body).map_err(|e| TransportError::Decode(e.to_string()))?;
    Ok(PredictReply { status, body })
}
