//! Consultation submission over HTTP.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`, raced against a
//! `gloo-timers` timeout. Elsewhere the transport reports itself unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into `SubmitError`. The wizard turns it into
//! a single retryable message; only a non-empty server `message` on a
//! rejected request is shown verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::config;
use super::types::{ConsultationAck, ConsultationRequest};

pub const CONSULTATION_PATH: &str = "/api/project-consultation";
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("consultation endpoint returned status {0}")]
    Status(u16),

    #[error("unreadable consultation response: {0}")]
    Decode(String),

    #[error("consultation rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    #[error("consultation request timed out after {0} ms")]
    Timeout(u32),
}

impl SubmitError {
    /// Text shown inline in the wizard. Only the server's own rejection
    /// message is surfaced; everything else gets `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Full endpoint URL for a configured base.
#[must_use]
pub fn consultation_endpoint(base_url: &str) -> String {
    format!("{}{CONSULTATION_PATH}", base_url.trim_end_matches('/'))
}

/// Map a decoded acknowledgement to success or `Rejected`.
///
/// # Errors
///
/// Returns `SubmitError::Rejected` when the endpoint did not affirm the request.
pub fn accept_ack(ack: ConsultationAck) -> Result<ConsultationAck, SubmitError> {
    if ack.success {
        Ok(ack)
    } else {
        Err(SubmitError::Rejected(ack.message))
    }
}

/// Anything that can deliver a consultation request.
pub trait ConsultationTransport {
    fn send(
        &self,
        request: &ConsultationRequest,
    ) -> impl Future<Output = Result<ConsultationAck, SubmitError>>;
}

/// Deliver `request` and require an affirmative acknowledgement.
///
/// # Errors
///
/// Returns the transport failure, or `SubmitError::Rejected` for a negative ack.
pub async fn submit<T: ConsultationTransport>(
    transport: &T,
    request: &ConsultationRequest,
) -> Result<ConsultationAck, SubmitError> {
    let result = transport.send(request).await.and_then(accept_ack);
    match &result {
        Ok(_) => log::info!("consultation request accepted (project_type={})", request.project_type),
        Err(e) => log::warn!("consultation request failed: {e}"),
    }
    result
}

/// Browser transport posting JSON to the configured endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
    timeout_ms: u32,
}

impl HttpTransport {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { endpoint: consultation_endpoint(base_url), timeout_ms: SUBMIT_TIMEOUT_MS }
    }

    /// Transport for the base URL resolved by `config::api_base_url`.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(&config::api_base_url())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

impl ConsultationTransport for HttpTransport {
    async fn send(&self, request: &ConsultationRequest) -> Result<ConsultationAck, SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            post_with_timeout(&self.endpoint, request, self.timeout_ms).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(SubmitError::Transport("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_with_timeout(
    endpoint: &str,
    request: &ConsultationRequest,
    timeout_ms: u32,
) -> Result<ConsultationAck, SubmitError> {
    use futures::future::{Either, select};

    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(web_sys::AbortController::signal);
    let send = Box::pin(post_json(endpoint, request, signal.as_ref()));
    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));

    match select(send, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            if let Some(controller) = controller {
                controller.abort();
            }
            Err(SubmitError::Timeout(timeout_ms))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(
    endpoint: &str,
    request: &ConsultationRequest,
    signal: Option<&web_sys::AbortSignal>,
) -> Result<ConsultationAck, SubmitError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .abort_signal(signal)
        .json(request)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    let status = resp.status();
    // Error statuses usually still carry `{success:false, message}`.
    match resp.json::<ConsultationAck>().await {
        Ok(ack) if resp.ok() || !ack.success => Ok(ack),
        Ok(_) => Err(SubmitError::Status(status)),
        Err(_) if !resp.ok() => Err(SubmitError::Status(status)),
        Err(e) => Err(SubmitError::Decode(e.to_string())),
    }
}
