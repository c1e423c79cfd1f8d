use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestMode;

use crate::registration::error::SubmitError;
use crate::registration::payload::RegistrationPayload;

/// Marker returned once a request has left the browser.
///
/// It carries nothing from the remote side: with a fire-and-forget delivery
/// the endpoint's status and body are never visible to us, so an accepted and
/// a rejected registration look the same here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched;

/// Sends a registration without looking at the response.
///
/// Only transport-level failures (the request never went out) are reported.
#[async_trait(?Send)]
pub trait FireAndForgetSender {
    async fn dispatch(&self, payload: &RegistrationPayload) -> Result<Dispatched, SubmitError>;
}

/// Posts the payload as JSON with `mode: no-cors`, which is what the sheet
/// script endpoint accepts from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoCorsSender {
    url: String,
}

impl NoCorsSender {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, reason: impl ToString) -> SubmitError {
        SubmitError::Transport {
            url: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl FireAndForgetSender for NoCorsSender {
    async fn dispatch(&self, payload: &RegistrationPayload) -> Result<Dispatched, SubmitError> {
        let request = Request::post(&self.url)
            .mode(RequestMode::NoCors)
            .json(payload)
            .map_err(|e| self.transport_error(e))?;

        // The response is opaque (status 0, empty body); don't read it.
        let _ = request.send().await.map_err(|e| {
            gloo_console::log!("Registration request failed:", e.to_string());
            self.transport_error(e)
        })?;

        gloo_console::log!("Registration request dispatched to", self.url.clone());
        Ok(Dispatched)
    }
}
