//! Remote call to the group purchase endpoint
use std::rc::Rc;

use group_buy_core::api::interpret_response;
use group_buy_core::{ApiPayload, PayloadShape, SubmitOutcome, UiEffect, WidgetConfig, translations};
use serde_json::Value;
use thiserror::Error;

use crate::{dom, notify};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Posts baskets to the configured endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Rc<WidgetConfig>,
}

impl ApiClient {
    #[must_use]
    pub const fn new(config: Rc<WidgetConfig>) -> Self {
        Self { config }
    }

    /// Send `payload` and classify the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized or the request
    /// does not complete.
    #[allow(clippy::future_not_send)]
    pub async fn send(&self, payload: &ApiPayload) -> Result<SubmitOutcome, SubmitError> {
        let body = serde_json::to_string(payload)?;
        let endpoint = self.config.endpoint();
        log::debug!("POST {endpoint}");

        let response = dom::post_json(&endpoint, &body)
            .await
            .map_err(|err| SubmitError::Request(dom::js_error_message(&err)))?;
        let text = dom::response_text(&response)
            .await
            .map_err(|err| SubmitError::Request(dom::js_error_message(&err)))?;

        Ok(interpret_response(response.status(), &text))
    }

    /// Fire-and-forget submit: redirect on success, toast on any failure.
    pub fn submit(&self, payload: ApiPayload, lang: &str) {
        let client = self.clone();
        let lang = lang.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match client.send(&payload).await {
                Ok(outcome) => outcome,
                Err(e) => SubmitOutcome::Failed(e.to_string()),
            };
            match &outcome {
                SubmitOutcome::Redirect(url) => {
                    log::debug!("group purchase created, redirecting to {url}");
                }
                SubmitOutcome::Rejected { status, code } => {
                    log::warn!("group purchase rejected with HTTP {status}: {code:?}");
                }
                SubmitOutcome::Failed(reason) => {
                    log::error!("group purchase request failed: {reason}");
                }
            }
            apply(outcome.effect(translations(&lang), &client.config));
        });
    }
}

fn apply(effect: UiEffect) {
    match effect {
        UiEffect::Navigate(url) => {
            if let Err(e) = dom::navigate(&url) {
                log::error!("Failed to navigate to {url}: {}", dom::js_error_message(&e));
            }
        }
        UiEffect::Toast(notification) => notify::notify(notification),
    }
}

/// Handed to the host page's start/join hook. Calling [`BasketEmitter::emit`]
/// with the basket issues the remote call.
#[derive(Debug, Clone)]
pub struct BasketEmitter {
    client: ApiClient,
    shape: PayloadShape,
    lang: Rc<str>,
}

impl BasketEmitter {
    #[must_use]
    pub fn new(client: ApiClient, shape: PayloadShape, lang: Rc<str>) -> Self {
        Self {
            client,
            shape,
            lang,
        }
    }

    #[must_use]
    pub const fn shape(&self) -> &PayloadShape {
        &self.shape
    }

    #[must_use]
    pub fn payload(&self, products: Value) -> ApiPayload {
        self.shape.build(products)
    }

    pub fn emit(&self, products: Value) {
        self.client.submit(self.payload(products), &self.lang);
    }
}
