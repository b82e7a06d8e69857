use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use shared::notify::{ACCEPT_JSON, FORM_CONTENT_TYPE};
use shared::{FormPayload, NotifyTransport, Result, SharedError};

/// Sends the notify form through the browser's fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl NotifyTransport for GlooTransport {
    async fn post_form(&self, endpoint: &str, payload: &FormPayload) -> Result<u16> {
        debug!("Posting notify form ({} fields) to {}", payload.fields().len(), endpoint);

        let response = Request::post(endpoint)
            .header("Accept", ACCEPT_JSON)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(payload.encode())
            .map_err(|e| {
                SharedError::TransportFailure(format!("Failed to build notify request: {}", e))
            })?
            .send()
            .await
            .map_err(|e| {
                SharedError::TransportFailure(format!("Failed to send notify request: {}", e))
            })?;

        debug!("Notify endpoint answered HTTP {}", response.status());
        Ok(response.status())
    }
}
