//! ContextInvoker -- context-propagation transport.
//!
//! Rebuilds the inbound request's headers onto the outbound call, injects
//! the `X-App-Id` identity header, and invokes the named backend operation.
//! The backend answers with an invoke envelope; the calendar text sits in
//! its `data` field.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use icalgw_core::invoker::BackendInvoker;
use icalgw_types::config::{Credentials, GatewayConfig};
use icalgw_types::error::InvokeError;
use icalgw_types::export::{ExportPayload, ExportRequest};

use super::{build_client, function_url, map_send_error, status_error};

/// Identity header naming the application on whose behalf we invoke.
pub const APP_ID_HEADER: &str = "x-app-id";

/// Invoke result envelope returned by the backend operation.
#[derive(Debug, Deserialize)]
struct InvokeEnvelope {
    data: Option<serde_json::Value>,
}

pub struct ContextInvoker {
    client: reqwest::Client,
    base_url: String,
}

impl ContextInvoker {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: build_client(config),
            base_url: config.backend_url.clone(),
        }
    }

    /// Override the base URL (used by tests).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Construct the outbound request without sending it.
    fn build_request(
        &self,
        credentials: &Credentials,
        request: &ExportRequest,
    ) -> Result<reqwest::Request, InvokeError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.forward_headers {
            let (Ok(name), Ok(value)) = (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) else {
                tracing::debug!(header = %name, "skipping unforwardable header");
                continue;
            };
            headers.insert(name, value);
        }

        // The identity header wins over anything the client sent.
        let app_id = HeaderValue::try_from(credentials.app_id.as_str()).map_err(|_| {
            InvokeError::Transport("app id is not a valid header value".to_string())
        })?;
        headers.insert(HeaderName::from_static(APP_ID_HEADER), app_id);

        self.client
            .post(function_url(&self.base_url, &credentials.app_id))
            .headers(headers)
            .json(&ExportPayload {
                token: &request.token,
            })
            .build()
            .map_err(|e| InvokeError::Transport(e.to_string()))
    }

    /// Pull the calendar text out of the invoke envelope.
    fn extract_calendar(envelope: InvokeEnvelope) -> Result<String, InvokeError> {
        match envelope.data {
            Some(serde_json::Value::String(content)) => Ok(content),
            Some(other) => Err(InvokeError::MalformedResponse(format!(
                "expected string payload in 'data', got {other}"
            ))),
            None => Err(InvokeError::MalformedResponse(
                "invoke envelope has no 'data' field".to_string(),
            )),
        }
    }
}

impl BackendInvoker for ContextInvoker {
    fn name(&self) -> &str {
        "context"
    }

    async fn invoke(
        &self,
        credentials: &Credentials,
        request: &ExportRequest,
    ) -> Result<String, InvokeError> {
        let outbound = self.build_request(credentials, request)?;

        let response = self
            .client
            .execute(outbound)
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let envelope: InvokeEnvelope = response
            .json()
            .await
            .map_err(|e| InvokeError::MalformedResponse(e.to_string()))?;

        Self::extract_calendar(envelope)
    }
}
