//! DirectInvoker -- static API key transport.
//!
//! Issues an authenticated POST to the backend's export function URL with
//! the `api_key` header and a `{"token": ...}` JSON body. A successful
//! response body is the raw calendar text.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use secrecy::ExposeSecret;

use icalgw_core::invoker::BackendInvoker;
use icalgw_types::config::{Credentials, GatewayConfig};
use icalgw_types::error::InvokeError;
use icalgw_types::export::{ExportPayload, ExportRequest};

use super::{build_client, function_url, map_send_error, status_error};

/// Header carrying the static backend API key.
const API_KEY_HEADER: &str = "api_key";

pub struct DirectInvoker {
    client: reqwest::Client,
    base_url: String,
}

impl DirectInvoker {
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
        let Some(api_key) = credentials.api_key.as_ref() else {
            return Err(InvokeError::Transport(
                "direct transport requires an API key".to_string(),
            ));
        };

        self.client
            .post(function_url(&self.base_url, &credentials.app_id))
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&ExportPayload {
                token: &request.token,
            })
            .build()
            .map_err(|e| InvokeError::Transport(e.to_string()))
    }
}

impl BackendInvoker for DirectInvoker {
    fn name(&self) -> &str {
        "direct"
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

        response
            .text()
            .await
            .map_err(|e| InvokeError::MalformedResponse(e.to_string()))
    }
}
