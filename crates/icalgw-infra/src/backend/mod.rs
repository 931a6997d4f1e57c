//! Backend transports.
//!
//! Two functionally equivalent ways to run the export operation, selected
//! by `ICALGW_BACKEND_MODE`:
//!
//! - [`direct::DirectInvoker`]: authenticated POST carrying the static
//!   `api_key` header; the response body is the calendar text itself.
//! - [`context::ContextInvoker`]: forwards the inbound request's headers
//!   plus an injected `X-App-Id` identity header; the response is an
//!   invoke envelope whose `data` field holds the calendar text.

pub mod context;
pub mod direct;

use icalgw_core::box_invoker::BoxBackendInvoker;
use icalgw_types::config::{BackendMode, GatewayConfig};
use icalgw_types::error::InvokeError;
use icalgw_types::export::EXPORT_FUNCTION;

/// Build the invoker the configuration selects.
pub fn build_invoker(config: &GatewayConfig) -> BoxBackendInvoker {
    match config.mode {
        BackendMode::Direct => BoxBackendInvoker::new(direct::DirectInvoker::new(config)),
        BackendMode::Context => BoxBackendInvoker::new(context::ContextInvoker::new(config)),
    }
}

/// Build the export function URL for an application.
fn function_url(base_url: &str, app_id: &str) -> String {
    format!("{base_url}/api/apps/{app_id}/functions/{EXPORT_FUNCTION}")
}

/// Build the shared outbound HTTP client with the configured timeout.
///
/// Every backend call is bounded; an unresponsive backend surfaces as
/// [`InvokeError::Timeout`] instead of holding the connection open.
fn build_client(config: &GatewayConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .expect("failed to create reqwest client")
}

/// Map a reqwest send failure into the invoke taxonomy.
fn map_send_error(err: reqwest::Error) -> InvokeError {
    if err.is_timeout() {
        InvokeError::Timeout
    } else {
        InvokeError::Transport(err.to_string())
    }
}

/// Turn a non-success backend response into a pass-through failure.
async fn status_error(response: reqwest::Response) -> InvokeError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    InvokeError::Status { status, body }
}
