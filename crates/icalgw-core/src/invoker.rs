//! BackendInvoker trait definition.
//!
//! The single seam between the gateway and the backend service: one trait,
//! with the transport implementation selected from configuration at
//! startup.

use icalgw_types::config::Credentials;
use icalgw_types::error::InvokeError;
use icalgw_types::export::ExportRequest;

/// Trait for backend transports that can run the export operation.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition); the
/// object-safe wrapper for runtime transport selection lives in
/// [`crate::box_invoker::BoxBackendInvoker`]. Implementations live in
/// `icalgw-infra`.
pub trait BackendInvoker: Send + Sync {
    /// Short transport name for logging (e.g., "direct", "context").
    fn name(&self) -> &str;

    /// Invoke the backend export operation and return raw calendar text.
    ///
    /// Cancellation: callers drop this future when the inbound request is
    /// aborted, which must abort the outbound call as well.
    fn invoke(
        &self,
        credentials: &Credentials,
        request: &ExportRequest,
    ) -> impl std::future::Future<Output = Result<String, InvokeError>> + Send;
}
