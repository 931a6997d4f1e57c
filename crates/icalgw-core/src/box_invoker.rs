//! BoxBackendInvoker -- object-safe dynamic dispatch wrapper for
//! [`BackendInvoker`].
//!
//! 1. Define an object-safe `BackendInvokerDyn` trait with boxed futures
//! 2. Blanket-impl `BackendInvokerDyn` for all `T: BackendInvoker`
//! 3. `BoxBackendInvoker` wraps `Box<dyn BackendInvokerDyn>` and delegates
//!
//! Needed because the transport is chosen from configuration at startup,
//! and `BackendInvoker` uses RPITIT so it cannot be a trait object
//! directly.

use std::future::Future;
use std::pin::Pin;

use icalgw_types::config::Credentials;
use icalgw_types::error::InvokeError;
use icalgw_types::export::ExportRequest;

use crate::invoker::BackendInvoker;

/// Object-safe version of [`BackendInvoker`] with boxed futures.
pub trait BackendInvokerDyn: Send + Sync {
    fn name(&self) -> &str;

    fn invoke_boxed<'a>(
        &'a self,
        credentials: &'a Credentials,
        request: &'a ExportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, InvokeError>> + Send + 'a>>;
}

/// Blanket implementation: any `BackendInvoker` is a `BackendInvokerDyn`.
impl<T: BackendInvoker> BackendInvokerDyn for T {
    fn name(&self) -> &str {
        BackendInvoker::name(self)
    }

    fn invoke_boxed<'a>(
        &'a self,
        credentials: &'a Credentials,
        request: &'a ExportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, InvokeError>> + Send + 'a>> {
        Box::pin(self.invoke(credentials, request))
    }
}

/// Type-erased backend invoker for runtime transport selection.
pub struct BoxBackendInvoker {
    inner: Box<dyn BackendInvokerDyn + Send + Sync>,
}

impl BoxBackendInvoker {
    /// Wrap a concrete `BackendInvoker` in a type-erased box.
    pub fn new<T: BackendInvoker + 'static>(invoker: T) -> Self {
        Self {
            inner: Box::new(invoker),
        }
    }

    /// Short transport name for logging.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Invoke the backend export operation.
    pub async fn invoke(
        &self,
        credentials: &Credentials,
        request: &ExportRequest,
    ) -> Result<String, InvokeError> {
        self.inner.invoke_boxed(credentials, request).await
    }
}
