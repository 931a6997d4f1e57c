//! ExportService -- the request pipeline behind `GET /ical/export`.
//!
//! Runs token validation, credential resolution, and the backend call.
//! HTTP concerns (status codes, headers, CORS) stay in the API layer; this
//! service only produces a [`CalendarExport`] or a typed [`ExportError`].

use std::sync::Arc;

use icalgw_types::config::GatewayConfig;
use icalgw_types::error::ExportError;
use icalgw_types::export::{CalendarExport, ExportRequest};

use crate::box_invoker::BoxBackendInvoker;

/// Stateless per-process export service.
///
/// Holds the immutable gateway configuration and the transport selected at
/// startup. Safe to share across concurrent requests; the only suspension
/// point is the backend call itself.
pub struct ExportService {
    config: Arc<GatewayConfig>,
    invoker: BoxBackendInvoker,
}

impl ExportService {
    pub fn new(config: Arc<GatewayConfig>, invoker: BoxBackendInvoker) -> Self {
        Self { config, invoker }
    }

    /// Generate a calendar feed for the given export token.
    ///
    /// `token` is the raw `token` query parameter (possibly absent);
    /// `forward_headers` are the propagatable inbound headers for context
    /// mode. Credentials are resolved per request so a misconfigured
    /// deployment surfaces as `ExportError::Config` rather than a crash.
    pub async fn export(
        &self,
        token: Option<&str>,
        forward_headers: Vec<(String, String)>,
    ) -> Result<CalendarExport, ExportError> {
        let token = match token {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ExportError::MissingToken),
        };

        let credentials = self.config.credentials()?;

        let request = ExportRequest::new(token).with_forward_headers(forward_headers);

        tracing::debug!(
            transport = %self.invoker.name(),
            app_id = %credentials.app_id,
            "invoking backend export"
        );

        let content = self.invoker.invoke(&credentials, &request).await?;

        tracing::info!(
            transport = %self.invoker.name(),
            bytes = content.len(),
            "calendar feed generated"
        );

        Ok(CalendarExport { content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use icalgw_types::config::{BackendMode, Credentials};
    use icalgw_types::error::InvokeError;
    use icalgw_types::export::ExportRequest;

    use crate::invoker::BackendInvoker;

    /// Test invoker that records the request it was given.
    struct MockInvoker {
        result: fn() -> Result<String, InvokeError>,
    }

    impl MockInvoker {
        fn ok() -> Self {
            Self {
                result: || Ok("BEGIN:VCALENDAR\nEND:VCALENDAR".to_string()),
            }
        }

        fn failing(result: fn() -> Result<String, InvokeError>) -> Self {
            Self { result }
        }
    }

    impl BackendInvoker for MockInvoker {
        fn name(&self) -> &str {
            "mock"
        }

        async fn invoke(
            &self,
            _credentials: &Credentials,
            _request: &ExportRequest,
        ) -> Result<String, InvokeError> {
            (self.result)()
        }
    }

    fn configured() -> Arc<GatewayConfig> {
        Arc::new(GatewayConfig {
            app_id: Some("app-1".to_string()),
            ..GatewayConfig::default()
        })
    }

    fn service(config: Arc<GatewayConfig>, invoker: MockInvoker) -> ExportService {
        ExportService::new(config, BoxBackendInvoker::new(invoker))
    }

    #[tokio::test]
    async fn test_export_success() {
        let svc = service(configured(), MockInvoker::ok());
        let export = svc.export(Some("tok"), Vec::new()).await.unwrap();
        assert!(export.content.starts_with("BEGIN:VCALENDAR"));
    }

    #[tokio::test]
    async fn test_export_missing_token() {
        let svc = service(configured(), MockInvoker::ok());
        let err = svc.export(None, Vec::new()).await.unwrap_err();
        assert!(matches!(err, ExportError::MissingToken));
    }

    #[tokio::test]
    async fn test_export_blank_token_is_missing() {
        let svc = service(configured(), MockInvoker::ok());
        let err = svc.export(Some("   "), Vec::new()).await.unwrap_err();
        assert!(matches!(err, ExportError::MissingToken));
    }

    #[tokio::test]
    async fn test_export_unconfigured_names_variable() {
        let svc = service(Arc::new(GatewayConfig::default()), MockInvoker::ok());
        let err = svc.export(Some("tok"), Vec::new()).await.unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
        assert!(err.to_string().contains("ICALGW_APP_ID"));
    }

    #[tokio::test]
    async fn test_export_direct_mode_without_key() {
        let config = Arc::new(GatewayConfig {
            app_id: Some("app-1".to_string()),
            mode: BackendMode::Direct,
            ..GatewayConfig::default()
        });
        let svc = service(config, MockInvoker::ok());
        let err = svc.export(Some("tok"), Vec::new()).await.unwrap_err();
        assert!(err.to_string().contains("ICALGW_API_KEY"));
    }

    #[tokio::test]
    async fn test_export_backend_failure_passes_through() {
        let svc = service(
            configured(),
            MockInvoker::failing(|| {
                Err(InvokeError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                })
            }),
        );
        let err = svc.export(Some("tok"), Vec::new()).await.unwrap_err();
        match err {
            ExportError::Invoke(InvokeError::Status { status, .. }) => assert_eq!(status, 502),
            other => panic!("unexpected error: {other}"),
        }
    }
}
