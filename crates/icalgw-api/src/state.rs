//! Application state wiring.
//!
//! `AppState` pins the export pipeline to the transport the configuration
//! selects. It is the only cross-request state and is immutable, so
//! concurrent requests need no coordination.

use std::sync::Arc;

use icalgw_core::export::ExportService;
use icalgw_infra::backend::build_invoker;
use icalgw_types::config::GatewayConfig;

/// Shared application state: the configured export service.
#[derive(Clone)]
pub struct AppState {
    pub export_service: Arc<ExportService>,
}

impl AppState {
    /// Wire the export service from the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let config = Arc::new(config);
        let invoker = build_invoker(&config);

        Self {
            export_service: Arc::new(ExportService::new(config, invoker)),
        }
    }
}
