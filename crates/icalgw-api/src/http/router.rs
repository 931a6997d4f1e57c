//! Axum router configuration with middleware.
//!
//! One supported route: `GET /ical/export` (exact, case-sensitive). Any
//! other method on that path and any other path get the same 404, and
//! OPTIONS preflight is answered before routing by the CORS middleware.
//! Middleware: CORS stamping, request tracing.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::http::{cors, handlers};
use crate::state::AppState;

/// Build the gateway router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/ical/export",
            get(handlers::export::export).fallback(unsupported_route),
        )
        .fallback(unsupported_route)
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 404 for everything outside the single supported route.
async fn unsupported_route() -> (StatusCode, &'static str) {
    (
        StatusCode::NOT_FOUND,
        "iCal gateway: only GET /ical/export is available",
    )
}
