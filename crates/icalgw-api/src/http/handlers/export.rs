//! GET /ical/export handler.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use icalgw_types::export::{CALENDAR_MEDIA_TYPE, EXPORT_FILENAME};

use crate::http::error::AppError;
use crate::state::AppState;

/// Headers never propagated to the backend in context mode. Hop-by-hop
/// headers plus the ones the outbound client computes itself.
const UNFORWARDABLE: &[&str] = &[
    "host",
    "connection",
    "content-length",
    "content-type",
    "transfer-encoding",
    "upgrade",
    "keep-alive",
    "te",
    "trailer",
    "proxy-authorization",
    "accept-encoding",
];

/// Query parameters for the export endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct ExportQuery {
    /// Opaque export token, validated by the backend.
    pub token: Option<String>,
}

/// GET /ical/export?token=... - Stream the caller's calendar feed.
///
/// Cancellation: if the client disconnects, this future is dropped and the
/// in-flight backend call is aborted with it; no response is written after
/// the connection closes.
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let export = state
        .export_service
        .export(query.token.as_deref(), forwardable_headers(&headers))
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, CALENDAR_MEDIA_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        export.content,
    )
        .into_response())
}

/// Inbound headers eligible for propagation in context mode.
fn forwardable_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(name, _)| !UNFORWARDABLE.contains(&name.as_str()))
        .filter_map(|(name, value)| {
            let value = value.to_str().ok()?;
            Some((name.as_str().to_string(), value.to_string()))
        })
        .collect()
}
