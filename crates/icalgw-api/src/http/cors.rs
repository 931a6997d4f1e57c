//! CORS middleware.
//!
//! Browser-based callers must be able to read error bodies, so every
//! response -- success, error, or fallback -- carries the full header set.
//! tower-http's `CorsLayer` only emits the complete set on preflight
//! responses, so the gateway stamps the headers itself. Preflight OPTIONS
//! requests short-circuit here with an empty 200 before routing, matching
//! the inbound contract: OPTIONS is answered on any path.

use axum::extract::Request;
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, api_key";

/// The three CORS headers attached to every response.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static(ALLOW_ORIGIN),
        ),
        (
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static(ALLOW_METHODS),
        ),
        (
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
    ]
}

fn apply(headers: &mut HeaderMap) {
    for (name, value) in cors_headers() {
        headers.insert(name, value);
    }
}

/// Middleware: answer preflight immediately, stamp CORS on everything else.
pub async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_header_values_are_exact() {
        let headers = cors_headers();
        assert_eq!(headers[0].1, "*");
        assert_eq!(headers[1].1, "GET, POST, OPTIONS");
        assert_eq!(headers[2].1, "Content-Type, api_key");
    }

    #[test]
    fn test_apply_overwrites_existing_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("https://elsewhere.example"),
        );
        apply(&mut headers);
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(headers.len(), 3);
    }
}
