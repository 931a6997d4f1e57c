//! HTTP surface for the iCal export gateway.
//!
//! Axum-based single-route gateway: `GET /ical/export` plus CORS preflight
//! handling. Exposed as a library so the integration tests can boot the
//! real router; the `icalgw` binary lives in `main.rs`.

pub mod http;
pub mod state;
