//! HTTP layer for the iCal export gateway.
//!
//! One public route (`GET /ical/export`), CORS stamped on every response,
//! and error translation at the handler boundary.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod router;
