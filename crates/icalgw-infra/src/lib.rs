//! Infrastructure implementations for the iCal export gateway.
//!
//! Currently one concern: reaching the backend service over HTTP. Both
//! transports live under [`backend`].

pub mod backend;
