//! Shared types for the iCal export gateway.
//!
//! This crate contains the gateway configuration, the per-request transfer
//! types, and the error taxonomy used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod config;
pub mod error;
pub mod export;
