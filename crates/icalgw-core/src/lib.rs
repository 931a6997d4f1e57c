//! Core export pipeline for the iCal export gateway.
//!
//! Defines the [`invoker::BackendInvoker`] seam the transport
//! implementations plug into, and the [`export::ExportService`] that runs
//! the validate -> resolve credentials -> invoke pipeline.

pub mod box_invoker;
pub mod export;
pub mod invoker;
