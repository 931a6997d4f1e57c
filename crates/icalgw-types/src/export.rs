//! Per-request transfer types for the export pipeline.

use serde::Serialize;

/// Download filename attached to every successful export.
pub const EXPORT_FILENAME: &str = "spacebook-bookings.ics";

/// Media type for iCalendar payloads.
pub const CALENDAR_MEDIA_TYPE: &str = "text/calendar; charset=utf-8";

/// Name of the backend operation that generates the feed.
pub const EXPORT_FUNCTION: &str = "generateIcalExport";

/// A single export request as seen by the backend invoker.
///
/// The token is opaque: its meaning and validation are owned entirely by
/// the backend. `forward_headers` carries the inbound request headers
/// eligible for propagation in context mode; hop-by-hop headers are
/// stripped before they get here.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub token: String,
    pub forward_headers: Vec<(String, String)>,
}

impl ExportRequest {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            forward_headers: Vec::new(),
        }
    }

    pub fn with_forward_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.forward_headers = headers;
        self
    }
}

/// JSON body sent to the backend operation.
#[derive(Debug, Serialize)]
pub struct ExportPayload<'a> {
    pub token: &'a str,
}

/// A generated calendar feed, ready to stream back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarExport {
    /// Raw iCalendar text exactly as the backend produced it.
    pub content: String,
}
