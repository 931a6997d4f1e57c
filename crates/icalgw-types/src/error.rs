use thiserror::Error;

/// Errors from resolving gateway configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Errors from invoking the backend service.
///
/// Network failure, timeout, and a non-2xx backend status are all one
/// failure category from the caller's perspective; the variants exist so
/// the HTTP layer can pass the backend's status through when it is known.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend request timed out")]
    Timeout,

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Errors from the export pipeline, in the order they can occur.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("missing export token")]
    MissingToken,

    #[error("server configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to generate iCal feed: {0}")]
    Invoke(#[from] InvokeError),
}
