use thiserror::Error;

/// Synthetic status reported for failures that happened before any response
/// was received. Distinct from every real HTTP status code.
pub const TRANSPORT_STATUS: u16 = 0;

/// Errors surfaced by the Songle client.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS failure, connection
    /// refused, timeout in the underlying transport).
    #[error("request failed before a response was received: {message}")]
    Transport {
        /// Description from the transport layer.
        message: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("[{status}] {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload root does not have the shape the record descriptor
    /// requires (object for a record, array for a list endpoint).
    #[error("{schema} payload is not {expected}")]
    Shape {
        /// Name of the record descriptor being materialized.
        schema: &'static str,
        /// Shape the descriptor required.
        expected: &'static str,
    },

    /// A well-formed response omitted a field the record requires and has
    /// no default for.
    #[error("{schema} response is missing required field `{field}`")]
    MissingField {
        /// Name of the record descriptor being materialized.
        schema: &'static str,
        /// The field that never arrived.
        field: &'static str,
    },
}

impl Error {
    /// Status code associated with this error, if the failure had one.
    ///
    /// Transport failures report [`TRANSPORT_STATUS`] so callers can
    /// distinguish "no response" from any real HTTP code.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { .. } => Some(TRANSPORT_STATUS),
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
