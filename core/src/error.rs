//! Error types for the quote API client.
//!
//! `NotFound` has its own variant since the service answers 404 for unknown
//! ids. Every other non-2xx response lands in `HttpError` with the raw status
//! and body.

use thiserror::Error;

/// Errors returned by `QuoteClient` and by transports executing its requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
