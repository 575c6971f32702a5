//! Error types for message normalisation and transport failure reporting.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Optional form
//! input never produces an error: those paths fall back silently. Errors here
//! cover inbound JSON that does not match the wire schema, invalid selector
//! strings, and failures surfaced by the transport collaborator.

use std::fmt;
use thiserror::Error;

/// Errors raised while decoding inbound payloads or encoding outbound ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// The inbound value is not a JSON object.
    #[error("inbound message must be a JSON object")]
    NotAnObject,

    /// The inbound object does not conform to the wire schema.
    #[error("malformed wire message: {0}")]
    MalformedWire(String),

    /// An entry of an inbound list does not conform to the wire schema.
    #[error("malformed wire message at index {index}: {reason}")]
    MalformedEntry {
        /// Position of the entry in the inbound list.
        index: usize,
        /// Description of the decoding failure.
        reason: String,
    },

    /// An outbound message could not be serialised to JSON.
    #[error("wire message could not be serialised: {0}")]
    Serialization(String),

    /// Staged binary text is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

impl NormalizationError {
    /// Creates a malformed wire message error.
    #[must_use]
    pub fn malformed(reason: impl fmt::Display) -> Self {
        Self::MalformedWire(reason.to_string())
    }

    /// Creates an error for the list entry at `index`.
    #[must_use]
    pub fn malformed_entry(index: usize, reason: impl fmt::Display) -> Self {
        Self::MalformedEntry {
            index,
            reason: reason.to_string(),
        }
    }
}

/// Error returned when a selector string does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct ParseSelectorError {
    /// The selector being parsed (for example `category` or `list mode`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseSelectorError {
    /// Creates a parse error for `kind` with the rejected `value`.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A failure reported by the transport collaborator, classified for display.
///
/// The classification never swallows a failure: [`Self::display_message`]
/// always yields text suitable for a status line.
///
/// # Examples
///
/// ```
/// use interlace::message::error::TransportFailure;
///
/// let failure = TransportFailure::response(503, "Service Unavailable", Some("Kafka unavailable".into()));
/// assert_eq!(failure.display_message(), "Kafka unavailable");
///
/// let unknown = TransportFailure::unknown(&42);
/// assert_eq!(unknown.display_message(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The service answered with an error response.
    #[error("service responded with status {status}: {message}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Status text or client-side error message.
        message: String,
        /// Response body, if it could be read.
        body: Option<String>,
    },

    /// A typed error raised by the client (connection refused, timeout, ...).
    #[error("{0}")]
    Failure(String),

    /// A value that is not an error type.
    #[error("{0}")]
    Unknown(String),
}

impl TransportFailure {
    /// Classifies an HTTP error response.
    #[must_use]
    pub fn response(status: u16, message: impl Into<String>, body: Option<String>) -> Self {
        Self::Response {
            status,
            message: message.into(),
            body,
        }
    }

    /// Classifies a typed client error by its message.
    #[must_use]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::Failure(error.to_string())
    }

    /// Classifies an arbitrary value by its debug rendering.
    #[must_use]
    pub fn unknown(value: &impl fmt::Debug) -> Self {
        Self::Unknown(format!("{value:?}"))
    }

    /// Returns the human-readable text for a status line.
    ///
    /// Response errors prefer a non-blank body, then the status message, then
    /// the bare status code.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Response {
                status,
                message,
                body,
            } => body
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .or_else(|| Some(message.as_str()).filter(|text| !text.trim().is_empty()))
                .map_or_else(|| format!("HTTP {status}"), ToOwned::to_owned),
            Self::Failure(message) | Self::Unknown(message) => message.clone(),
        }
    }
}
