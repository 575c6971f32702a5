//! JSON boundary adapter for inbound and outbound payloads.
//!
//! The transport collaborator hands over already-deserialised JSON values.
//! This adapter checks them against the wire schema and groups the four
//! fetched lists for display.

use crate::message::{
    domain::{LocalMessage, WireMessage},
    error::NormalizationError,
    normalization::{KeyNaming, invert_inbound, rename_keys},
};
use serde_json::Value;

/// Result type for inbound decoding.
pub type DecodeResult<T> = Result<T, NormalizationError>;

/// Decodes one inbound message.
///
/// Awkward keys are accepted under either naming convention; local names are
/// translated to wire names before the schema is applied.
///
/// # Errors
///
/// Returns [`NormalizationError::NotAnObject`] for non-object values and
/// [`NormalizationError::MalformedWire`] when the object does not conform to
/// the wire schema.
///
/// # Examples
///
/// ```
/// use interlace::message::adapters::json::decode_message;
/// use serde_json::json;
///
/// let wire = decode_message(json!({
///     "id": 1,
///     "text": "",
///     "createdAt": "2024-05-01T12:00:00Z",
///     "category": "A",
///     "display-name": "Control Room"
/// }))
/// .expect("conforming payload");
/// assert_eq!(wire.awkward.display_name.present().map(String::as_str), Some("Control Room"));
/// ```
pub fn decode_message(value: Value) -> DecodeResult<WireMessage> {
    let Value::Object(object) = value else {
        return Err(NormalizationError::NotAnObject);
    };
    let normalized = rename_keys(object, KeyNaming::Wire);
    serde_json::from_value(Value::Object(normalized)).map_err(NormalizationError::malformed)
}

/// Decodes an inbound list, reporting the first non-conforming entry.
///
/// # Errors
///
/// Returns [`NormalizationError::MalformedEntry`] naming the failing index.
pub fn decode_messages(values: Vec<Value>) -> DecodeResult<Vec<WireMessage>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            decode_message(value).map_err(|err| NormalizationError::malformed_entry(index, err))
        })
        .collect()
}

/// Serialises an outbound message to a JSON value.
///
/// # Errors
///
/// Returns [`NormalizationError::Serialization`] if serialisation fails.
pub fn encode_message(message: &WireMessage) -> Result<Value, NormalizationError> {
    serde_json::to_value(message)
        .map_err(|err| NormalizationError::Serialization(err.to_string()))
}

/// The four message lists shown after a refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseBuckets {
    /// Messages stored by the Java service.
    pub java: Vec<LocalMessage>,
    /// Messages the Java service consumed from the Python topic.
    pub java_from_python: Vec<LocalMessage>,
    /// Messages stored by the Python service.
    pub python: Vec<LocalMessage>,
    /// Messages the Python service consumed from the Java topic.
    pub python_from_java: Vec<LocalMessage>,
}

impl ResponseBuckets {
    /// Inverts four fetched wire lists into display records.
    #[must_use]
    pub fn from_wire(
        java: &[WireMessage],
        java_from_python: &[WireMessage],
        python: &[WireMessage],
        python_from_java: &[WireMessage],
    ) -> Self {
        let invert = |messages: &[WireMessage]| -> Vec<LocalMessage> {
            messages.iter().map(invert_inbound).collect()
        };
        Self {
            java: invert(java),
            java_from_python: invert(java_from_python),
            python: invert(python),
            python_from_java: invert(python_from_java),
        }
    }

    /// Returns the total number of messages across all lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.java.len() + self.java_from_python.len() + self.python.len() + self.python_from_java.len()
    }

    /// Returns `true` when every list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
