//! Base64 staging for binary attachments.
//!
//! Reading a picked file is the collaborator's job. This adapter turns the
//! bytes (or a data URL) into staged text, and decodes staged text for
//! previews. Assembly never calls [`decode_preview`]: staged text is sent
//! verbatim whether or not it is valid base64.

use crate::message::{domain::BinaryDraft, error::NormalizationError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

impl BinaryDraft {
    /// Stages file content as padded standard base64 and clears the null flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use interlace::message::domain::BinaryDraft;
    ///
    /// let draft = BinaryDraft::from_bytes(b"Hello", "hello.txt");
    /// assert_eq!(draft.text, "SGVsbG8=");
    /// assert!(!draft.null);
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8], filename: impl Into<String>) -> Self {
        Self {
            text: STANDARD.encode(bytes),
            filename: filename.into(),
            null: false,
        }
    }

    /// Stages the payload of a `data:` URL as produced by a file reader.
    ///
    /// Everything after the first comma is kept; a URL without a comma stages
    /// an empty payload.
    #[must_use]
    pub fn from_data_url(data_url: &str, filename: impl Into<String>) -> Self {
        Self {
            text: data_url
                .split_once(',')
                .map(|(_, payload)| payload.to_owned())
                .unwrap_or_default(),
            filename: filename.into(),
            null: false,
        }
    }
}

/// Decodes staged base64 text for a preview.
///
/// # Errors
///
/// Returns [`NormalizationError::InvalidBase64`] when the text is not padded
/// standard base64.
pub fn decode_preview(text: &str) -> Result<Vec<u8>, NormalizationError> {
    STANDARD
        .decode(text.trim())
        .map_err(|err| NormalizationError::InvalidBase64(err.to_string()))
}
