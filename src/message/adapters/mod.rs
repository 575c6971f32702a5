//! Boundary adapters for the message normalisation layer.
//!
//! - [`json`]: decoding inbound JSON values against the wire schema, with
//!   either naming convention, and grouping fetched lists
//! - [`binary`]: base64 staging and preview decoding for attachments

pub mod binary;
pub mod json;

pub use binary::decode_preview;
pub use json::{ResponseBuckets, decode_message, decode_messages, encode_message};
