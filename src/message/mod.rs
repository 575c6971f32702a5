//! Message shapes and the normalisation pipeline.
//!
//! # Architecture
//!
//! - **Domain**: form state ([`domain::FormState`]), display record
//!   ([`domain::LocalMessage`]) and wire record ([`domain::WireMessage`])
//! - **Normalization**: key translation, temporal codec, optionality
//!   resolution, nested structures and payload assembly
//! - **Adapters**: JSON decoding of inbound payloads and base64 staging
//! - **Presentation**: per-field presence badges for received messages
//!
//! # Example
//!
//! ```
//! use interlace::message::adapters::json::encode_message;
//! use interlace::message::domain::ListMode;
//! use interlace::message::normalization::{assemble_outbound, invert_inbound};
//! use interlace::message::samples::initial_form;
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let mut form = initial_form(&clock);
//! form.meta.tags_mode = ListMode::Null;
//!
//! let wire = assemble_outbound(&form, &clock);
//! let json = encode_message(&wire).expect("serialisable");
//! assert!(json["meta"]["tags"].is_null());
//! assert_eq!(json["displayName"], "Rust Control Room");
//!
//! let local = invert_inbound(&wire);
//! assert_eq!(local.created_at, form.created_at);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod normalization;
pub mod presentation;
pub mod samples;

#[cfg(test)]
mod tests;
