//! Interlace: message normalisation between editable form state and the
//! shared wire schema.
//!
//! Two backend services exchange one message schema whose field names do not
//! all survive every language's naming rules. This crate maps a raw form
//! (free text plus mode selectors) onto that schema and maps received
//! messages back, preserving the difference between a missing field, an
//! explicit `null`, and an empty value in both directions.
//!
//! # Architecture
//!
//! - **Domain**: pure data shapes for the form, the local display record and
//!   the wire record
//! - **Normalization**: pure functions turning one shape into another
//! - **Adapters**: JSON and base64 at the boundary with the transport and
//!   file-picker collaborators
//!
//! # Modules
//!
//! - [`message`]: message shapes and the normalisation pipeline
//! - [`config`]: backend service endpoints

pub mod config;
pub mod message;
