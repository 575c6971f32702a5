//! Domain types for the message normalisation layer.
//!
//! This module contains pure data shapes with no behaviour beyond
//! construction helpers. All types are immutable once built and are
//! `Send + Sync`.
//!
//! - [`FormState`]: raw text inputs and mode selectors
//! - [`LocalMessage`]: display record under local naming
//! - [`WireMessage`]: schema record under wire naming

mod awkward;
mod category;
mod field;
mod form;
mod local;
mod parts;
mod wire;

pub use awkward::AwkwardFields;
pub use category::Category;
pub use field::Field;
pub use form::{
    ActiveMode, AwkwardDraft, BinaryDraft, FormState, ItemRow, ItemsDraft, ListMode, MetaDraft,
    NotesDraft, NotesMode,
};
pub use local::LocalMessage;
pub use parts::{LineItem, Meta, Notes, NotesComment};
pub use wire::WireMessage;
