//! Outbound payload assembly and its inbound inverse.
//!
//! The outbound path runs in two stages, mirroring what the form shows:
//!
//! 1. [`build_local`] parses the form into a [`LocalMessage`], the record the
//!    payload preview renders;
//! 2. [`local_to_wire`] maps that record onto the wire schema.
//!
//! [`assemble_outbound`] chains both. [`invert_inbound`] is the exact inverse
//! of stage 2 and [`form_from_local`] the inverse of stage 1, so a received
//! message can be reloaded into the form, edited, and sent again.

use super::nested::{
    build_binary, build_items, build_meta, build_notes, decompose_binary, decompose_items,
    decompose_meta, decompose_notes,
};
use super::optionality::{
    classify_active, number_text, optional_number, optional_text, parse_identifier,
    resolve_active,
};
use super::temporal::{decode_date_only, decode_date_time, encode_date_only, encode_date_time};
use crate::message::domain::{
    AwkwardDraft, AwkwardFields, Field, FormState, LocalMessage, WireMessage,
};
use mockable::Clock;

/// Produces the outbound wire message for the current form state.
///
/// Never fails: every optional input has a documented fallback and
/// `createdAt` falls back to the clock's current instant.
///
/// # Examples
///
/// ```
/// use interlace::message::domain::{FormState, ListMode};
/// use interlace::message::normalization::assembler::assemble_outbound;
/// use mockable::DefaultClock;
///
/// let mut form = FormState::default();
/// form.id = "42".to_owned();
/// form.items.mode = ListMode::Null;
///
/// let wire = assemble_outbound(&form, &DefaultClock);
/// assert_eq!(wire.id, 42);
/// assert!(wire.items.is_null());
/// ```
#[must_use]
pub fn assemble_outbound(form: &FormState, clock: &impl Clock) -> WireMessage {
    local_to_wire(&build_local(form, clock), clock)
}

/// Parses the form into the local display record.
///
/// An empty timestamp input is replaced by the current instant here, so the
/// preview always shows the value that will be sent.
#[must_use]
pub fn build_local(form: &FormState, clock: &impl Clock) -> LocalMessage {
    let created_at = if form.created_at.trim().is_empty() {
        decode_date_time(clock.utc())
    } else {
        form.created_at.clone()
    };
    let (binary_data, binary_filename) = build_binary(&form.binary);

    LocalMessage {
        id: parse_identifier(&form.id),
        text: form.text.clone(),
        created_at,
        date_only: form.date_only.clone(),
        active: resolve_active(form.active),
        price: optional_number("price", &form.price),
        ratio: optional_number("ratio", &form.ratio),
        uuid: optional_text(&form.uuid),
        category: form.category,
        meta: build_meta(&form.meta),
        items: build_items(&form.items),
        notes: build_notes(&form.notes),
        binary_data,
        binary_filename,
        awkward: awkward_fields(&form.awkward),
    }
}

/// Maps a local record onto the wire schema.
///
/// Only the temporal fields change representation. Awkward fields keep their
/// values; their keys are renamed when the wire message is serialised.
#[must_use]
pub fn local_to_wire(local: &LocalMessage, clock: &impl Clock) -> WireMessage {
    WireMessage {
        id: local.id,
        text: local.text.clone(),
        created_at: encode_date_time(&local.created_at, clock),
        date_only: encode_date_only(&local.date_only),
        active: local.active,
        price: local.price,
        ratio: local.ratio,
        uuid: local.uuid.clone(),
        category: local.category,
        meta: local.meta.clone(),
        items: local.items.clone(),
        notes: local.notes.clone(),
        binary_data: local.binary_data.clone(),
        binary_filename: local.binary_filename.clone(),
        awkward: local.awkward.clone(),
    }
}

/// Maps an inbound wire message to the local display record.
///
/// Total over well-formed wire messages: every absent, null and empty
/// permutation has a local counterpart.
#[must_use]
pub fn invert_inbound(wire: &WireMessage) -> LocalMessage {
    LocalMessage {
        id: wire.id,
        text: wire.text.clone(),
        created_at: decode_date_time(wire.created_at),
        date_only: decode_date_only(wire.date_only),
        active: wire.active,
        price: wire.price,
        ratio: wire.ratio,
        uuid: wire.uuid.clone(),
        category: wire.category,
        meta: wire.meta.clone(),
        items: wire.items.clone(),
        notes: wire.notes.clone(),
        binary_data: wire.binary_data.clone(),
        binary_filename: wire.binary_filename.clone(),
        awkward: wire.awkward.clone(),
    }
}

/// Decomposes a local record back into editable form state.
///
/// Selectors are re-derived from each value's presence: null lists select
/// `null`, empty lists select `empty`, populated lists select `values` with
/// their text reconstructed. Awkward fields that are null or absent stage an
/// empty string.
#[must_use]
pub fn form_from_local(local: &LocalMessage) -> FormState {
    FormState {
        id: local.id.to_string(),
        text: local.text.clone(),
        created_at: local.created_at.clone(),
        date_only: local.date_only.clone(),
        active: classify_active(local.active),
        price: number_text(local.price),
        ratio: number_text(local.ratio),
        uuid: local.uuid.clone().unwrap_or_default(),
        category: local.category,
        meta: decompose_meta(local.meta.as_ref()),
        items: decompose_items(&local.items),
        notes: decompose_notes(&local.notes),
        binary: decompose_binary(&local.binary_data, local.binary_filename.as_deref()),
        awkward: awkward_draft(&local.awkward),
    }
}

impl From<&LocalMessage> for FormState {
    fn from(local: &LocalMessage) -> Self {
        form_from_local(local)
    }
}

fn awkward_fields(draft: &AwkwardDraft) -> AwkwardFields {
    AwkwardFields {
        class: Field::Present(draft.class.clone()),
        display_name: Field::Present(draft.display_name.clone()),
        with_space: Field::Present(draft.with_space.clone()),
        snake_case: Field::Present(draft.snake_case.clone()),
        camel_case: Field::Present(draft.camel_case.clone()),
    }
}

fn awkward_draft(fields: &AwkwardFields) -> AwkwardDraft {
    let text = |field: &Field<String>| field.present().cloned().unwrap_or_default();
    AwkwardDraft {
        class: text(&fields.class),
        display_name: text(&fields.display_name),
        with_space: text(&fields.with_space),
        snake_case: text(&fields.snake_case),
        camel_case: text(&fields.camel_case),
    }
}
