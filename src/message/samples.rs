//! Ready-made form states and messages for demos and tests.

use crate::message::{
    domain::{
        ActiveMode, AwkwardDraft, AwkwardFields, BinaryDraft, Category, Field, FormState, ItemRow,
        ItemsDraft, ListMode, LocalMessage, Meta, MetaDraft, Notes, NotesComment, NotesDraft,
        NotesMode,
    },
    normalization::{
        AwkwardKey,
        temporal::{decode_date_only, decode_date_time},
    },
};
use mockable::Clock;
use std::collections::BTreeMap;
use uuid::Uuid;

/// The form's starting values.
///
/// Timestamps come from `clock` and the UUID is freshly generated.
#[must_use]
pub fn initial_form(clock: &impl Clock) -> FormState {
    let now = clock.utc();
    FormState {
        id: "1".to_owned(),
        text: "Interoperability FTW".to_owned(),
        created_at: decode_date_time(now),
        date_only: decode_date_only(Some(now.date_naive())),
        active: ActiveMode::True,
        price: "19.99".to_owned(),
        ratio: "0.42".to_owned(),
        uuid: Uuid::new_v4().to_string(),
        category: Category::A,
        meta: MetaDraft {
            locale: "en-US".to_owned(),
            tags_mode: ListMode::Values,
            tags_text: "client,shared,openapi".to_owned(),
            metrics_text: "latency:15.4\nthroughput:0.99".to_owned(),
        },
        items: ItemsDraft {
            mode: ListMode::Values,
            rows: vec![ItemRow::new("SKU-1", "1", "0.25")],
        },
        notes: NotesDraft {
            mode: NotesMode::Text,
            text: "Plain string note".to_owned(),
            comment: "Nested comment note".to_owned(),
        },
        binary: BinaryDraft::default(),
        awkward: AwkwardDraft {
            class: "rust-client".to_owned(),
            display_name: "Rust Control Room".to_owned(),
            with_space: "Contains space text".to_owned(),
            snake_case: "snake_case_value".to_owned(),
            camel_case: "camelCaseValue".to_owned(),
        },
    }
}

/// A message exercising the null, empty and object branches.
///
/// `active` is null, `text` and two awkward fields are empty, `meta.tags` is
/// an empty list, and `notes` uses the object shape.
#[must_use]
pub fn null_empty_sample(clock: &impl Clock) -> LocalMessage {
    let metrics = BTreeMap::from([
        ("latencyMs".to_owned(), 15.4),
        ("ratioDrift".to_owned(), 0.000_045),
    ]);
    LocalMessage {
        id: 999,
        text: String::new(),
        created_at: decode_date_time(clock.utc()),
        date_only: String::new(),
        active: None,
        price: Some(12_345.678_9),
        ratio: Some(0.333_333_34),
        uuid: Some("0f8fad5b-d9cb-469f-a165-70867728950e".to_owned()),
        category: Category::C,
        meta: Some(Meta {
            locale: Some("pt-BR".to_owned()),
            tags: Field::Present(Vec::new()),
            metrics: Some(metrics),
        }),
        items: Field::Absent,
        notes: Field::Present(Notes::Structured(NotesComment::new(
            "Using object branch for notes",
        ))),
        binary_data: Field::Present("U2FtcGxlIEJhc2U2NA==".to_owned()),
        binary_filename: None,
        awkward: AwkwardFields::default()
            .with(AwkwardKey::Class, "rust-sample")
            .with(AwkwardKey::DisplayName, "")
            .with(AwkwardKey::WithSpace, "  ")
            .with(AwkwardKey::SnakeCase, "")
            .with(AwkwardKey::CamelCase, "sampleCamel"),
    }
}
