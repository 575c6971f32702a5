//! Unit tests for the tag/metric bag, line items, notes and binary fields.

use crate::message::domain::{
    BinaryDraft, Field, ItemRow, ItemsDraft, LineItem, ListMode, Meta, MetaDraft, Notes,
    NotesComment, NotesDraft, NotesMode,
};
use crate::message::normalization::nested::{
    build_binary, build_item, build_items, build_meta, build_notes, build_tags, decompose_binary,
    decompose_items, decompose_meta, decompose_notes, metrics_text, parse_metrics, parse_tags,
};
use rstest::rstest;
use std::collections::BTreeMap;

fn meta_draft(locale: &str, tags_mode: ListMode, tags_text: &str, metrics_text: &str) -> MetaDraft {
    MetaDraft {
        locale: locale.to_owned(),
        tags_mode,
        tags_text: tags_text.to_owned(),
        metrics_text: metrics_text.to_owned(),
    }
}

// ============================================================================
// Tags and metrics
// ============================================================================

#[rstest]
#[case(ListMode::Values, Field::Present(vec!["a".to_owned(), "b".to_owned(), "b".to_owned()]))]
#[case(ListMode::Empty, Field::Present(Vec::new()))]
#[case(ListMode::Null, Field::Null)]
fn tag_modes(#[case] mode: ListMode, #[case] expected: Field<Vec<String>>) {
    assert_eq!(build_tags(mode, "a, b ,b"), expected);
}

#[rstest]
#[case("", 0)]
#[case(",,", 0)]
#[case("solo", 1)]
#[case(" x , , y ", 2)]
fn tag_parsing_drops_blanks(#[case] text: &str, #[case] count: usize) {
    assert_eq!(parse_tags(text).len(), count);
}

#[rstest]
fn metrics_skip_malformed_lines() {
    let metrics = parse_metrics("latency:15.4\nbad-line\nthroughput:0.99");
    let expected = BTreeMap::from([
        ("latency".to_owned(), 15.4),
        ("throughput".to_owned(), 0.99),
    ]);
    assert_eq!(metrics, expected);
}

#[rstest]
#[case(" spaced : 2 \r\n", "spaced", Some(2.0))]
#[case("url:1:2", "url", Some(1.0))]
#[case("url:x:2", "url", None)]
#[case("k:1\nk:3", "k", Some(3.0))]
fn metric_line_edges(#[case] text: &str, #[case] key: &str, #[case] expected: Option<f64>) {
    let metrics = parse_metrics(text);
    assert_eq!(metrics.get(key).copied(), expected);
    assert!(metrics.len() <= 1);
}

#[rstest]
#[case(":5")]
#[case("empty:")]
#[case("ratio:abc")]
#[case("   ")]
fn metric_lines_without_key_or_number_are_dropped(#[case] text: &str) {
    assert!(parse_metrics(text).is_empty());
}

#[rstest]
fn metrics_text_is_ordered_by_key() {
    let metrics = BTreeMap::from([("zeta".to_owned(), 1.0), ("alpha".to_owned(), 0.5)]);
    assert_eq!(metrics_text(&metrics), "alpha:0.5\nzeta:1");
}

// ============================================================================
// Meta composite
// ============================================================================

#[rstest]
fn meta_collapses_when_nothing_is_staged() {
    assert_eq!(build_meta(&meta_draft("", ListMode::Values, " , ", "bad-line")), None);
}

#[rstest]
#[case(ListMode::Empty, Field::Present(Vec::new()))]
#[case(ListMode::Null, Field::Null)]
fn explicit_tag_modes_keep_meta(#[case] mode: ListMode, #[case] tags: Field<Vec<String>>) {
    let meta = build_meta(&meta_draft("", mode, "ignored", "")).expect("meta kept");
    assert_eq!(
        meta,
        Meta {
            locale: None,
            tags,
            metrics: None,
        }
    );
}

#[rstest]
fn meta_carries_locale_tags_and_metrics() {
    let meta = build_meta(&meta_draft("en-US", ListMode::Values, "client, shared", "latency:15.4"))
        .expect("meta present");
    assert_eq!(meta.locale.as_deref(), Some("en-US"));
    assert_eq!(meta.tags, Field::Present(vec!["client".to_owned(), "shared".to_owned()]));
    assert_eq!(
        meta.metrics,
        Some(BTreeMap::from([("latency".to_owned(), 15.4)]))
    );
}

#[rstest]
fn locale_alone_keeps_meta_with_empty_tag_list() {
    let meta = build_meta(&meta_draft("pt-BR", ListMode::Values, "", "")).expect("meta present");
    assert_eq!(meta.tags, Field::Present(Vec::new()));
    assert_eq!(meta.metrics, None);
}

#[rstest]
#[case(ListMode::Values, "a, b")]
#[case(ListMode::Empty, "")]
#[case(ListMode::Null, "")]
fn meta_decomposition_recovers_tag_mode(#[case] mode: ListMode, #[case] text: &str) {
    let draft = meta_draft("en-US", mode, text, "latency:15.4");
    let meta = build_meta(&draft);
    assert_eq!(decompose_meta(meta.as_ref()), draft);
}

#[rstest]
#[case(&[" "])]
#[case(&[""])]
#[case(&["", "  ", ""])]
fn blank_only_tags_decompose_to_empty(#[case] tags: &[&str]) {
    let meta = Meta {
        locale: Some("en-US".to_owned()),
        tags: Field::Present(tags.iter().map(|tag| (*tag).to_owned()).collect()),
        metrics: None,
    };
    let draft = decompose_meta(Some(&meta));
    assert_eq!(draft.tags_mode, ListMode::Empty);
    assert!(draft.tags_text.is_empty());
    assert_eq!(
        build_meta(&draft).map(|rebuilt| rebuilt.tags),
        Some(Field::Present(Vec::new()))
    );
}

#[rstest]
fn absent_meta_decomposes_to_defaults() {
    assert_eq!(decompose_meta(None), MetaDraft::default());
}

// ============================================================================
// Line items
// ============================================================================

#[rstest]
fn rows_without_code_are_dropped() {
    let draft = ItemsDraft {
        mode: ListMode::Values,
        rows: vec![ItemRow::new("", "1", "2"), ItemRow::new("SKU-1", "", "0.25")],
    };
    assert_eq!(
        build_items(&draft),
        Field::Present(vec![LineItem::new("SKU-1").with_weight(0.25)])
    );
}

#[rstest]
fn non_numeric_fields_keep_the_row() {
    let item = build_item(&ItemRow::new(" SKU-2 ", "many", "1.5")).expect("row kept");
    assert_eq!(item, LineItem::new("SKU-2").with_weight(1.5));
}

#[rstest]
#[case(ListMode::Values, Field::Present(Vec::new()))]
#[case(ListMode::Empty, Field::Present(Vec::new()))]
#[case(ListMode::Null, Field::Null)]
fn blank_rows_yield_empty_list_in_values_mode(
    #[case] mode: ListMode,
    #[case] expected: Field<Vec<LineItem>>,
) {
    let draft = ItemsDraft {
        mode,
        rows: vec![ItemRow::blank(), ItemRow::new("  ", "3", "")],
    };
    assert_eq!(build_items(&draft), expected);
}

#[rstest]
fn one_sendable_row_keeps_values_mode() {
    let items = Field::Present(vec![LineItem::new(""), LineItem::new("SKU-3")]);
    let draft = decompose_items(&items);
    assert_eq!(draft.mode, ListMode::Values);
    assert_eq!(draft.rows.len(), 2);
    assert_eq!(build_items(&draft), Field::Present(vec![LineItem::new("SKU-3")]));
}

#[rstest]
fn populated_items_decompose_to_rows() {
    let items = Field::Present(vec![
        LineItem::new("SKU-1").with_quantity(1.0).with_weight(0.25),
        LineItem::new("SKU-2"),
    ]);
    assert_eq!(
        decompose_items(&items),
        ItemsDraft {
            mode: ListMode::Values,
            rows: vec![ItemRow::new("SKU-1", "1", "0.25"), ItemRow::new("SKU-2", "", "")],
        }
    );
}

#[rstest]
#[case(Field::Null, ListMode::Null)]
#[case(Field::Present(Vec::new()), ListMode::Empty)]
#[case(Field::Absent, ListMode::Empty)]
#[case(Field::Present(vec![LineItem::new("")]), ListMode::Empty)]
#[case(Field::Present(vec![LineItem::new("  ").with_quantity(2.0)]), ListMode::Empty)]
fn unpopulated_items_stage_one_blank_row(
    #[case] items: Field<Vec<LineItem>>,
    #[case] mode: ListMode,
) {
    assert_eq!(
        decompose_items(&items),
        ItemsDraft {
            mode,
            rows: vec![ItemRow::blank()],
        }
    );
}

// ============================================================================
// Notes
// ============================================================================

fn notes_draft(mode: NotesMode) -> NotesDraft {
    NotesDraft {
        mode,
        text: "Plain string note".to_owned(),
        comment: "Nested comment note".to_owned(),
    }
}

#[rstest]
#[case(NotesMode::Text, Field::Present(Notes::Text("Plain string note".to_owned())))]
#[case(
    NotesMode::Object,
    Field::Present(Notes::Structured(NotesComment::new("Nested comment note")))
)]
#[case(NotesMode::Null, Field::Null)]
fn exactly_one_notes_shape(#[case] mode: NotesMode, #[case] expected: Field<Notes>) {
    assert_eq!(build_notes(&notes_draft(mode)), expected);
}

#[rstest]
#[case(NotesMode::Text)]
#[case(NotesMode::Object)]
#[case(NotesMode::Null)]
fn notes_mode_survives_round_trip(#[case] mode: NotesMode) {
    assert_eq!(decompose_notes(&build_notes(&notes_draft(mode))).mode, mode);
}

#[rstest]
fn absent_notes_decompose_to_empty_object() {
    let draft = decompose_notes(&Field::Absent);
    assert_eq!(draft.mode, NotesMode::Object);
    assert!(draft.comment.is_empty());
    assert_eq!(
        build_notes(&draft),
        Field::Present(Notes::Structured(NotesComment::new("")))
    );
}

// ============================================================================
// Binary attachment
// ============================================================================

#[rstest]
fn null_flag_overrides_staged_binary() {
    let draft = BinaryDraft {
        text: "SGVsbG8=".to_owned(),
        filename: "hello.txt".to_owned(),
        null: true,
    };
    assert_eq!(build_binary(&draft), (Field::Null, None));
}

#[rstest]
#[case("SGVsbG8=", "hello.txt", Some("hello.txt"))]
#[case("", "", None)]
#[case("not base64 at all", "", None)]
fn staged_text_passes_through(
    #[case] text: &str,
    #[case] filename: &str,
    #[case] expected_name: Option<&str>,
) {
    let draft = BinaryDraft {
        text: text.to_owned(),
        filename: filename.to_owned(),
        null: false,
    };
    let (data, name) = build_binary(&draft);
    assert_eq!(data, Field::Present(text.to_owned()));
    assert_eq!(name.as_deref(), expected_name);
    assert_eq!(decompose_binary(&data, name.as_deref()), draft);
}

#[rstest]
fn null_binary_decomposes_with_flag() {
    let draft = decompose_binary(&Field::Null, None);
    assert!(draft.null);
    assert!(draft.text.is_empty());
}
