//! Assembly and decomposition of the compound sub-objects.
//!
//! Each `build_*` function turns staged drafts into the shared shapes from
//! [`crate::message::domain`]; each `decompose_*` function is its inverse and
//! re-derives the selectors and raw text a form would hold.

use super::optionality::{
    classify_list, number_text, optional_number, optional_text, parse_number, resolve_list,
};
use crate::message::domain::{
    BinaryDraft, Field, ItemRow, ItemsDraft, LineItem, ListMode, Meta, MetaDraft, Notes,
    NotesComment, NotesDraft, NotesMode,
};
use std::collections::BTreeMap;

/// Separator used when reconstructing tag text.
pub const TAG_SEPARATOR: &str = ", ";

/// Splits comma-separated tags, trimming each and dropping empties.
///
/// Order and duplicates are preserved.
///
/// # Examples
///
/// ```
/// use interlace::message::normalization::nested::parse_tags;
///
/// assert_eq!(parse_tags("a, b ,b"), vec!["a", "b", "b"]);
/// assert!(parse_tags(" , ").is_empty());
/// ```
#[must_use]
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Resolves the tag selector against the staged text.
#[must_use]
pub fn build_tags(mode: ListMode, text: &str) -> Field<Vec<String>> {
    resolve_list(mode, || parse_tags(text))
}

/// Parses newline-separated `key:value` metric lines.
///
/// The key is the text before the first colon and the value the text between
/// the first and second colon; anything after a second colon is ignored.
/// Blank lines are skipped, as are lines without a colon, with an empty key,
/// or whose value is not a finite number. A repeated key keeps its last
/// value.
///
/// # Examples
///
/// ```
/// use interlace::message::normalization::nested::parse_metrics;
///
/// let metrics = parse_metrics("latency:15.4\nbad-line\nthroughput:0.99");
/// assert_eq!(metrics.len(), 2);
/// assert_eq!(metrics.get("latency"), Some(&15.4));
/// ```
#[must_use]
pub fn parse_metrics(text: &str) -> BTreeMap<String, f64> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let mut segments = line.split(':');
            let key = segments.next().map(str::trim).unwrap_or_default();
            let metric = segments
                .next()
                .filter(|_| !key.is_empty())
                .and_then(parse_number)
                .map(|number| (key.to_owned(), number));
            if metric.is_none() {
                tracing::debug!(field = "meta.metrics", line, "malformed metric line skipped");
            }
            metric
        })
        .collect()
}

/// Renders metrics as `key:value` lines.
#[must_use]
pub fn metrics_text(metrics: &BTreeMap<String, f64>) -> String {
    metrics
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the `meta` composite.
///
/// Resolves to `None` when the locale is empty, no metric survives parsing,
/// and the tag selector produced nothing explicit (values mode with no tags).
/// An empty or null tag selection keeps the composite so the selector
/// survives a round trip.
#[must_use]
pub fn build_meta(draft: &MetaDraft) -> Option<Meta> {
    let tags = build_tags(draft.tags_mode, &draft.tags_text);
    let metrics = parse_metrics(&draft.metrics_text);
    let locale = optional_text(&draft.locale);

    let tags_unset = draft.tags_mode == ListMode::Values
        && tags.present().is_none_or(Vec::is_empty);
    if locale.is_none() && tags_unset && metrics.is_empty() {
        return None;
    }

    Some(Meta {
        locale,
        tags,
        metrics: (!metrics.is_empty()).then_some(metrics),
    })
}

/// Re-derives the `meta` inputs from an inbound composite.
///
/// The tag selector reflects what the form will send again: a list whose
/// entries are all blank stages as [`ListMode::Empty`].
#[must_use]
pub fn decompose_meta(meta: Option<&Meta>) -> MetaDraft {
    meta.map_or_else(MetaDraft::default, |value| {
        let tags_text = value
            .tags
            .present()
            .map(|tags| tags.join(TAG_SEPARATOR))
            .unwrap_or_default();
        let tags_mode = match classify_list(&value.tags) {
            ListMode::Values if parse_tags(&tags_text).is_empty() => ListMode::Empty,
            mode => mode,
        };
        MetaDraft {
            locale: value.locale.clone().unwrap_or_default(),
            tags_mode,
            tags_text: if tags_mode == ListMode::Values {
                tags_text
            } else {
                String::new()
            },
            metrics_text: value.metrics.as_ref().map(metrics_text).unwrap_or_default(),
        }
    })
}

/// Converts one row, dropping it when its trimmed code is empty.
///
/// Quantity and weight resolve independently: empty or non-numeric text
/// becomes absent and never removes the row.
#[must_use]
pub fn build_item(row: &ItemRow) -> Option<LineItem> {
    let code = row.code.trim();
    if code.is_empty() {
        return None;
    }
    Some(LineItem {
        code: code.to_owned(),
        quantity: optional_number("items.quantity", &row.quantity),
        weight: optional_number("items.weight", &row.weight),
    })
}

/// Resolves the items selector against the staged rows.
#[must_use]
pub fn build_items(draft: &ItemsDraft) -> Field<Vec<LineItem>> {
    resolve_list(draft.mode, || draft.rows.iter().filter_map(build_item).collect())
}

/// Re-derives the items inputs from an inbound list.
///
/// Anything that would not send at least one item again stages one blank
/// row in [`ListMode::Empty`]; null lists keep [`ListMode::Null`].
#[must_use]
pub fn decompose_items(items: &Field<Vec<LineItem>>) -> ItemsDraft {
    let rows: Vec<ItemRow> = items
        .present()
        .map(|values| {
            values
                .iter()
                .map(|item| ItemRow {
                    code: item.code.clone(),
                    quantity: number_text(item.quantity),
                    weight: number_text(item.weight),
                })
                .collect()
        })
        .unwrap_or_default();
    if rows.iter().any(|row| build_item(row).is_some()) {
        return ItemsDraft {
            mode: ListMode::Values,
            rows,
        };
    }
    ItemsDraft {
        mode: match classify_list(items) {
            ListMode::Null => ListMode::Null,
            ListMode::Values | ListMode::Empty => ListMode::Empty,
        },
        rows: vec![ItemRow::blank()],
    }
}

/// Resolves the notes selector to exactly one shape.
#[must_use]
pub fn build_notes(draft: &NotesDraft) -> Field<Notes> {
    match draft.mode {
        NotesMode::Text => Field::Present(Notes::Text(draft.text.clone())),
        NotesMode::Object => Field::Present(Notes::Structured(NotesComment::new(
            draft.comment.clone(),
        ))),
        NotesMode::Null => Field::Null,
    }
}

/// Re-derives the notes inputs by inspecting the inbound shape.
///
/// Anything that is neither null nor a plain string, absent notes included,
/// stages the object shape; a missing comment stages as empty.
#[must_use]
pub fn decompose_notes(notes: &Field<Notes>) -> NotesDraft {
    match notes {
        Field::Null => NotesDraft {
            mode: NotesMode::Null,
            ..NotesDraft::default()
        },
        Field::Present(Notes::Structured(structured)) => NotesDraft {
            mode: NotesMode::Object,
            comment: structured.comment.present().cloned().unwrap_or_default(),
            ..NotesDraft::default()
        },
        Field::Absent => NotesDraft {
            mode: NotesMode::Object,
            ..NotesDraft::default()
        },
        Field::Present(Notes::Text(text)) => NotesDraft {
            mode: NotesMode::Text,
            text: text.clone(),
            ..NotesDraft::default()
        },
    }
}

/// Resolves the staged attachment to the payload and filename fields.
///
/// The null flag overrides anything staged. Otherwise the text passes through
/// verbatim, including an empty string; it is not decoded or validated here.
#[must_use]
pub fn build_binary(draft: &BinaryDraft) -> (Field<String>, Option<String>) {
    if draft.null {
        return (Field::Null, None);
    }
    (
        Field::Present(draft.text.clone()),
        optional_text(&draft.filename),
    )
}

/// Re-derives the staged attachment from inbound fields.
#[must_use]
pub fn decompose_binary(data: &Field<String>, filename: Option<&str>) -> BinaryDraft {
    BinaryDraft {
        text: data.present().cloned().unwrap_or_default(),
        filename: filename.map(ToOwned::to_owned).unwrap_or_default(),
        null: data.is_null(),
    }
}
