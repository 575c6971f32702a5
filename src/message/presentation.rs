//! Presence summaries for displayed messages.
//!
//! A received message is shown with a short badge per interesting field so
//! absent, null and empty values can be told apart at a glance.

use crate::message::{
    domain::{Field, LocalMessage, Notes},
    normalization::AwkwardKey,
};
use serde_json::Value;
use std::fmt;

/// Strings longer than this many characters are summarised by length.
pub const LONG_STRING_CHARS: usize = 60;

/// How a single field value presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceBadge {
    /// The key is not present.
    Missing,
    /// Explicit `null`.
    Null,
    /// The empty string.
    EmptyString,
    /// An empty list.
    EmptyList,
    /// A populated list with its length.
    List(usize),
    /// Any JSON object.
    Object,
    /// A string over [`LONG_STRING_CHARS`] characters, by character count.
    LongString(usize),
    /// Any other value, rendered as text.
    Scalar(String),
}

impl PresenceBadge {
    /// Classifies a raw JSON value; `None` means the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use interlace::message::presentation::PresenceBadge;
    /// use serde_json::json;
    ///
    /// assert_eq!(PresenceBadge::classify(None), PresenceBadge::Missing);
    /// assert_eq!(PresenceBadge::classify(Some(&json!([1, 2]))), PresenceBadge::List(2));
    /// assert_eq!(PresenceBadge::classify(Some(&json!(false))).render("active"), "active: false");
    /// ```
    #[must_use]
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::String(text)) => Self::text(text),
            Some(Value::Array(values)) => Self::list(values.len()),
            Some(Value::Object(_)) => Self::Object,
            Some(scalar @ (Value::Bool(_) | Value::Number(_))) => Self::Scalar(scalar.to_string()),
        }
    }

    /// Classifies a string value.
    #[must_use]
    pub fn text(text: &str) -> Self {
        let chars = text.chars().count();
        if chars == 0 {
            Self::EmptyString
        } else if chars > LONG_STRING_CHARS {
            Self::LongString(chars)
        } else {
            Self::Scalar(text.to_owned())
        }
    }

    /// Classifies a list by its length.
    #[must_use]
    pub const fn list(len: usize) -> Self {
        if len == 0 { Self::EmptyList } else { Self::List(len) }
    }

    /// Renders the badge as `label: summary`.
    #[must_use]
    pub fn render(&self, label: &str) -> String {
        format!("{label}: {self}")
    }
}

impl fmt::Display for PresenceBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::Null => f.write_str("null"),
            Self::EmptyString => f.write_str("empty string"),
            Self::EmptyList => f.write_str("[]"),
            Self::List(len) => write!(f, "array ×{len}"),
            Self::Object => f.write_str("object"),
            Self::LongString(chars) => write!(f, "{chars} chars"),
            Self::Scalar(text) => f.write_str(text),
        }
    }
}

/// A badge paired with the label it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledBadge {
    /// Display label, using local field names.
    pub label: &'static str,
    /// The field's presence.
    pub badge: PresenceBadge,
}

impl fmt::Display for LabelledBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.badge)
    }
}

fn field_badge<T>(field: &Field<T>, present: impl FnOnce(&T) -> PresenceBadge) -> PresenceBadge {
    match field {
        Field::Absent => PresenceBadge::Missing,
        Field::Null => PresenceBadge::Null,
        Field::Present(value) => present(value),
    }
}

fn string_badge(field: &Field<String>) -> PresenceBadge {
    field_badge(field, |text| PresenceBadge::text(text))
}

fn list_badge<T>(field: &Field<Vec<T>>) -> PresenceBadge {
    field_badge(field, |values| PresenceBadge::list(values.len()))
}

/// Summarises the fields of a message that are shown as badges.
///
/// Labels follow local naming, so the awkward fields appear as
/// `display-name` and `with space`.
#[must_use]
pub fn message_badges(message: &LocalMessage) -> Vec<LabelledBadge> {
    let active = message
        .active
        .map_or(PresenceBadge::Null, |flag| PresenceBadge::Scalar(flag.to_string()));
    let tags = message
        .meta
        .as_ref()
        .map_or(PresenceBadge::Missing, |meta| list_badge(&meta.tags));
    let notes = field_badge(&message.notes, |notes| match notes {
        Notes::Text(text) => PresenceBadge::text(text),
        Notes::Structured(_) => PresenceBadge::Object,
    });

    vec![
        LabelledBadge {
            label: "text",
            badge: PresenceBadge::text(&message.text),
        },
        LabelledBadge {
            label: "active",
            badge: active,
        },
        LabelledBadge {
            label: "meta.tags",
            badge: tags,
        },
        LabelledBadge {
            label: "items",
            badge: list_badge(&message.items),
        },
        LabelledBadge {
            label: "binary",
            badge: string_badge(&message.binary_data),
        },
        LabelledBadge {
            label: "notes",
            badge: notes,
        },
        LabelledBadge {
            label: AwkwardKey::DisplayName.local_name(),
            badge: string_badge(message.awkward.get(AwkwardKey::DisplayName)),
        },
        LabelledBadge {
            label: AwkwardKey::WithSpace.local_name(),
            badge: string_badge(message.awkward.get(AwkwardKey::WithSpace)),
        },
    ]
}
