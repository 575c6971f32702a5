//! Compound sub-objects carried by a message.
//!
//! These shapes are identical under local and wire naming, so both
//! [`super::LocalMessage`] and [`super::WireMessage`] embed them directly.

use super::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The tag and metric bag.
///
/// `locale` and `metrics` are either absent or present; an inbound `null`
/// reads as absent. `tags` is fully three-state: an empty list and `null` are
/// different values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Locale tag such as `en-US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tags: Field<Vec<String>>,

    /// Named numeric measurements, ordered by key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<BTreeMap<String, f64>>,
}

/// A single line item.
///
/// # Examples
///
/// ```
/// use interlace::message::domain::LineItem;
///
/// let item = LineItem::new("SKU-1").with_weight(0.25);
/// assert_eq!(item.quantity, None);
/// assert_eq!(item.weight, Some(0.25));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item code; never empty in outbound payloads.
    pub code: String,

    /// Quantity, absent when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Weight, absent when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl LineItem {
    /// Creates a line item with no quantity or weight.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            quantity: None,
            weight: None,
        }
    }

    /// Sets the quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Polymorphic notes: a plain string or a structured comment object.
///
/// # Serialisation
///
/// Notes are untagged; the JSON type selects the variant:
///
/// ```json
/// "Plain string note"
/// { "comment": "Nested comment note" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Notes {
    /// A plain string note.
    Text(String),
    /// A structured comment object.
    Structured(NotesComment),
}

/// The object branch of [`Notes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesComment {
    /// The comment text; three-state like any other nullable field.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub comment: Field<String>,
}

impl NotesComment {
    /// Creates a structured note with the given comment.
    #[must_use]
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: Field::Present(comment.into()),
        }
    }
}
