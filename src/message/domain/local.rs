//! The local display representation of a message.

use super::{AwkwardFields, Category, Field, LineItem, Meta, Notes};
use crate::message::normalization::keys::local_naming;
use serde::{Deserialize, Serialize};

/// A message under local naming, with temporal fields held as text.
///
/// This is what the rendering collaborator displays and what the payload
/// preview serialises. Presence semantics match [`super::WireMessage`]
/// field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalMessage {
    /// Integer identifier.
    pub id: i64,

    /// Message text; may be empty.
    pub text: String,

    /// Creation instant as ISO-8601 text.
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Calendar date as `YYYY-MM-DD`, or empty when absent.
    #[serde(rename = "dateOnly", default)]
    pub date_only: String,

    /// Tri-state flag.
    #[serde(default)]
    pub active: Option<bool>,

    /// Decimal price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Decimal ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,

    /// String identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Message category.
    pub category: Category,

    /// Tag and metric bag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Line items.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub items: Field<Vec<LineItem>>,

    /// Polymorphic notes.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub notes: Field<Notes>,

    /// Base64 payload.
    #[serde(rename = "binaryData", default, skip_serializing_if = "Field::is_absent")]
    pub binary_data: Field<String>,

    /// Name of the file the payload was read from.
    #[serde(rename = "binaryFilename", default, skip_serializing_if = "Option::is_none")]
    pub binary_filename: Option<String>,

    /// Naming-edge string fields, keyed by their local names.
    #[serde(flatten, with = "local_naming")]
    pub awkward: AwkwardFields,
}
