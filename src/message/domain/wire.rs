//! The schema-generated wire representation exchanged with the services.

use super::{AwkwardFields, Category, Field, LineItem, Meta, Notes};
use crate::message::normalization::keys::wire_naming;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A message as it crosses the service boundary.
///
/// Absent fields are omitted from the JSON object, explicit nulls are written
/// as `null`, and present values are written as-is. `active` is always
/// written; an inbound object without it reads as `null`.
///
/// # Examples
///
/// ```
/// use interlace::message::domain::{Category, Field, WireMessage};
/// use chrono::{TimeZone, Utc};
///
/// let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid instant");
/// let mut message = WireMessage::new(7, "hello", created_at, Category::B);
/// message.items = Field::Null;
///
/// let json = serde_json::to_value(&message).expect("serialise");
/// assert!(json["items"].is_null());
/// assert!(json.get("notes").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    /// Integer identifier.
    pub id: i64,

    /// Message text; may be empty.
    pub text: String,

    /// Creation instant.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Calendar date, absent when not supplied.
    #[serde(rename = "dateOnly", default, skip_serializing_if = "Option::is_none")]
    pub date_only: Option<NaiveDate>,

    /// Tri-state flag: `true`, `false` or `null`.
    #[serde(default)]
    pub active: Option<bool>,

    /// Decimal price, absent when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Decimal ratio, absent when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,

    /// String identifier, absent when not supplied.
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

    /// Naming-edge string fields, keyed by their wire names.
    #[serde(flatten, with = "wire_naming")]
    pub awkward: AwkwardFields,
}

impl WireMessage {
    /// Creates a message with only the required fields set.
    #[must_use]
    pub fn new(
        id: i64,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
        category: Category,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            created_at,
            date_only: None,
            active: None,
            price: None,
            ratio: None,
            uuid: None,
            category,
            meta: None,
            items: Field::Absent,
            notes: Field::Absent,
            binary_data: Field::Absent,
            binary_filename: None,
            awkward: AwkwardFields::default(),
        }
    }
}
