//! Raw form state: text inputs plus discrete mode selectors.
//!
//! Every value here is exactly what a text input or selector holds. Nothing is
//! parsed until the payload assembler runs.

use super::Category;
use crate::message::error::ParseSelectorError;
use std::fmt;

/// Selector for list-valued fields (`meta.tags`, `items`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListMode {
    /// Parse the staged text or rows.
    #[default]
    Values,
    /// Send an empty list whatever is staged.
    Empty,
    /// Send an explicit `null` whatever is staged.
    Null,
}

/// Selector for the polymorphic notes field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotesMode {
    /// Send the plain string.
    #[default]
    Text,
    /// Send the `{comment}` object.
    Object,
    /// Send an explicit `null`.
    Null,
}

/// Selector for the tri-state `active` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveMode {
    /// `true`.
    #[default]
    True,
    /// `false`.
    False,
    /// Explicit `null`.
    Null,
}

macro_rules! selector_strings {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the selector option value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = ParseSelectorError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ParseSelectorError::new($kind, value)),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

selector_strings!(ListMode, "list mode", {
    Values => "values",
    Empty => "empty",
    Null => "null",
});

selector_strings!(NotesMode, "notes mode", {
    Text => "string",
    Object => "object",
    Null => "null",
});

selector_strings!(ActiveMode, "active mode", {
    True => "true",
    False => "false",
    Null => "null",
});

/// One editable line-item row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRow {
    /// Item code text.
    pub code: String,
    /// Quantity text.
    pub quantity: String,
    /// Weight text.
    pub weight: String,
}

impl ItemRow {
    /// Creates a row from its three inputs.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        quantity: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            quantity: quantity.into(),
            weight: weight.into(),
        }
    }

    /// Creates an empty row, as offered after clearing the list.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }
}

/// Inputs for the `meta` composite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaDraft {
    /// Locale text; empty means absent.
    pub locale: String,
    /// Tag selector.
    pub tags_mode: ListMode,
    /// Comma-separated tags.
    pub tags_text: String,
    /// Newline-separated `key:value` metric lines.
    pub metrics_text: String,
}

/// Inputs for the `items` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsDraft {
    /// List selector.
    pub mode: ListMode,
    /// Editable rows.
    pub rows: Vec<ItemRow>,
}

/// Inputs for the `notes` field.
///
/// Both texts are kept so switching the selector does not lose either one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesDraft {
    /// Shape selector.
    pub mode: NotesMode,
    /// Plain string text.
    pub text: String,
    /// Structured comment text.
    pub comment: String,
}

/// Staged binary attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryDraft {
    /// Base64 text, sent verbatim.
    pub text: String,
    /// Source filename; empty means absent.
    pub filename: String,
    /// Sends an explicit `null`, overriding the staged text and filename.
    pub null: bool,
}

/// The naming-edge string inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwkwardDraft {
    /// Reserved-word field.
    pub class: String,
    /// Hyphenated field.
    pub display_name: String,
    /// Space-containing field.
    pub with_space: String,
    /// Snake-case field.
    pub snake_case: String,
    /// Camel-case field.
    pub camel_case: String,
}

/// The complete editable state of one outbound message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Identifier text.
    pub id: String,
    /// Message text.
    pub text: String,
    /// ISO-8601 timestamp text.
    pub created_at: String,
    /// `YYYY-MM-DD` text.
    pub date_only: String,
    /// `active` selector.
    pub active: ActiveMode,
    /// Price text.
    pub price: String,
    /// Ratio text.
    pub ratio: String,
    /// UUID text.
    pub uuid: String,
    /// Selected category.
    pub category: Category,
    /// `meta` inputs.
    pub meta: MetaDraft,
    /// `items` inputs.
    pub items: ItemsDraft,
    /// `notes` inputs.
    pub notes: NotesDraft,
    /// Binary attachment inputs.
    pub binary: BinaryDraft,
    /// Naming-edge string inputs.
    pub awkward: AwkwardDraft,
}
