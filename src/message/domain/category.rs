//! Message category enumeration shared by both naming conventions.

use crate::message::error::ParseSelectorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed category symbol set of the wire schema.
///
/// # Examples
///
/// ```
/// use interlace::message::domain::Category;
///
/// assert_eq!(Category::try_from("C"), Ok(Category::C));
/// assert_eq!(Category::B.as_str(), "B");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Category `A`.
    #[default]
    A,
    /// Category `B`.
    B,
    /// Category `C`.
    C,
    /// Category `D`.
    D,
}

impl Category {
    /// Every category in schema order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Returns the wire symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseSelectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| ParseSelectorError::new("category", value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
