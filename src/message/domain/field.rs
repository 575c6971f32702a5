//! Three-state presence for optional wire fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value that distinguishes "not sent", "sent as null" and
/// "sent with a value".
///
/// # Serialisation
///
/// Struct fields of this type must be declared with
/// `#[serde(default, skip_serializing_if = "Field::is_absent")]`:
///
/// - a missing key deserialises through `Default` to [`Field::Absent`] and an
///   absent value is never written;
/// - a JSON `null` round-trips as [`Field::Null`];
/// - any other value round-trips as [`Field::Present`].
///
/// # Examples
///
/// ```
/// use interlace::message::domain::Field;
///
/// let tags: Field<Vec<String>> = Field::from_option(None);
/// assert!(tags.is_null());
/// assert!(Field::<u8>::default().is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The key is omitted entirely.
    Absent,
    /// The key is present with an explicit `null`.
    Null,
    /// The key is present with a value.
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Field<T> {
    /// Maps `None` to [`Field::Null`] and `Some` to [`Field::Present`].
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Present)
    }

    /// Returns `true` for [`Field::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` for [`Field::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Field::Present`].
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the contained value.
    #[must_use]
    pub const fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(value) => Field::Present(value),
        }
    }

    /// Returns the value if present, collapsing absent and null to `None`.
    #[must_use]
    pub const fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Transforms the present value, keeping absent and null untouched.
    #[must_use]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(value) => Field::Present(transform(value)),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}
