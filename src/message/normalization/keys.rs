//! Field-name translation between local and wire naming conventions.
//!
//! A single static table pairs every awkward local key with its wire
//! counterpart. Keys outside the table translate to themselves. The typed
//! message shapes serialise their awkward fields through [`wire_naming`] and
//! [`local_naming`], which read the same table, so no key literal for these
//! fields exists anywhere else in the crate.

use crate::message::domain::{AwkwardFields, Field};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A field whose name follows a different convention on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AwkwardKey {
    /// Reserved word: `class` locally, `_class` on the wire.
    Class,
    /// Kebab case: `display-name` locally, `displayName` on the wire.
    DisplayName,
    /// Literal space: `with space` locally, `withSpace` on the wire.
    WithSpace,
    /// Snake case: `snake_case` locally, `snakeCase` on the wire.
    SnakeCase,
    /// Camel case on both sides.
    CamelCase,
}

struct KeyPair {
    key: AwkwardKey,
    local: &'static str,
    wire: &'static str,
}

// Rows follow `AwkwardKey` discriminant order.
static KEY_TABLE: [KeyPair; 5] = [
    KeyPair {
        key: AwkwardKey::Class,
        local: "class",
        wire: "_class",
    },
    KeyPair {
        key: AwkwardKey::DisplayName,
        local: "display-name",
        wire: "displayName",
    },
    KeyPair {
        key: AwkwardKey::WithSpace,
        local: "with space",
        wire: "withSpace",
    },
    KeyPair {
        key: AwkwardKey::SnakeCase,
        local: "snake_case",
        wire: "snakeCase",
    },
    KeyPair {
        key: AwkwardKey::CamelCase,
        local: "camelCase",
        wire: "camelCase",
    },
];

impl AwkwardKey {
    /// Every awkward key in table order.
    pub const ALL: [Self; 5] = [
        Self::Class,
        Self::DisplayName,
        Self::WithSpace,
        Self::SnakeCase,
        Self::CamelCase,
    ];

    #[expect(
        clippy::indexing_slicing,
        reason = "table rows are declared in discriminant order"
    )]
    fn pair(self) -> &'static KeyPair {
        &KEY_TABLE[self as usize]
    }

    /// Returns the local (editable) name.
    #[must_use]
    pub fn local_name(self) -> &'static str {
        self.pair().local
    }

    /// Returns the wire (schema) name.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        self.pair().wire
    }

    /// Looks up the key with the given local name.
    #[must_use]
    pub fn from_local(name: &str) -> Option<Self> {
        KEY_TABLE
            .iter()
            .find(|pair| pair.local == name)
            .map(|pair| pair.key)
    }

    /// Looks up the key with the given wire name.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        KEY_TABLE
            .iter()
            .find(|pair| pair.wire == name)
            .map(|pair| pair.key)
    }
}

/// Translates a local key to its wire name; other keys map to themselves.
///
/// # Examples
///
/// ```
/// use interlace::message::normalization::keys::{to_local_key, to_wire_key};
///
/// assert_eq!(to_wire_key("with space"), "withSpace");
/// assert_eq!(to_local_key("withSpace"), "with space");
/// assert_eq!(to_wire_key("createdAt"), "createdAt");
/// ```
#[must_use]
pub fn to_wire_key(local_key: &str) -> &str {
    AwkwardKey::from_local(local_key).map_or(local_key, |key| key.wire_name())
}

/// Translates a wire key to its local name; other keys map to themselves.
#[must_use]
pub fn to_local_key(wire_key: &str) -> &str {
    AwkwardKey::from_wire(wire_key).map_or(wire_key, |key| key.local_name())
}

/// The naming convention a key set follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNaming {
    /// Local editable names.
    Local,
    /// Wire schema names.
    Wire,
}

impl KeyNaming {
    /// Returns the name of `key` under this convention.
    #[must_use]
    pub fn name(self, key: AwkwardKey) -> &'static str {
        match self {
            Self::Local => key.local_name(),
            Self::Wire => key.wire_name(),
        }
    }

    /// Resolves a name under this convention to its awkward key.
    #[must_use]
    pub fn resolve(self, name: &str) -> Option<AwkwardKey> {
        match self {
            Self::Local => AwkwardKey::from_local(name),
            Self::Wire => AwkwardKey::from_wire(name),
        }
    }

    /// Translates any key into this convention.
    #[must_use]
    pub fn translate(self, key: &str) -> &str {
        match self {
            Self::Local => to_local_key(key),
            Self::Wire => to_wire_key(key),
        }
    }
}

/// Rewrites the top-level keys of a JSON object into `target` naming.
///
/// When both spellings of a key are present, the one already in `target`
/// naming wins. Nested objects are left untouched; awkward keys only occur
/// at the top level of a message.
#[must_use]
pub fn rename_keys(object: Map<String, Value>, target: KeyNaming) -> Map<String, Value> {
    let mut renamed = Map::with_capacity(object.len());
    for (key, value) in object {
        let translated = target.translate(&key);
        if translated == key {
            renamed.insert(key, value);
        } else {
            renamed.entry(translated.to_owned()).or_insert(value);
        }
    }
    renamed
}

fn serialize_fields<S: Serializer>(
    fields: &AwkwardFields,
    naming: KeyNaming,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let written = AwkwardKey::ALL
        .iter()
        .filter(|key| !fields.get(**key).is_absent())
        .count();
    let mut map = serializer.serialize_map(Some(written))?;
    for key in AwkwardKey::ALL {
        let field = fields.get(key);
        if !field.is_absent() {
            map.serialize_entry(naming.name(key), field)?;
        }
    }
    map.end()
}

struct AwkwardVisitor {
    naming: KeyNaming,
}

impl<'de> Visitor<'de> for AwkwardVisitor {
    type Value = AwkwardFields;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of awkward string fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut fields = AwkwardFields::default();
        while let Some(name) = map.next_key::<String>()? {
            match self.naming.resolve(&name) {
                Some(key) => *fields.get_mut(key) = map.next_value::<Field<String>>()?,
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(fields)
    }
}

fn deserialize_fields<'de, D: Deserializer<'de>>(
    naming: KeyNaming,
    deserializer: D,
) -> Result<AwkwardFields, D::Error> {
    deserializer.deserialize_map(AwkwardVisitor { naming })
}

/// Serde adapter writing [`AwkwardFields`] under wire names.
///
/// Use with `#[serde(flatten, with = "wire_naming")]`.
pub mod wire_naming {
    use super::{AwkwardFields, Deserializer, KeyNaming, Serializer};

    /// Serialises the fields under wire names, omitting absent ones.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(fields: &AwkwardFields, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_fields(fields, KeyNaming::Wire, serializer)
    }

    /// Deserialises the fields from wire names, ignoring other keys.
    ///
    /// # Errors
    ///
    /// Returns an error when an awkward field holds a non-string value.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AwkwardFields, D::Error> {
        super::deserialize_fields(KeyNaming::Wire, deserializer)
    }
}

/// Serde adapter writing [`AwkwardFields`] under local names.
///
/// Use with `#[serde(flatten, with = "local_naming")]`.
pub mod local_naming {
    use super::{AwkwardFields, Deserializer, KeyNaming, Serializer};

    /// Serialises the fields under local names, omitting absent ones.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(fields: &AwkwardFields, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_fields(fields, KeyNaming::Local, serializer)
    }

    /// Deserialises the fields from local names, ignoring other keys.
    ///
    /// # Errors
    ///
    /// Returns an error when an awkward field holds a non-string value.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AwkwardFields, D::Error> {
        super::deserialize_fields(KeyNaming::Local, deserializer)
    }
}
