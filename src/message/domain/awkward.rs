//! String fields whose names differ between local and wire conventions.

use super::Field;
use crate::message::normalization::keys::AwkwardKey;

/// Values of the naming-edge string fields.
///
/// The record carries no key names of its own. Both message shapes embed it
/// with `#[serde(flatten)]` through a naming module from
/// [`crate::message::normalization::keys`], so every key is written and read
/// from the single translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwkwardFields {
    /// Field named after a reserved word.
    pub class: Field<String>,
    /// Hyphenated field.
    pub display_name: Field<String>,
    /// Field whose local name contains a space.
    pub with_space: Field<String>,
    /// Field whose local name is snake case.
    pub snake_case: Field<String>,
    /// Field named in camel case under both conventions.
    pub camel_case: Field<String>,
}

impl AwkwardFields {
    /// Returns the value stored for `key`.
    #[must_use]
    pub const fn get(&self, key: AwkwardKey) -> &Field<String> {
        match key {
            AwkwardKey::Class => &self.class,
            AwkwardKey::DisplayName => &self.display_name,
            AwkwardKey::WithSpace => &self.with_space,
            AwkwardKey::SnakeCase => &self.snake_case,
            AwkwardKey::CamelCase => &self.camel_case,
        }
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub const fn get_mut(&mut self, key: AwkwardKey) -> &mut Field<String> {
        match key {
            AwkwardKey::Class => &mut self.class,
            AwkwardKey::DisplayName => &mut self.display_name,
            AwkwardKey::WithSpace => &mut self.with_space,
            AwkwardKey::SnakeCase => &mut self.snake_case,
            AwkwardKey::CamelCase => &mut self.camel_case,
        }
    }

    /// Sets `key` to a present value.
    #[must_use]
    pub fn with(mut self, key: AwkwardKey, value: impl Into<String>) -> Self {
        *self.get_mut(key) = Field::Present(value.into());
        self
    }
}
