//! Typed settings keys.

use serde::{Deserialize, Serialize};

/// A setting name paired with its value type and declared default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingKey<T> {
    name: &'static str,
    default: T,
}

impl<T> SettingKey<T> {
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}

/// Raw change notification published by a settings store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingChange {
    pub name: String,
    pub value: serde_json::Value,
}
