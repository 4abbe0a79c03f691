//! Typed references into persisted game data.
//!
//! Each reference is an opaque key. Resolving a key against storage is the
//! business of a [`GameStateView`](crate::state::GameStateView) implementation.

use std::fmt;

macro_rules! string_ref {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_ref!(
    /// Saved numeric variable written by story scripts.
    VariableRef
);
string_ref!(
    /// Inventory item definition.
    ItemRef
);
string_ref!(
    /// Player title (achievement-style unlock).
    TitleRef
);
string_ref!(
    /// Quest definition.
    QuestRef
);
string_ref!(
    /// Saved boolean switch written by story scripts.
    SwitchRef
);
string_ref!(
    /// Skill (function) definition an entity can equip.
    SkillId
);
