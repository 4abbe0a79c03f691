//! Currencies and reward tables.

use std::collections::BTreeMap;

use super::refs::ItemRef;

/// Currency kinds tracked in the player's wallet.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CurrencyType {
    /// Common coin earned from battles and quests.
    Gold,
    /// Premium currency.
    Gem,
    /// Crafting/upgrade material tracked as a balance.
    Essence,
}

/// Currency balances keyed by type. Missing entries read as zero.
pub type CurrencyMap = BTreeMap<CurrencyType, i32>;

/// Item quantities keyed by item.
pub type InventoryMap = BTreeMap<ItemRef, u32>;
