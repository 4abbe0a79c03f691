//! Completed effects handed to the presentation layer.

use crate::state::EntityId;

/// An effect that has already been applied to game state.
///
/// Effects are fire-and-continue: delivering one never suspends playback.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectEvent {
    /// HP damage after shields absorbed their share.
    Damage {
        source: EntityId,
        target: EntityId,
        amount: u32,
        absorbed: u32,
        critical: bool,
    },

    /// An attack that failed its hit or evasion roll.
    Miss { source: EntityId, target: EntityId },

    /// HP restored.
    Heal { target: EntityId, amount: u32 },

    /// A shield was attached to the target.
    ShieldGranted {
        target: EntityId,
        value: u32,
        turns: Option<u32>,
    },

    /// One or more shields on the target ran out of turns or value.
    ShieldExpired { target: EntityId, count: usize },

    /// A line of dialogue to show.
    Dialogue {
        speaker: Option<String>,
        text: String,
    },
}

impl EffectEvent {
    pub fn dialogue(speaker: Option<&str>, text: impl Into<String>) -> Self {
        Self::Dialogue {
            speaker: speaker.map(str::to_owned),
            text: text.into(),
        }
    }
}
