//! Contract between story playback and the presentation layer.
use async_trait::async_trait;
use game_core::{EffectEvent, Encounter};

use super::errors::Result;

/// Suspension points a story driver hands to the UI.
///
/// Each `wait_*` call suspends until the presentation layer answers. Callers
/// must not overlap two suspensions on the same callback; implementations may
/// reject an overlapping call with `RuntimeError::SuspensionPending`.
///
/// If no answer ever arrives the call must fail with
/// `RuntimeError::Cancelled` rather than hang.
#[async_trait]
pub trait EventCallback: Send + Sync {
    /// Wait for the player to acknowledge and continue.
    async fn wait_for_continue(&self) -> Result<()>;

    /// Present `choices` and return the index the player picked.
    async fn wait_for_choice(&self, choices: Vec<String>) -> Result<usize>;

    /// Wait for a movement or transition animation to finish.
    async fn wait_for_movement(&self) -> Result<()>;

    /// Hand an encounter to the combat screen; returns whether the player won.
    async fn wait_for_combat(&self, encounter: Encounter) -> Result<bool>;

    /// Deliver a finished effect for rendering. Never suspends.
    fn deliver_effect(&self, effect: EffectEvent);
}
