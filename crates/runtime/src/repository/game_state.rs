//! Live player state backed by a save slot.

use std::sync::{Arc, PoisonError, RwLock};

use game_core::{CurrencyMap, CurrencyType, GameStateView};

use super::error::{RepositoryError, Result};
use super::traits::SaveSlotStore;
use super::types::{SaveField, SaveSlot};

/// Currency balances of the loaded save, readable by the resolvers.
///
/// Mutations stay in memory until [`GameStateRepository::flush`] writes them
/// back to the slot they were loaded from.
pub struct GameStateRepository {
    store: Arc<dyn SaveSlotStore>,
    slot: RwLock<Option<SaveSlot>>,
    currencies: RwLock<CurrencyMap>,
}

impl GameStateRepository {
    pub fn new(store: Arc<dyn SaveSlotStore>) -> Self {
        Self {
            store,
            slot: RwLock::new(None),
            currencies: RwLock::new(CurrencyMap::new()),
        }
    }

    /// Slot the current state was loaded from.
    pub fn slot(&self) -> Option<SaveSlot> {
        *self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the in-memory state with the contents of `slot`.
    ///
    /// An empty slot loads as a fresh state with no balances.
    pub async fn load(&self, slot: SaveSlot) -> Result<()> {
        let currencies = self
            .store
            .query(slot)
            .await?
            .map(|record| record.currencies)
            .unwrap_or_default();

        *self
            .currencies
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)? = currencies;
        *self.slot.write().map_err(|_| RepositoryError::LockPoisoned)? = Some(slot);

        tracing::info!(%slot, "game state loaded");
        Ok(())
    }

    /// Persist balances to the loaded slot.
    pub async fn flush(&self) -> Result<()> {
        let slot = self.slot().ok_or(RepositoryError::NoActiveSlot)?;
        let currencies = self.currencies()?;

        self.store
            .update(slot, SaveField::Currencies(currencies))
            .await?;

        tracing::info!(%slot, "game state flushed");
        Ok(())
    }

    /// Snapshot of every recorded balance.
    pub fn currencies(&self) -> Result<CurrencyMap> {
        self.currencies
            .read()
            .map(|currencies| currencies.clone())
            .map_err(|_| RepositoryError::LockPoisoned)
    }

    pub fn balance(&self, kind: CurrencyType) -> i32 {
        self.currency(kind).unwrap_or(0)
    }

    pub fn set_balance(&self, kind: CurrencyType, amount: i32) -> Result<()> {
        self.currencies
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .insert(kind, amount);
        Ok(())
    }

    /// Adds `delta` (saturating) and returns the new balance.
    pub fn adjust_balance(&self, kind: CurrencyType, delta: i32) -> Result<i32> {
        let mut currencies = self
            .currencies
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let balance = currencies.entry(kind).or_insert(0);
        *balance = balance.saturating_add(delta);
        Ok(*balance)
    }
}

impl GameStateView for GameStateRepository {
    fn currency(&self, kind: CurrencyType) -> Option<i32> {
        self.currencies
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .copied()
    }
}

impl std::fmt::Debug for GameStateRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStateRepository")
            .field("slot", &self.slot())
            .finish_non_exhaustive()
    }
}
