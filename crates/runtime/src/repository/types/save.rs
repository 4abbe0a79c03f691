//! Save-slot rows.

use std::fmt;

use chrono::{DateTime, Utc};
use game_core::{CurrencyMap, CurrencyType, EventLocation, GameConfig, Team, TeamId};
use serde::{Deserialize, Serialize};

use crate::repository::RepositoryError;

/// Index of one of the `MAX_SAVE_SLOTS` save rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SaveSlot(u8);

impl SaveSlot {
    pub fn new(index: u8) -> Result<Self, RepositoryError> {
        if (index as usize) < GameConfig::MAX_SAVE_SLOTS {
            Ok(Self(index))
        } else {
            Err(RepositoryError::InvalidSlot(index))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Every valid slot in ascending order.
    pub fn all() -> impl Iterator<Item = SaveSlot> {
        (0..GameConfig::MAX_SAVE_SLOTS as u8).map(SaveSlot)
    }
}

impl TryFrom<u8> for SaveSlot {
    type Error = RepositoryError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<SaveSlot> for u8 {
    fn from(slot: SaveSlot) -> Self {
        slot.0
    }
}

impl fmt::Display for SaveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One persisted save row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub slot: SaveSlot,
    pub player_name: String,
    pub play_time_secs: u64,
    pub currencies: CurrencyMap,
    pub teams: Vec<Team>,
    pub active_team: Option<TeamId>,
    pub location: Option<EventLocation>,
    pub updated_at: DateTime<Utc>,
}

impl SaveRecord {
    pub fn new(slot: SaveSlot) -> Self {
        Self {
            slot,
            player_name: String::new(),
            play_time_secs: 0,
            currencies: CurrencyMap::new(),
            teams: Vec::new(),
            active_team: None,
            location: None,
            updated_at: Utc::now(),
        }
    }

    /// Writes one field and stamps `updated_at`.
    pub fn apply(&mut self, field: SaveField) {
        match field {
            SaveField::PlayerName(name) => self.player_name = name,
            SaveField::PlayTime(secs) => self.play_time_secs = secs,
            SaveField::Currencies(currencies) => self.currencies = currencies,
            SaveField::Currency { kind, amount } => {
                self.currencies.insert(kind, amount);
            }
            SaveField::Teams(teams) => self.teams = teams,
            SaveField::ActiveTeam(team) => self.active_team = team,
            SaveField::Location(location) => self.location = location,
        }
        self.updated_at = Utc::now();
    }
}

/// A single-column update against a save row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SaveField {
    PlayerName(String),
    PlayTime(u64),
    Currencies(CurrencyMap),
    Currency { kind: CurrencyType, amount: i32 },
    Teams(Vec<Team>),
    ActiveTeam(Option<TeamId>),
    Location(Option<EventLocation>),
}
