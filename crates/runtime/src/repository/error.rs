//! Error types raised by repository implementations.

use thiserror::Error;

use super::types::SaveSlot;

/// Errors surfaced by the persistence boundary.
///
/// All of these are recoverable from the story driver's point of view;
/// stores never retry on their own.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("save slot {0} is out of range")]
    InvalidSlot(u8),

    #[error("save slot {0} is empty")]
    EmptySlot(SaveSlot),

    #[error("no save slot is loaded")]
    NoActiveSlot,

    #[error("settings store closed its change stream")]
    WatchClosed,
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
