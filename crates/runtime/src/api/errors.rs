//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the presentation channel, resolvers, combat setup and
//! repositories so story drivers can bubble them up with consistent context.
use std::fmt;

use game_core::{CombatError, ErrorSeverity, GameError, ResolveError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The presentation layer never produced an answer.
    ///
    /// Aborts the current event or combat session; entity and shield state
    /// stay as last mutated.
    #[error("{request} request cancelled: {reason}")]
    Cancelled {
        request: RequestKind,
        reason: CancelReason,
    },

    #[error("another presentation request is still outstanding")]
    SuspensionPending,

    #[error("choice request needs at least one option")]
    NoChoices,

    #[error("choice {index} is out of range for {count} options")]
    InvalidChoice { index: usize, count: usize },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Severity of the failure; game-core errors keep their own classification.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Resolve(err) => err.severity(),
            Self::Combat(err) => err.severity(),
            Self::Cancelled { .. } | Self::Repository(_) => ErrorSeverity::Recoverable,
            Self::SuspensionPending | Self::NoChoices | Self::InvalidChoice { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Resolve(err) => err.error_code(),
            Self::Combat(err) => err.error_code(),
            Self::Cancelled { .. } => "RUNTIME_CANCELLED",
            Self::SuspensionPending => "RUNTIME_SUSPENSION_PENDING",
            Self::NoChoices => "RUNTIME_NO_CHOICES",
            Self::InvalidChoice { .. } => "RUNTIME_INVALID_CHOICE",
            Self::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}

/// Kind of suspension a story driver asked the presentation layer for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Continue,
    Choice,
    Movement,
    Combat,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestKind::Continue => "continue",
            RequestKind::Choice => "choice",
            RequestKind::Movement => "movement",
            RequestKind::Combat => "combat",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CancelReason {
    /// No answer within `RuntimeConfig::response_timeout`.
    Timeout,
    /// The responder was dropped without answering.
    Dismissed,
    /// The presentation port is gone.
    Disconnected,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CancelReason::Timeout => "timed out",
            CancelReason::Dismissed => "dismissed without an answer",
            CancelReason::Disconnected => "presentation port disconnected",
        };
        write!(f, "{}", label)
    }
}
