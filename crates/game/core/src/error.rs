//! Error classification shared by the resolver and combat errors.
//!
//! Each subsystem keeps its own `thiserror` enum next to the code that raises
//! it; [`GameError`] gives callers a uniform way to decide how loudly to
//! report a failure.

/// How a caller should treat a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The current state rejected the request; another input may succeed.
    Recoverable,
    /// The request itself is malformed (empty range, oversized roster).
    Validation,
    /// A code path has no implementation behind it yet.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Severity and stable code for a game-core error variant.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier, used in logs and assertions.
    fn error_code(&self) -> &'static str;
}
