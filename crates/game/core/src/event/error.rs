//! Event resolution errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur while resolving an event value or condition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolveError {
    /// The branch exists in the script model but has no lookup behind it yet.
    #[error("not implemented: {feature}")]
    NotImplemented { feature: String },

    /// A random range whose start lies above its end.
    #[error("empty random range {start}..={end}")]
    InvalidRange { start: i32, end: i32 },
}

impl ResolveError {
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }

    /// Returns true for the distinct "unimplemented" failure kind.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

impl GameError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotImplemented { .. } => ErrorSeverity::Internal,
            Self::InvalidRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotImplemented { .. } => "RESOLVE_NOT_IMPLEMENTED",
            Self::InvalidRange { .. } => "RESOLVE_INVALID_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unimplemented_lookups_are_internal() {
        let err = ResolveError::not_implemented("saved variable `gate_open`");
        assert!(err.is_not_implemented());
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "RESOLVE_NOT_IMPLEMENTED");
    }

    #[test]
    fn inverted_range_is_a_validation_error() {
        let err = ResolveError::InvalidRange { start: 5, end: 1 };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.severity().as_str(), "validation");
        assert_eq!(err.error_code(), "RESOLVE_INVALID_RANGE");
    }
}
