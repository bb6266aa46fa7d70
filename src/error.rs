//! Failure classification shared by all use-cases.
//!
//! Each service defines its own error enum so callers can match on the exact
//! cause. [`FailureKind`] collapses those enums into the small taxonomy a
//! transport layer needs when choosing a user-facing response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of a use-case failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An entity invariant was violated during construction.
    Validation,
    /// A referenced project or task does not exist.
    NotFound,
    /// A project name or task title is already taken.
    Duplicate,
    /// A status-gated action was rejected.
    BusinessRule,
    /// The storage layer failed for reasons unrelated to the request.
    Persistence,
}

impl FailureKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Duplicate => "duplicate",
            Self::BusinessRule => "business_rule",
            Self::Persistence => "persistence",
        }
    }

    /// Returns `true` when the failure was caused by the request itself
    /// rather than by the storage layer.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        !matches!(self, Self::Persistence)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
