//! Error types for couponmix
//!
//! The grouping pass itself is total; errors only come from capacity limits,
//! configuration loading and grouping validation.

use crate::item::ItemId;

/// Grouping error with diagnostics
#[derive(Debug, thiserror::Error)]
pub enum GroupingError {
    /// A produced grouping broke one of its invariants
    #[error("validation failed: {diagnostic}")]
    ValidationFailed {
        /// Detailed diagnostic
        diagnostic: ValidationDiagnostic,
    },

    /// Input is larger than the configured limit
    #[error("capacity exceeded: {items} items (limit {limit})")]
    CapacityExceeded {
        /// Number of items supplied
        items: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GroupingError {
    /// Create validation failed error
    #[inline]
    #[must_use]
    pub fn validation_failed(diagnostic: ValidationDiagnostic) -> Self {
        Self::ValidationFailed { diagnostic }
    }

    /// Violation kind, if this is a validation failure
    #[must_use]
    pub fn violation_kind(&self) -> Option<ViolationKind> {
        match self {
            Self::ValidationFailed { diagnostic } => Some(diagnostic.kind),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for GroupingError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Detailed diagnostic for a grouping violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    /// Kind of violation
    pub kind: ViolationKind,

    /// Items involved
    pub involved_items: Vec<ItemId>,

    /// Offending group, when the violation is local to one
    pub group_index: Option<usize>,

    /// Human-readable description
    pub description: String,
}

impl std::fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.description)
    }
}

/// Types of grouping violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Group without members
    EmptyGroup,

    /// Member index outside the item slice
    UnknownItem,

    /// Same item twice in one group
    DuplicateMember,

    /// Two members of one group share a blocked type
    ForbiddenPair,

    /// Input item missing from every group
    UncoveredItem,

    /// Same pair of items co-occurs in more than one group
    RepeatedPair,
}

impl ViolationKind {
    /// Whether this kind fails validation outright
    #[inline]
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::RepeatedPair)
    }
}
