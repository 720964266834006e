//! Engine configuration

use crate::error::GroupingError;
use crate::ledger::LedgerKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grouping engine configuration
///
/// ```toml
/// ledger = "scan"
/// max_items = 500
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Pair ledger used for the co-location check
    pub ledger: LedgerKind,

    /// Upper bound on items accepted by `try_group`
    pub max_items: Option<usize>,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set ledger
    #[inline]
    #[must_use]
    pub fn with_ledger(mut self, ledger: LedgerKind) -> Self {
        self.ledger = ledger;
        self
    }

    /// Set item limit
    #[inline]
    #[must_use]
    pub fn with_max_items(mut self, limit: usize) -> Self {
        self.max_items = Some(limit);
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`GroupingError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, GroupingError> {
        let config: Self = toml::from_str(text)?;
        if config.max_items == Some(0) {
            return Err(GroupingError::Config("max_items must be positive".into()));
        }
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`GroupingError::Io`] if the file cannot be read and
    /// [`GroupingError::Config`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GroupingError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ledger = %config.ledger, "loaded engine config");
        Ok(config)
    }
}
