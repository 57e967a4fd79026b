//! Pagination window configuration
//!
//! Configuration is plain serde data so it can be embedded in a larger
//! settings document or loaded on its own with [`PaginationConfig::from_json`].

use crate::errors::{PaginationError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound for `siblings` and `boundaries`.
pub const MAX_WINDOW: u32 = 1_000;

/// What to do with an active page that falls outside `1..=total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivePolicy {
    /// Forward the page untouched. The predecessor insertion silently
    /// becomes a no-op when the page is not in the computed range.
    #[default]
    PassThrough,
    /// Clamp into `1..=max(total, 1)`.
    Clamp,
    /// Fail with [`PaginationError::ActiveOutOfRange`].
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page numbers shown on each side of the active page
    pub siblings: u32,
    /// Page numbers always pinned at each end
    pub boundaries: u32,
    pub active_policy: ActivePolicy,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            siblings: 1,
            boundaries: 1,
            active_policy: ActivePolicy::PassThrough,
        }
    }
}

impl PaginationConfig {
    pub fn new(siblings: u32, boundaries: u32) -> Self {
        Self {
            siblings,
            boundaries,
            ..Self::default()
        }
    }

    pub fn with_active_policy(mut self, policy: ActivePolicy) -> Self {
        self.active_policy = policy;
        self
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: PaginationConfig = serde_json::from_str(source)
            .map_err(|e| PaginationError::ConfigError(format!("Invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.siblings > MAX_WINDOW {
            return Err(PaginationError::ConfigError(format!(
                "siblings must be at most {MAX_WINDOW}, got {}",
                self.siblings
            )));
        }
        if self.boundaries > MAX_WINDOW {
            return Err(PaginationError::ConfigError(format!(
                "boundaries must be at most {MAX_WINDOW}, got {}",
                self.boundaries
            )));
        }
        Ok(())
    }
}
