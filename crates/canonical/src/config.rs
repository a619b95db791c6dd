//! Configuration types for label normalization.
//!
//! [`NormalizeConfig`] only exposes what may legitimately vary between
//! deployments. The character-class policy (`[a-z0-9 ]`, single spaces) is
//! fixed: changing it would change every score the matcher produces.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change to normalization
//! output, even a bug fix, must come with a version bump so stored match
//! reports can be traced back to the rules that produced them.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{Decomposition, NormalizeConfig};
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.decomposition, Decomposition::Compatibility);
//!
//! let strict = NormalizeConfig {
//!     decomposition: Decomposition::Canonical,
//!     ..Default::default()
//! };
//! assert!(strict.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Unicode decomposition applied before combining marks are dropped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Decomposition {
    /// NFKD. Also folds compatibility characters: "ﬁ" → "fi", "²" → "2", "º" → "o".
    #[default]
    Compatibility,
    /// NFD. Only canonical equivalents are decomposed; compatibility characters
    /// survive decomposition and are then removed as symbols.
    Canonical,
}

/// Configuration for the label normalizer.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs (see `MatchConfig` in the matcher crate).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Behavior version. Must be >= 1; version 0 is reserved.
    pub version: u32,

    /// Decomposition used to split accented letters into base + marks.
    ///
    /// Defaults to [`Decomposition::Compatibility`].
    #[serde(default)]
    pub decomposition: Decomposition,
}

impl NormalizeConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            decomposition: Decomposition::Compatibility,
        }
    }
}
