use canonical::{CanonicalError, NormalizeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::score::MatchScore;

/// Configuration for one batch run.
///
/// Passed explicitly into [`Matcher`](crate::Matcher); nothing in the matching
/// layer reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Inclusive lower bound on the score of a reported match, in `[0, 100]`.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: u8,
    /// Normalization applied to both sources and targets.
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> u8 {
        80
    }

    /// Default normalization with the given threshold.
    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Validate the configuration. Out-of-range thresholds are rejected, never clamped.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.threshold > MatchScore::MAX.get() {
            return Err(MatchError::ThresholdOutOfRange(self.threshold));
        }
        self.normalize.validate()?;
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            normalize: NormalizeConfig::default(),
        }
    }
}

/// One reported match: the source label, its best target and the score.
///
/// `matched` is `None` only when there were no targets to compare against
/// (which can only be reported with threshold 0).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub query: String,
    pub matched: Option<String>,
    pub score: MatchScore,
}

/// Counters describing one batch run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchSummary {
    /// Sources that were matched (missing ones excluded).
    pub sources: usize,
    /// Targets that were compared against (missing ones excluded).
    pub targets: usize,
    /// Missing entries dropped from the source list before matching.
    pub missing_sources: usize,
    /// Missing entries dropped from the target list before matching.
    pub missing_targets: usize,
    /// Sources whose best score met the threshold.
    pub matched: usize,
    /// Sources whose best score fell below the threshold.
    pub below_threshold: usize,
}

/// Results plus counters for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchReport {
    pub results: Vec<MatchResult>,
    pub summary: MatchSummary,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Threshold outside `[0, 100]`.
    #[error("threshold {0} is out of range, expected 0..=100")]
    ThresholdOutOfRange(u8),
    /// A score value outside `[0, 100]`.
    #[error("score {0} is out of range, expected 0..=100")]
    ScoreOutOfRange(u8),
    /// Normalization config rejected.
    #[error("invalid normalization config: {0}")]
    Normalize(#[from] CanonicalError),
}
