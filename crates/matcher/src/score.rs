use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Similarity score on the 0–100 scale.
///
/// 100 means the canonical forms are identical under the token-set scheme,
/// 0 means no similarity (or no comparable content on one side).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MIN: MatchScore = MatchScore(0);
    pub const MAX: MatchScore = MatchScore(100);

    /// Returns `None` for values above 100.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 {
            Some(MatchScore(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Converts a similarity ratio in `[0.0, 1.0]` to a percentage.
    ///
    /// Halves round to even (12.5 → 12, 37.5 → 38) so scores agree with the
    /// reference matcher on every pair.
    pub(crate) fn from_ratio(ratio: f64) -> Self {
        let percent = (100.0 * ratio).round_ties_even().clamp(0.0, 100.0);
        MatchScore(percent as u8)
    }
}

impl TryFrom<u8> for MatchScore {
    type Error = MatchError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MatchScore::new(value).ok_or(MatchError::ScoreOutOfRange(value))
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
