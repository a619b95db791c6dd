//! Workspace umbrella crate for sheetmatch.
//!
//! This crate ties label normalization (`canonical`) and fuzzy matching
//! (`matcher`) to delimited files: load one column from each table, match
//! every source label against the target column, and export the pairs that
//! reach the threshold.

pub mod config;
pub mod error;
pub mod table;

pub use canonical::{
    CanonicalError, CanonicalLabel, Decomposition, NormalizeConfig, RawLabel, collapse_whitespace,
    normalize, normalize_str, normalize_with,
};
pub use config::{
    ConfigLoadError, InputYamlConfig, MatcherYamlConfig, OutputFormat, OutputYamlConfig,
    SheetmatchConfig,
};
pub use error::SheetmatchError;
pub use matcher::{
    BestMatch, MatchConfig, MatchError, MatchMetrics, MatchReport, MatchResult, MatchScore,
    MatchSummary, Matcher, MatchingBlock, ProgressObserver, fraction, match_all, matching_blocks,
    ratio, score, select_best, select_best_with, set_match_metrics, token_set_ratio,
};
pub use table::{TableOptions, list_columns, load_column, write_csv, write_json};

use std::path::PathBuf;

use tracing::{info, warn};

/// One column of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub path: PathBuf,
    pub column: String,
}

impl ColumnRef {
    pub fn new(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            column: column.into(),
        }
    }
}

/// Load both columns and match source against target.
///
/// Column loading errors surface before any matching starts.
pub fn match_columns(
    source: &ColumnRef,
    target: &ColumnRef,
    config: &SheetmatchConfig,
    observer: &mut dyn ProgressObserver,
) -> Result<MatchReport, SheetmatchError> {
    let matcher = Matcher::new(config.match_config())?;
    let opts = TableOptions {
        delimiter: config.input.delimiter_byte(),
    };

    let sources = load_column(&source.path, &source.column, &opts)?;
    let targets = load_column(&target.path, &target.column, &opts)?;

    let report = matcher.run(&sources, &targets, observer);
    if report.results.is_empty() {
        warn!(
            threshold = matcher.config().threshold,
            sources = report.summary.sources,
            "no matches at or above threshold"
        );
    } else {
        info!(
            matched = report.summary.matched,
            sources = report.summary.sources,
            "matching finished"
        );
    }
    Ok(report)
}

/// Progress observer that logs once per 10% step.
#[derive(Debug, Default)]
pub struct DecileProgress {
    last_step: Option<usize>,
}

impl DecileProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// The 10% step `completed / total` falls in, `0..=10`.
    fn step(completed: usize, total: usize) -> usize {
        (fraction(completed, total) * 10.0).floor() as usize
    }
}

impl ProgressObserver for DecileProgress {
    fn on_progress(&mut self, completed: usize, total: usize) {
        let step = Self::step(completed, total);
        if self.last_step.is_some_and(|last| last >= step) {
            return;
        }
        self.last_step = Some(step);
        info!(completed, total, percent = step * 10, "progress");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decile_steps() {
        assert_eq!(DecileProgress::step(0, 0), 10);
        assert_eq!(DecileProgress::step(1, 20), 0);
        assert_eq!(DecileProgress::step(2, 20), 1);
        assert_eq!(DecileProgress::step(19, 20), 9);
        assert_eq!(DecileProgress::step(20, 20), 10);
    }

    #[test]
    fn decile_progress_advances_monotonically() {
        let mut progress = DecileProgress::new();
        for done in 1..=25 {
            progress.on_progress(done, 25);
        }
        assert_eq!(progress.last_step, Some(10));
    }
}
