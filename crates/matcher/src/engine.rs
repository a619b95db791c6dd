use std::time::Instant;

use canonical::{normalize_with, CanonicalLabel, RawLabel};
use tracing::{debug, info, warn, Level};

use crate::metrics::metrics_recorder;
use crate::progress::ProgressObserver;
use crate::select::scan;
use crate::types::{MatchConfig, MatchError, MatchReport, MatchResult, MatchSummary};

#[cfg(test)]
mod tests;

/// Batch matcher: one best target per source, filtered by threshold.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Construct a matcher from a validated configuration.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, threshold = config.threshold, "match_config_rejected");
            return Err(err);
        }
        Ok(Self { config })
    }

    /// Default normalization with the given threshold.
    pub fn with_threshold(threshold: u8) -> Result<Self, MatchError> {
        Self::new(MatchConfig::with_threshold(threshold))
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match every source against `targets`, in source order.
    pub fn match_all(&self, sources: &[RawLabel], targets: &[RawLabel]) -> Vec<MatchResult> {
        self.run(sources, targets, &mut |_: usize, _: usize| {})
            .results
    }

    /// [`match_all`](Self::match_all) reporting progress after each source.
    pub fn match_all_observed(
        &self,
        sources: &[RawLabel],
        targets: &[RawLabel],
        observer: &mut dyn ProgressObserver,
    ) -> Vec<MatchResult> {
        self.run(sources, targets, observer).results
    }

    /// Full batch run returning results and counters.
    ///
    /// Missing entries are removed from both lists before anything else, so
    /// they never match each other and never count towards progress. Targets
    /// are normalized once per run.
    pub fn run(
        &self,
        sources: &[RawLabel],
        targets: &[RawLabel],
        observer: &mut dyn ProgressObserver,
    ) -> MatchReport {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.match_all",
            sources = sources.len(),
            targets = targets.len(),
            threshold = self.config.threshold
        );
        let _guard = span.enter();

        let queries: Vec<&str> = sources.iter().filter_map(RawLabel::as_text).collect();
        let prepared: Vec<(&str, CanonicalLabel)> = targets
            .iter()
            .filter_map(RawLabel::as_text)
            .map(|raw| (raw, normalize_with(raw, &self.config.normalize)))
            .collect();

        let total = queries.len();
        let mut results = Vec::new();
        for (index, query) in queries.iter().enumerate() {
            let canonical = normalize_with(query, &self.config.normalize);
            let best = scan(&canonical, prepared.iter().map(|(raw, label)| (*raw, label)));

            if best.score.get() >= self.config.threshold {
                results.push(MatchResult {
                    query: (*query).to_string(),
                    matched: best.candidate.map(str::to_string),
                    score: best.score,
                });
            } else {
                debug!(
                    index,
                    score = best.score.get(),
                    candidate = ?best.candidate,
                    "below_threshold"
                );
            }
            observer.on_progress(index + 1, total);
        }

        let summary = MatchSummary {
            sources: total,
            targets: prepared.len(),
            missing_sources: sources.len() - total,
            missing_targets: targets.len() - prepared.len(),
            matched: results.len(),
            below_threshold: total - results.len(),
        };

        let latency = start.elapsed();
        info!(
            matched = summary.matched,
            below_threshold = summary.below_threshold,
            missing_sources = summary.missing_sources,
            missing_targets = summary.missing_targets,
            elapsed_micros = latency.as_micros(),
            "match_all_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_batch(latency, &summary);
        }

        MatchReport { results, summary }
    }
}

/// Match `sources` against `targets` with the default normalization.
///
/// Rejects thresholds above 100 with [`MatchError::ThresholdOutOfRange`].
pub fn match_all(
    sources: &[RawLabel],
    targets: &[RawLabel],
    threshold: u8,
) -> Result<Vec<MatchResult>, MatchError> {
    let matcher = Matcher::with_threshold(threshold)?;
    Ok(matcher.match_all(sources, targets))
}
