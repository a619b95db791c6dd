use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use canonical::{Decomposition, NormalizeConfig};

use crate::metrics::{set_match_metrics, MatchMetrics};
use crate::score::MatchScore;

fn labels(values: &[&str]) -> Vec<RawLabel> {
    values.iter().map(|v| RawLabel::from(*v)).collect()
}

fn matcher(threshold: u8) -> Matcher {
    Matcher::with_threshold(threshold).expect("valid threshold")
}

#[test]
fn accented_label_matches_itself_at_threshold_100() {
    let items = labels(&["João"]);
    let results = match_all(&items, &items, 100).expect("match");
    assert_eq!(
        results,
        vec![MatchResult {
            query: "João".into(),
            matched: Some("João".into()),
            score: MatchScore::MAX,
        }]
    );
}

#[test]
fn empty_sources_yield_empty_results() {
    let targets = labels(&["Ana", "Bia", "Carla"]);
    for threshold in [0, 50, 100] {
        let results = match_all(&[], &targets, threshold).expect("match");
        assert!(results.is_empty());
    }
}

#[test]
fn results_follow_source_order() {
    let sources = labels(&["Carlos Souza", "Ana Lima", "Bia Costa"]);
    let targets = labels(&["Bia Costa", "Ana Lima", "Carlos Souza"]);
    let reversed: Vec<RawLabel> = targets.iter().rev().cloned().collect();

    let forward = matcher(90).match_all(&sources, &targets);
    let backward = matcher(90).match_all(&sources, &reversed);

    let queries: Vec<&str> = forward.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(queries, vec!["Carlos Souza", "Ana Lima", "Bia Costa"]);
    assert_eq!(forward, backward);
}

#[test]
fn threshold_is_inclusive() {
    // "maria silva" vs "mario silveira" scores exactly 80.
    let sources = labels(&["Maria Silva"]);
    let targets = labels(&["Mario Silveira"]);

    let at = matcher(80).match_all(&sources, &targets);
    assert_eq!(at.len(), 1);
    assert_eq!(at[0].score.get(), 80);

    let above = matcher(81).match_all(&sources, &targets);
    assert!(above.is_empty());
}

#[test]
fn below_threshold_sources_are_dropped_not_nulled() {
    let sources = labels(&["Maria Silva", "Zeca", "Ana Lima"]);
    let targets = labels(&["Silva Maria", "Ana Lima"]);
    let report = matcher(90).run(&sources, &targets, &mut |_: usize, _: usize| {});

    let queries: Vec<&str> = report.results.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(queries, vec!["Maria Silva", "Ana Lima"]);
    assert_eq!(report.summary.matched, 2);
    assert_eq!(report.summary.below_threshold, 1);
}

#[test]
fn missing_entries_are_excluded_before_matching() {
    let sources = vec![
        RawLabel::Missing,
        RawLabel::from("Ana"),
        RawLabel::from_cell(""),
    ];
    let targets = vec![RawLabel::Missing, RawLabel::from("ANA")];

    let mut calls = Vec::new();
    let report = matcher(0).run(&sources, &targets, &mut |done: usize, total: usize| {
        calls.push((done, total))
    });

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].matched.as_deref(), Some("ANA"));
    assert_eq!(calls, vec![(1, 1)]);
    assert_eq!(
        report.summary,
        MatchSummary {
            sources: 1,
            targets: 1,
            missing_sources: 2,
            missing_targets: 1,
            matched: 1,
            below_threshold: 0,
        }
    );
}

#[test]
fn blank_text_never_matches_blank_text() {
    let sources = labels(&["!!!"]);
    let targets = labels(&["???"]);
    let results = matcher(1).match_all(&sources, &targets);
    assert!(results.is_empty());

    let zero = matcher(0).match_all(&sources, &targets);
    assert_eq!(zero[0].matched.as_deref(), Some("???"));
    assert_eq!(zero[0].score, MatchScore::MIN);
}

#[test]
fn no_targets_reports_absent_match_at_threshold_zero() {
    let sources = labels(&["Ana", "Bia"]);
    let results = matcher(0).match_all(&sources, &[]);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.matched.is_none()));
    assert!(results.iter().all(|r| r.score == MatchScore::MIN));

    assert!(matcher(1).match_all(&sources, &[]).is_empty());
}

#[test]
fn progress_is_reported_after_every_source() {
    let sources = labels(&["a", "b", "c", "d"]);
    let targets = labels(&["a"]);
    let mut calls = Vec::new();
    matcher(100).match_all_observed(&sources, &targets, &mut |done: usize, total: usize| {
        calls.push((done, total))
    });
    assert_eq!(calls, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
}

#[test]
fn empty_batch_never_calls_observer() {
    let mut called = false;
    matcher(0).match_all_observed(&[], &labels(&["a"]), &mut |_: usize, _: usize| {
        called = true
    });
    assert!(!called);
}

#[test]
fn ties_resolve_to_first_target() {
    let sources = labels(&["Silva"]);
    let targets = labels(&["Silva Maria", "Maria Silva", "Silva"]);
    let results = matcher(100).match_all(&sources, &targets);
    assert_eq!(results[0].matched.as_deref(), Some("Silva Maria"));
}

#[test]
fn duplicates_in_targets_do_not_change_outcome() {
    let sources = labels(&["Ana Lima"]);
    let once = matcher(50).match_all(&sources, &labels(&["Ana Lima", "Bia"]));
    let twice = matcher(50).match_all(&sources, &labels(&["Ana Lima", "Ana Lima", "Bia"]));
    assert_eq!(once, twice);
}

#[test]
fn invalid_threshold_is_rejected() {
    let err = match_all(&labels(&["a"]), &labels(&["a"]), 101).expect_err("out of range");
    assert_eq!(err, MatchError::ThresholdOutOfRange(101));
    assert!(Matcher::with_threshold(200).is_err());
}

#[test]
fn normalization_config_flows_through() {
    let cfg = MatchConfig {
        threshold: 100,
        normalize: NormalizeConfig {
            decomposition: Decomposition::Canonical,
            ..NormalizeConfig::default()
        },
    };
    let m = Matcher::new(cfg.clone()).expect("valid config");
    assert_eq!(m.config(), &cfg);
    // Canonical decomposition leaves the ligature alone, so it is dropped.
    let results = m.match_all(&labels(&["ﬁsh"]), &labels(&["sh"]));
    assert_eq!(results.len(), 1);

    let compat = matcher(100).match_all(&labels(&["ﬁsh"]), &labels(&["sh"]));
    assert!(compat.is_empty());
}

#[derive(Default)]
struct RecordingMetrics {
    batches: Mutex<Vec<(Duration, MatchSummary)>>,
}

impl MatchMetrics for RecordingMetrics {
    fn record_batch(&self, latency: Duration, summary: &MatchSummary) {
        self.batches
            .lock()
            .expect("metrics lock")
            .push((latency, *summary));
    }
}

#[test]
fn metrics_recorder_sees_batch_summary() {
    let recorder = Arc::new(RecordingMetrics::default());
    set_match_metrics(Some(recorder.clone()));

    // An unusual source count so concurrent tests can't be confused for this run.
    let sources = labels(&["q1", "q2", "q3", "q4", "q5", "q6", "q7"]);
    let targets = labels(&["q1"]);
    matcher(100).match_all(&sources, &targets);

    set_match_metrics(None);

    let batches = recorder.batches.lock().expect("metrics lock");
    let summary = batches
        .iter()
        .map(|(_, s)| *s)
        .find(|s| s.sources == 7)
        .expect("batch recorded");
    assert_eq!(summary.matched, 1);
    assert_eq!(summary.below_threshold, 6);
}
