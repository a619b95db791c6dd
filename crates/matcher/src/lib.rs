//! # Label Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the normalization layer (`canonical`). Given two
//! ordered collections of free-text labels, it finds for every source label
//! the most similar target label, scores the pair on a 0–100 scale and keeps
//! the pairs whose score reaches a threshold.
//!
//! ## Core Types
//!
//! - [`MatchScore`]: integer similarity in `[0, 100]`.
//! - [`ratio`] / [`matching_blocks`]: the matching-block sequence ratio every
//!   score is built on.
//! - [`score`] / [`token_set_ratio`]: token-set similarity, insensitive to
//!   word order and repetition.
//! - [`select_best`]: one best candidate per query, earliest candidate on ties.
//! - [`MatchConfig`]: threshold plus normalization settings.
//! - [`Matcher`]: the batch matcher, returning [`MatchResult`]s in source order
//!   and a [`MatchSummary`] of counters.
//! - [`ProgressObserver`]: optional `(completed, total)` callback.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Matcher, MatchConfig, RawLabel};
//!
//! let sources = vec![RawLabel::from("Silva, Maria"), RawLabel::from("Zeca")];
//! let targets = vec![RawLabel::from("Maria Silva"), RawLabel::from("Ana Lima")];
//!
//! let matcher = Matcher::new(MatchConfig::with_threshold(90)).expect("valid config");
//! let results = matcher.match_all(&sources, &targets);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].matched.as_deref(), Some("Maria Silva"));
//! assert_eq!(results[0].score.get(), 100);
//! ```
//!
//! ## Metrics
//!
//! Install a [`MatchMetrics`] recorder with [`set_match_metrics`] to receive
//! the latency and counters of every batch.

mod engine;
mod metrics;
mod progress;
mod ratio;
mod score;
mod select;
mod token_set;
mod types;

pub use canonical::{normalize, normalize_str, CanonicalLabel, NormalizeConfig, RawLabel};
pub use engine::{match_all, Matcher};
pub use metrics::{set_match_metrics, MatchMetrics};
pub use progress::{fraction, ProgressObserver};
pub use ratio::{matching_blocks, ratio, MatchingBlock};
pub use score::MatchScore;
pub use select::{select_best, select_best_with, BestMatch};
pub use token_set::{score, token_set_ratio};
pub use types::{MatchConfig, MatchError, MatchReport, MatchResult, MatchSummary};
