use std::borrow::Borrow;

use canonical::{normalize_with, CanonicalLabel, NormalizeConfig};

use crate::score::MatchScore;
use crate::token_set::score;

/// Best candidate for one query.
///
/// `candidate` borrows the raw candidate text, not its canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch<'c> {
    /// Position of the winner in the candidate list.
    pub index: Option<usize>,
    pub candidate: Option<&'c str>,
    pub score: MatchScore,
}

impl BestMatch<'_> {
    /// The "no candidates" result.
    pub fn none() -> Self {
        BestMatch {
            index: None,
            candidate: None,
            score: MatchScore::MIN,
        }
    }
}

/// Picks the highest-scoring candidate for `query`.
///
/// Both the query and every candidate are normalized with the default
/// configuration before scoring. Ties go to the earliest candidate, and with
/// a non-empty list some candidate is always returned, even at score 0.
/// An empty list yields [`BestMatch::none`].
pub fn select_best<'c, C: AsRef<str>>(query: &str, candidates: &'c [C]) -> BestMatch<'c> {
    select_best_with(query, candidates, &NormalizeConfig::default())
}

/// [`select_best`] with an explicit normalization config.
pub fn select_best_with<'c, C: AsRef<str>>(
    query: &str,
    candidates: &'c [C],
    cfg: &NormalizeConfig,
) -> BestMatch<'c> {
    let query = normalize_with(query, cfg);
    scan(
        &query,
        candidates.iter().map(|c| {
            let raw = c.as_ref();
            (raw, normalize_with(raw, cfg))
        }),
    )
}

/// Sequential scan over pre-normalized candidates; strictly greater scores replace.
pub(crate) fn scan<'c, L>(
    query: &CanonicalLabel,
    candidates: impl IntoIterator<Item = (&'c str, L)>,
) -> BestMatch<'c>
where
    L: Borrow<CanonicalLabel>,
{
    let mut best = BestMatch::none();
    for (index, (raw, canonical)) in candidates.into_iter().enumerate() {
        let candidate_score = score(query, canonical.borrow());
        if best.candidate.is_none() || candidate_score > best.score {
            best = BestMatch {
                index: Some(index),
                candidate: Some(raw),
                score: candidate_score,
            };
        }
    }
    best
}
