//! Token-set similarity.
//!
//! Both labels are split into deduplicated token sets `Ta`, `Tb`. With the
//! intersection `I` and the differences `Da = Ta - Tb`, `Db = Tb - Ta`, three
//! comparison strings are built from sorted tokens:
//!
//! ```text
//! sect = sorted(I)
//! ab   = sorted(I) + " " + sorted(Da)    (trimmed)
//! ba   = sorted(I) + " " + sorted(Db)    (trimmed)
//! ```
//!
//! and the score is `max(ratio(sect, ab), ratio(sect, ba), ratio(ab, ba))`.
//! A label whose tokens are a subset of the other's therefore scores 100.

use std::collections::BTreeSet;

use canonical::CanonicalLabel;

use crate::ratio::ratio;
use crate::score::MatchScore;

/// Deduplicated tokens of one label, iterated in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenSet<'a>(BTreeSet<&'a str>);

impl<'a> TokenSet<'a> {
    fn new(text: &'a str) -> Self {
        TokenSet(text.split_whitespace().collect())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join<'t, 'a: 't>(tokens: impl Iterator<Item = &'t &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

/// Token-set score of two canonical labels.
///
/// If either label is empty the score is 0: blank never matches blank.
pub fn score(a: &CanonicalLabel, b: &CanonicalLabel) -> MatchScore {
    token_set_ratio(a.as_str(), b.as_str())
}

/// String-level form of [`score`]. Tokens are split on any whitespace.
pub fn token_set_ratio(a: &str, b: &str) -> MatchScore {
    let ta = TokenSet::new(a);
    let tb = TokenSet::new(b);
    if ta.is_empty() || tb.is_empty() {
        return MatchScore::MIN;
    }

    let sect = join(ta.0.intersection(&tb.0));
    let diff_ab = join(ta.0.difference(&tb.0));
    let diff_ba = join(tb.0.difference(&ta.0));

    let combined_ab = format!("{sect} {diff_ab}");
    let combined_ba = format!("{sect} {diff_ba}");
    let combined_ab = combined_ab.trim();
    let combined_ba = combined_ba.trim();

    ratio(&sect, combined_ab)
        .max(ratio(&sect, combined_ba))
        .max(ratio(combined_ab, combined_ba))
}
