use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use crate::config::{Decomposition, NormalizeConfig};
use crate::label::{CanonicalLabel, RawLabel};
use crate::whitespace::collapse_whitespace;

/// Main entry point. Normalizes a raw label with the default configuration.
///
/// A missing label yields the empty canonical label.
pub fn normalize(input: &RawLabel) -> CanonicalLabel {
    match input {
        RawLabel::Text(text) => normalize_str(text),
        RawLabel::Missing => CanonicalLabel::default(),
    }
}

/// Normalizes text with the default configuration.
pub fn normalize_str(input: &str) -> CanonicalLabel {
    normalize_with(input, &NormalizeConfig::default())
}

/// Normalizes text with an explicit configuration.
///
/// The configuration is assumed to be validated by the caller; the only
/// field read here is `decomposition`.
pub fn normalize_with(input: &str, cfg: &NormalizeConfig) -> CanonicalLabel {
    // Decomposition has to come first: it is what splits "é" into "e" + U+0301.
    let mut stripped = String::with_capacity(input.len());
    match cfg.decomposition {
        Decomposition::Compatibility => push_base_chars(input.nfkd(), &mut stripped),
        Decomposition::Canonical => push_base_chars(input.nfd(), &mut stripped),
    }

    // Lowercasing can expand one char into several, so filter after it.
    let mut kept = String::with_capacity(stripped.len());
    for ch in stripped.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() {
            kept.push(ch);
        }
    }

    CanonicalLabel::from_normalized(collapse_whitespace(&kept))
}

/// Appends every non-combining char of a decomposed stream.
fn push_base_chars(decomposed: impl Iterator<Item = char>, out: &mut String) {
    out.extend(decomposed.filter(|&ch| canonical_combining_class(ch) == 0));
}
