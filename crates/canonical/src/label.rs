use std::fmt;

use serde::{Deserialize, Serialize};

/// A label as supplied by the caller.
///
/// `Missing` stands for an absent cell (no value at all). It is distinct from
/// `Text("")`: batch matching drops missing labels before scoring, while an
/// empty text label is kept and simply normalizes to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RawLabel {
    Text(String),
    #[default]
    Missing,
}

impl RawLabel {
    /// Build a label from a tabular cell. An empty cell is `Missing`.
    pub fn from_cell(cell: &str) -> Self {
        if cell.is_empty() {
            RawLabel::Missing
        } else {
            RawLabel::Text(cell.to_string())
        }
    }

    /// The label text, or `None` when missing.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawLabel::Text(text) => Some(text.as_str()),
            RawLabel::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawLabel::Missing)
    }
}

impl From<&str> for RawLabel {
    fn from(value: &str) -> Self {
        RawLabel::Text(value.to_string())
    }
}

impl From<String> for RawLabel {
    fn from(value: String) -> Self {
        RawLabel::Text(value)
    }
}

impl<T: Into<String>> From<Option<T>> for RawLabel {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(text) => RawLabel::Text(text.into()),
            None => RawLabel::Missing,
        }
    }
}

/// Comparison form of a label.
///
/// Only the normalizer constructs these, so every value satisfies the
/// canonical invariants: `[a-z0-9 ]` only, single-space separated, trimmed.
/// The empty label is valid and means "nothing comparable".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct CanonicalLabel(String);

impl CanonicalLabel {
    pub(crate) fn from_normalized(text: String) -> Self {
        debug_assert!(
            text.bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b' ')
        );
        CanonicalLabel(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-separated tokens in label order, duplicates included.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split(' ').filter(|t| !t.is_empty())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
