//! Whitespace normalization utilities.
//!
//! Uses Unicode's definition of whitespace (space, tab, newline, carriage
//! return, no-break space and the rest). Every run of it becomes one ASCII
//! space and the ends are trimmed.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  hello \t\n world  "), "hello world");
//! assert_eq!(collapse_whitespace("   "), "");
//! ```

/// Collapses repeated whitespace and trims edges.
///
/// The normalizer runs this as its last step, which is what guarantees a
/// canonical label never holds two consecutive spaces. It is public for
/// callers that want the same spacing policy on display text.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(collapse_whitespace("hello   world"), "hello world");
        assert_eq!(collapse_whitespace("hello\r\nworld"), "hello world");
        assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello world");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n\t "), "");
        assert_eq!(collapse_whitespace("hello"), "hello");
    }
}
