//! Label canonicalization layer.
//!
//! Turns free-text labels (names pulled from spreadsheet columns, mostly) into
//! a comparison-only canonical form. The matcher scores canonical labels, never
//! the raw text.
//!
//! ## What we do
//!
//! - Unicode decomposition (NFKD by default, NFD optional)
//! - Drop every combining mark, keeping the base letter ("ç" → "c")
//! - Lowercase
//! - Remove everything that is not `a-z`, `0-9` or whitespace (removed, not replaced)
//! - Collapse whitespace runs to single spaces and trim the ends
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. [`normalize`] is total: a
//! missing label or an all-symbol label both become the empty canonical label.
//!
//! ## Invariants worth knowing
//!
//! - Output contains only `[a-z0-9 ]`
//! - No leading/trailing space, never two spaces in a row
//! - `normalize(normalize(s)) == normalize(s)`
//!
//! ```rust
//! use canonical::{normalize, RawLabel};
//!
//! let label = normalize(&RawLabel::from("  Conceição  da   SILVA! "));
//! assert_eq!(label.as_str(), "conceicao da silva");
//! ```

mod config;
mod error;
mod label;
mod pipeline;
mod whitespace;

pub use crate::config::{Decomposition, NormalizeConfig};
pub use crate::error::CanonicalError;
pub use crate::label::{CanonicalLabel, RawLabel};
pub use crate::pipeline::{normalize, normalize_str, normalize_with};
pub use crate::whitespace::collapse_whitespace;
