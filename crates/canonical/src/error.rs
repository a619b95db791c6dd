use thiserror::Error;

/// Errors that can occur when configuring the normalizer.
///
/// Normalization itself never fails; only configuration is validated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
