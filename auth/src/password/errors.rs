use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Stored credential is not valid base64: {0}")]
    Decoding(String),

    #[error("Stored credential has invalid length: expected {expected} bytes, got {actual}")]
    InvalidRecordLength { expected: usize, actual: usize },

    #[error("Password digest derivation failed: {0}")]
    DerivationFailed(String),
}
