use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encoding(String),

    #[error("Token is malformed")]
    MalformedToken,

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    ExpiredToken,

    #[error("Token claims are malformed: {0}")]
    MalformedClaims(String),
}
