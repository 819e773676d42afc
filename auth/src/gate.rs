use thiserror::Error;

use crate::token::Claims;
use crate::token::TokenCodec;
use crate::token::TokenError;

const BEARER_SCHEME: &str = "Bearer";

/// Rejection reasons produced by the [`Gate`].
///
/// These are meant for logs. Callers answering a client should collapse every
/// variant into a single unauthorized response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Missing Authorization header")]
    MissingAuthorizationHeader,

    #[error("Malformed Authorization header, expected: Bearer <token>")]
    MalformedAuthorizationHeader,

    #[error("Token rejected: {0}")]
    Token(#[from] TokenError),
}

/// Checkpoint placed in front of protected operations.
///
/// Turns a raw `Authorization` header value into verified [`Claims`].
#[derive(Debug, Clone)]
pub struct Gate {
    codec: TokenCodec,
}

impl Gate {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Authenticate a request from its `Authorization` header value.
    ///
    /// The header must be exactly `Bearer <token>`.
    ///
    /// # Errors
    /// * `MissingAuthorizationHeader` - No header was sent
    /// * `MalformedAuthorizationHeader` - Header is not `Bearer <token>`
    /// * `Token` - Token verification failed
    pub fn authenticate(&self, header: Option<&str>) -> Result<Claims, GateError> {
        let header = header.ok_or(GateError::MissingAuthorizationHeader)?;
        let token = bearer_token(header)?;

        Ok(self.codec.verify(token)?)
    }
}

fn bearer_token(header: &str) -> Result<&str, GateError> {
    let mut parts = header.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(GateError::MalformedAuthorizationHeader),
    }
}
