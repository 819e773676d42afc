use crate::gate::Gate;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining password verification and token issuance.
///
/// Exposes the narrow contracts the registration and login flows depend on,
/// plus the [`Gate`] used in front of protected operations.
#[derive(Debug, Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: TokenCodec,
    gate: Gate,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `codec` - Token codec holding the signing keys
    /// * `password_hasher` - Credential hasher
    pub fn new(codec: TokenCodec, password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            gate: Gate::new(codec.clone()),
            codec,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Salt generation or derivation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored record.
    ///
    /// # Errors
    /// * `PasswordError` - Stored record is corrupt
    pub fn verify_password(&self, stored_hash: &str, password: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(stored_hash, password)
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `TokenError` - Token encoding failed
    pub fn issue_token(&self, user_id: i64, username: &str) -> Result<String, TokenError> {
        self.codec.issue(user_id, username)
    }

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored credential record
    /// * `user_id` - Subject written into the token
    /// * `username` - Display name written into the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored record is corrupt
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(stored_hash, password)? {
            tracing::debug!(user_id, "Password mismatch");
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.codec.issue(user_id, username)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Gate for protected operations, sharing this authenticator's keys.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
}
