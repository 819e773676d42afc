//! Authentication core
//!
//! Provides the credential and session primitives used by the task service:
//! - Signed tokens (HMAC-SHA256, three base64url segments)
//! - Salted password records (SHA-256 or Argon2id, 48-byte base64 record)
//! - A gate that turns an `Authorization` header into verified claims
//!
//! Everything here is synchronous, performs no I/O and holds no global
//! state. Secrets are injected at construction.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::default();
//! let record = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify(&record, "my_password").unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{SigningKeys, TokenCodec};
//!
//! let codec = TokenCodec::new(SigningKeys::new(b"secret_key_at_least_32_bytes_long!".to_vec()));
//! let token = codec.issue(42, "alice").unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.user_id, 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, SigningKeys, TokenCodec};
//!
//! let codec = TokenCodec::new(SigningKeys::new(b"secret_key_at_least_32_bytes_long!".to_vec()));
//! let auth = Authenticator::new(codec, PasswordHasher::default());
//!
//! // Register: hash password
//! let record = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &record, 42, "alice").unwrap();
//!
//! // Protected request: gate the Authorization header
//! let header = format!("Bearer {}", result.access_token);
//! let claims = auth.gate().authenticate(Some(&header)).unwrap();
//! assert_eq!(claims.user_id, 42);
//! ```

pub mod authenticator;
pub mod gate;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use gate::Gate;
pub use gate::GateError;
pub use password::DigestScheme;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::SigningKeys;
pub use token::TokenCodec;
pub use token::TokenError;
