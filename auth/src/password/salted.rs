use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::Argon2;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use sha2::Digest;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

/// Random salt length in bytes.
pub const SALT_SIZE: usize = 16;

/// Digest length in bytes.
pub const HASH_SIZE: usize = 32;

/// Decoded length of every stored credential record.
pub const RECORD_SIZE: usize = SALT_SIZE + HASH_SIZE;

/// Digest derivation applied to `(password, salt)`.
///
/// Both schemes produce the same record layout, but records are not
/// self-describing: a deployment must keep one scheme for all stored records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestScheme {
    /// Single SHA-256 pass over `password ++ salt`.
    #[default]
    Sha256,
    /// Argon2id with default parameters, 32-byte output.
    Argon2id,
}

/// Salted password hashing.
///
/// Stored records are standard base64 over `salt (16 bytes) ++ digest (32 bytes)`.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    scheme: DigestScheme,
}

impl PasswordHasher {
    /// Create a new password hasher using the given digest scheme.
    pub fn new(scheme: DigestScheme) -> Self {
        Self { scheme }
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Base64 encoded credential record
    ///
    /// # Errors
    /// * `RandomnessUnavailable` - Operating system RNG failed
    /// * `DerivationFailed` - Argon2 rejected its inputs
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut record = [0u8; RECORD_SIZE];
        let (salt, digest) = record.split_at_mut(SALT_SIZE);

        OsRng
            .try_fill_bytes(salt)
            .map_err(|e| PasswordError::RandomnessUnavailable(e.to_string()))?;

        self.derive(password.as_bytes(), salt, digest)?;

        Ok(STANDARD.encode(record))
    }

    /// Verify a password against a stored record.
    ///
    /// # Arguments
    /// * `stored` - Base64 encoded credential record
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `Decoding` - Record is not valid base64
    /// * `InvalidRecordLength` - Record does not decode to exactly 48 bytes
    /// * `DerivationFailed` - Argon2 rejected its inputs
    pub fn verify(&self, stored: &str, password: &str) -> Result<bool, PasswordError> {
        let record = STANDARD
            .decode(stored)
            .map_err(|e| PasswordError::Decoding(e.to_string()))?;

        if record.len() != RECORD_SIZE {
            return Err(PasswordError::InvalidRecordLength {
                expected: RECORD_SIZE,
                actual: record.len(),
            });
        }

        let (salt, expected) = record.split_at(SALT_SIZE);
        let mut actual = [0u8; HASH_SIZE];
        self.derive(password.as_bytes(), salt, &mut actual)?;

        Ok(bool::from(expected.ct_eq(&actual)))
    }

    fn derive(&self, password: &[u8], salt: &[u8], out: &mut [u8]) -> Result<(), PasswordError> {
        match self.scheme {
            DigestScheme::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(password);
                hasher.update(salt);
                out.copy_from_slice(&hasher.finalize());
                Ok(())
            }
            DigestScheme::Argon2id => Argon2::default()
                .hash_password_into(password, salt, out)
                .map_err(|e| PasswordError::DerivationFailed(e.to_string())),
        }
    }
}
