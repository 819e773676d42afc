use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::Hmac;
use hmac::Mac;
use serde::Serialize;
use sha2::Sha256;

use super::claims::Claims;
use super::errors::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Fixed token header.
#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// HMAC secrets used by a [`TokenCodec`].
///
/// The current key signs new tokens. Previous keys are only accepted during
/// verification, which lets a deployment rotate its secret without
/// invalidating tokens issued under the old one.
#[derive(Clone)]
pub struct SigningKeys {
    current: Vec<u8>,
    previous: Vec<Vec<u8>>,
}

impl SigningKeys {
    /// Create a key set with a single signing key.
    pub fn new(current: impl Into<Vec<u8>>) -> Self {
        Self {
            current: current.into(),
            previous: Vec::new(),
        }
    }

    /// Accept tokens signed with a retired key.
    pub fn with_previous(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.previous.push(key.into());
        self
    }

    fn verification_keys(&self) -> impl Iterator<Item = &[u8]> {
        std::iter::once(self.current.as_slice()).chain(self.previous.iter().map(Vec::as_slice))
    }
}

impl fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeys")
            .field("current", &"<redacted>")
            .field("previous", &self.previous.len())
            .finish()
    }
}

/// Signed token encoder and verifier.
///
/// Tokens have the shape `header.claims.signature`, each segment encoded as
/// unpadded base64url. The signature is HMAC-SHA256 over the exact bytes of
/// `header.claims`.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    keys: SigningKeys,
}

impl TokenCodec {
    /// Create a codec with injected signing keys.
    ///
    /// # Arguments
    /// * `keys` - Current and previous HMAC secrets
    pub fn new(keys: SigningKeys) -> Self {
        Self { keys }
    }

    /// Issue a token for a user, valid for the fixed validity window.
    ///
    /// # Errors
    /// * `Encoding` - Header or claims could not be serialized
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, TokenError> {
        self.sign(&Claims::for_user(user_id, username))
    }

    /// Sign an explicit claims value with the current key.
    ///
    /// # Errors
    /// * `Encoding` - Header or claims could not be serialized
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = serde_json::to_vec(&HEADER).map_err(|e| TokenError::Encoding(e.to_string()))?;
        let payload = serde_json::to_vec(claims).map_err(|e| TokenError::Encoding(e.to_string()))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload)
        );

        let mut mac = keyed_mac(&self.keys.current).map_err(|_| {
            TokenError::Encoding("signing key rejected by HMAC".to_string())
        })?;
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            signing_input,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a token and return its claims.
    ///
    /// The signature is checked before the claims are parsed, so no claim
    /// data is read from an unauthenticated token.
    ///
    /// # Errors
    /// * `MalformedToken` - Not exactly three non-empty segments
    /// * `BadSignature` - Signature does not match any accepted key
    /// * `MalformedClaims` - Claims segment is not valid base64url JSON
    /// * `ExpiredToken` - Expiration time has passed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let segments = Segments::split(token)?;

        let signature = URL_SAFE_NO_PAD
            .decode(segments.signature)
            .map_err(|_| TokenError::BadSignature)?;
        self.verify_signature(segments.signing_input.as_bytes(), &signature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(segments.claims)
            .map_err(|e| TokenError::MalformedClaims(e.to_string()))?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|e| TokenError::MalformedClaims(e.to_string()))?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(claims)
    }

    fn verify_signature(&self, signing_input: &[u8], signature: &[u8]) -> Result<(), TokenError> {
        for key in self.keys.verification_keys() {
            let Ok(mut mac) = keyed_mac(key) else {
                continue;
            };
            mac.update(signing_input);
            // verify_slice compares in constant time
            if mac.verify_slice(signature).is_ok() {
                return Ok(());
            }
        }

        Err(TokenError::BadSignature)
    }
}

fn keyed_mac(key: &[u8]) -> Result<HmacSha256, hmac::digest::InvalidLength> {
    HmacSha256::new_from_slice(key)
}

/// Borrowed view over the three segments of a token.
struct Segments<'a> {
    signing_input: &'a str,
    claims: &'a str,
    signature: &'a str,
}

impl<'a> Segments<'a> {
    fn split(token: &'a str) -> Result<Self, TokenError> {
        let mut parts = token.split('.');

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(claims), Some(signature), None)
                if !header.is_empty() && !claims.is_empty() && !signature.is_empty() =>
            {
                Ok(Self {
                    signing_input: &token[..header.len() + 1 + claims.len()],
                    claims,
                    signature,
                })
            }
            _ => Err(TokenError::MalformedToken),
        }
    }
}
