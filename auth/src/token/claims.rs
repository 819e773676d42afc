use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Hours between issuance and expiration of every token.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// Identity payload carried inside a signed token.
///
/// `username` is informational only; authorization decisions use `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (authenticated user identifier)
    pub user_id: i64,

    /// Display name of the subject at issuance time
    pub username: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user expiring [`TOKEN_VALIDITY_HOURS`] from now.
    pub fn for_user(user_id: i64, username: impl Into<String>) -> Self {
        let expiration = Utc::now() + Duration::hours(TOKEN_VALIDITY_HOURS);

        Self {
            user_id,
            username: username.into(),
            exp: expiration.timestamp(),
        }
    }

    /// Replace the expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Check if token is expired.
    ///
    /// The expiration second itself is still valid.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
