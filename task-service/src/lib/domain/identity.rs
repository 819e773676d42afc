use crate::user::models::UserId;

/// Authenticated caller of a protected operation.
///
/// Only constructed from verified token claims. Protected service operations
/// take it as an explicit argument instead of looking it up from ambient
/// request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
}

impl From<auth::Claims> for Identity {
    fn from(claims: auth::Claims) -> Self {
        Self {
            user_id: UserId(claims.user_id),
            username: claims.username,
        }
    }
}
