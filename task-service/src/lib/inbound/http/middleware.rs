use auth::GateError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::identity::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that runs the authentication gate and adds the caller
/// [`Identity`] to request extensions.
///
/// Every rejection answers the same 401 body; the specific reason only goes
/// to the log.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| reject(GateError::MalformedAuthorizationHeader))?,
        ),
        None => None,
    };

    let claims = state.authenticator.gate().authenticate(header).map_err(reject)?;

    req.extensions_mut().insert(Identity::from(claims));

    Ok(next.run(req).await)
}

fn reject(err: GateError) -> ApiError {
    tracing::warn!(reason = %err, "Authentication rejected");
    ApiError::Unauthorized("Unauthorized".to_string())
}
