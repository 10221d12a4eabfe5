use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity resolved from the `Authorization` header, attached to every
/// request by [`resolve_identity`].
///
/// `Invalid` is terminal: the middleware rejects such requests itself, so
/// handlers only ever observe `Absent` or `Resolved`. The variant still
/// exists so a handler that somehow receives one treats it exactly like a
/// missing credential instead of silently continuing.
#[derive(Debug, Clone)]
pub enum RequestIdentity {
    /// No Authorization header was present. Not an error by itself.
    Absent,
    /// Header carried a verified token bound to an existing user.
    Resolved(AuthenticatedUser),
    /// Header was present but malformed, unverifiable, or signed for a
    /// user that no longer exists.
    Invalid,
}

/// The user a verified token resolved to, taken from the store record
/// rather than the token payload.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: Username,
}

impl RequestIdentity {
    /// Require a resolved identity, failing with 401 otherwise.
    pub fn require(&self) -> Result<&AuthenticatedUser, ApiError> {
        match self {
            RequestIdentity::Resolved(user) => Ok(user),
            RequestIdentity::Absent | RequestIdentity::Invalid => Err(ApiError::Unauthorized(
                "authentication required".to_string(),
            )),
        }
    }
}

/// Authentication resolver middleware, layered over the whole router.
///
/// A missing header attaches `Absent` and continues; each handler decides
/// whether that matters. A header that is present but does not resolve to
/// an existing user aborts the request with 401 on any route. A forged or
/// expired token is never downgraded to "no credential".
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = match req.headers().get(http::header::AUTHORIZATION) {
        None => {
            req.extensions_mut().insert(RequestIdentity::Absent);
            return Ok(next.run(req).await);
        }
        Some(header) => header,
    };

    let token = extract_token(header.to_str().ok())?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected bearer token");
        unauthorized()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(reason = %e, "Token subject is not a valid user id");
        unauthorized()
    })?;

    // Bind the claim to a live account; a token for a deleted user is as
    // invalid as a forged one. Store failures are not authentication
    // failures and surface as 500.
    let user = state.user_service.get_user(&user_id).await.map_err(|e| {
        match e {
            UserError::NotFound(_) => {
                tracing::warn!(user_id = %user_id, "Token subject does not exist");
                unauthorized()
            }
            other => ApiError::from(other).into_response(),
        }
    })?;

    req.extensions_mut()
        .insert(RequestIdentity::Resolved(AuthenticatedUser {
            id: user.id,
            username: user.username,
        }));

    Ok(next.run(req).await)
}

/// Split `"<scheme> <token>"` on the first space, discarding the scheme.
fn extract_token(header: Option<&str>) -> Result<&str, Response> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized()
    })?;

    match header.split_once(' ') {
        Some((_scheme, token)) if !token.is_empty() => Ok(token),
        _ => {
            tracing::warn!("Malformed Authorization header");
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("invalid or expired token".to_string()).into_response()
}
