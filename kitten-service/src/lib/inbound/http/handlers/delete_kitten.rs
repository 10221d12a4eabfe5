use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::kitten::models::KittenId;
use crate::inbound::http::middleware::RequestIdentity;
use crate::inbound::http::router::AppState;

pub async fn delete_kitten(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = identity.require()?;

    let kitten_id = KittenId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .kitten_service
        .delete_kitten(&kitten_id, &user.id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
