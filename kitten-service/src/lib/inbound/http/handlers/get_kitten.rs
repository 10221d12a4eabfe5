use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenId;
use crate::inbound::http::middleware::RequestIdentity;
use crate::inbound::http::router::AppState;

pub async fn get_kitten(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<KittenResponseData>, ApiError> {
    let user = identity.require()?;

    let kitten_id = KittenId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .kitten_service
        .get_kitten(&kitten_id, &user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref kitten| ApiSuccess::new(StatusCode::OK, kitten.into()))
}

/// Public kitten view: no internal id, no owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KittenResponseData {
    pub age: i32,
    pub color: String,
    pub name: String,
}

impl From<&Kitten> for KittenResponseData {
    fn from(kitten: &Kitten) -> Self {
        Self {
            age: kitten.age,
            color: kitten.color.clone(),
            name: kitten.name.as_str().to_string(),
        }
    }
}
