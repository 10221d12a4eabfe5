use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::kitten::errors::KittenNameError;
use crate::domain::kitten::models::CreateKittenCommand;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenName;
use crate::inbound::http::middleware::RequestIdentity;
use crate::inbound::http::router::AppState;

pub async fn create_kitten(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(body): Json<CreateKittenRequest>,
) -> Result<ApiSuccess<CreateKittenResponseData>, ApiError> {
    let user = identity.require()?;

    state
        .kitten_service
        .create_kitten(body.try_into_command()?, user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref kitten| ApiSuccess::new(StatusCode::CREATED, kitten.into()))
}

/// HTTP request body for creating a kitten (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateKittenRequest {
    name: String,
    age: i32,
    color: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateKittenRequestError {
    #[error("Invalid kitten name: {0}")]
    Name(#[from] KittenNameError),

    #[error("Age must not be negative, got {0}")]
    NegativeAge(i32),

    #[error("Color must not be empty")]
    EmptyColor,
}

impl CreateKittenRequest {
    fn try_into_command(self) -> Result<CreateKittenCommand, ParseCreateKittenRequestError> {
        let name = KittenName::new(self.name)?;
        if self.age < 0 {
            return Err(ParseCreateKittenRequestError::NegativeAge(self.age));
        }
        if self.color.is_empty() {
            return Err(ParseCreateKittenRequestError::EmptyColor);
        }
        Ok(CreateKittenCommand {
            name,
            age: self.age,
            color: self.color,
        })
    }
}

impl From<ParseCreateKittenRequestError> for ApiError {
    fn from(err: ParseCreateKittenRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateKittenResponseData {
    pub name: String,
    pub age: i32,
    pub color: String,
}

impl From<&Kitten> for CreateKittenResponseData {
    fn from(kitten: &Kitten) -> Self {
        Self {
            name: kitten.name.as_str().to_string(),
            age: kitten.age,
            color: kitten.color.clone(),
        }
    }
}
