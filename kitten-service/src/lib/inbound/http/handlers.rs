use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::kitten::errors::KittenError;
use crate::domain::user::errors::UserError;

pub mod create_kitten;
pub mod delete_kitten;
pub mod get_kitten;
pub mod login;
pub mod register;
pub mod welcome;

/// Successful JSON response: a status code plus the body as-is.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// HTTP-facing error taxonomy.
///
/// Ownership violations are deliberately absent: they are reported as
/// `Unauthorized` so a caller cannot distinguish "exists but not yours"
/// from "bad credentials".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::InternalServerError(cause) => {
                tracing::error!(cause = %cause, "Internal server error");
                // The real cause stays in the log
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_server_error",
                    "internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity", msg)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
        };

        (status, Json(ApiErrorBody::new(kind, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidUserId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<KittenError> for ApiError {
    fn from(err: KittenError) -> Self {
        match err {
            KittenError::NotFound(_) => ApiError::NotFound(err.to_string()),
            // Folded into 401 so ownership cannot be probed
            KittenError::NotOwner => {
                ApiError::Unauthorized("kitten does not belong to you".to_string())
            }
            KittenError::InvalidName(_) | KittenError::InvalidKittenId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            KittenError::DatabaseError(_) | KittenError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Body shape shared by every failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(kind: &str, message: String) -> Self {
        Self {
            error: kind.to_string(),
            message,
        }
    }
}

/// Body returned by register and login on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub message: String,
    pub token: String,
}

impl TokenResponseData {
    pub fn success(token: String) -> Self {
        Self {
            message: "success".to_string(),
            token,
        }
    }
}
