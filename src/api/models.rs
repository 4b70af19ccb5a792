use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::PortalError;
use crate::core::models::{Role, SessionRecord};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub specialization: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignupResponse {
    pub user_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub redirect_to: String,
    pub user: SessionRecord,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for PortalError to implement IntoResponse
pub struct ApiError(pub PortalError);

impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            PortalError::MissingFields | PortalError::PasswordTooShort => StatusCode::BAD_REQUEST,
            PortalError::EmailAlreadyRegistered(_) | PortalError::SubmissionInFlight => {
                StatusCode::CONFLICT
            }
            PortalError::InvalidCredentials | PortalError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            PortalError::UserNotFound(_) | PortalError::ProfileNotFound => StatusCode::NOT_FOUND,
            PortalError::StorageError(_)
            | PortalError::SessionError(_)
            | PortalError::LoggingError(_)
            | PortalError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // The error display text is what the form would show the user.
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}
