use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::BillmateError;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub display_name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateHomeRequest {
    pub manager_name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoadHomeRequest {
    /// Spreadsheet URL or raw id.
    pub spreadsheet: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub spreadsheet_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct ManagerResponse {
    pub manager_name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RedeemInviteRequest {
    pub token: String,
    pub roommate_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for BillmateError to implement IntoResponse
pub struct ApiError(pub BillmateError);

impl From<BillmateError> for ApiError {
    fn from(err: BillmateError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BillmateError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            BillmateError::EmptyManagerName | BillmateError::InvalidRange(_) | BillmateError::InvalidInput(..) => {
                StatusCode::BAD_REQUEST
            }
            BillmateError::MissingManagerName(_) => StatusCode::CONFLICT,
            BillmateError::SpreadsheetNotFound(_) | BillmateError::TabNotFound(_) | BillmateError::InviteNotFound => {
                StatusCode::NOT_FOUND
            }
            BillmateError::PermissionDenied(..) | BillmateError::InviteInactive => StatusCode::FORBIDDEN,
            BillmateError::InviteExpired => StatusCode::GONE,
            BillmateError::InviteExhausted => StatusCode::TOO_MANY_REQUESTS,
            BillmateError::InvalidInvite => StatusCode::UNPROCESSABLE_ENTITY,
            BillmateError::StorageError(_) | BillmateError::LoggingError(_) | BillmateError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}
