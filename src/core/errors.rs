use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum BillmateError {
    #[error("Missing or invalid session: {0}")]
    Unauthorized(String),
    #[error("Manager name cannot be empty")]
    EmptyManagerName,
    #[error("Home {0} has no manager name (Home!B1)")]
    MissingManagerName(String),
    #[error("Spreadsheet {0} not found")]
    SpreadsheetNotFound(String),
    #[error("Tab {0} not found")]
    TabNotFound(String),
    #[error("User {0} has no access to spreadsheet {1}")]
    PermissionDenied(String, String),
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Invite not found")]
    InviteNotFound,
    #[error("Invite is inactive")]
    InviteInactive,
    #[error("Invite has expired")]
    InviteExpired,
    #[error("Invite has reached its usage limit")]
    InviteExhausted,
    #[error("Invite is invalid (missing spreadsheet id)")]
    InvalidInvite,
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl BillmateError {
    pub fn invalid_input(field: &str, title: &str, description: impl Into<String>) -> Self {
        BillmateError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.to_string(),
                description: description.into(),
            },
        )
    }
}
