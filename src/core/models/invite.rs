use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Invite {
    pub token: String,
    pub spreadsheet_id: String,
    pub created_by: String,
    #[schema(value_type = String, example = "2026-02-08T12:00:00Z")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, example = "2026-02-11T12:00:00Z")]
    pub expires_at: DateTime<Utc>,
    /// Zero means unlimited.
    pub max_uses: u32,
    pub uses: u32,
    pub active: bool,
}
