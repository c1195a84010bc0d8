use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `Bills` tab.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BillRecord {
    /// `YYYY-MM-DD`, used for ordering only.
    pub date: String,
    pub paid_by: String,
    pub description: String,
    pub amount: f64,
    /// Comma-separated participant names.
    pub split_with: String,
}

impl BillRecord {
    /// Participant names as written, trimmed and without empty entries.
    pub fn participants(&self) -> Vec<&str> {
        self.split_with
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}
