pub mod in_memory;

use crate::core::errors::BillmateError;
use crate::core::models::audit::AppLog;
use async_trait::async_trait;

/// Per-home activity log. Entries are only ever read back by home.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        spreadsheet_id: &str,
        action: &str,
        details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), BillmateError>;
    /// Entries for one home, oldest first.
    async fn home_logs(&self, spreadsheet_id: &str) -> Result<Vec<AppLog>, BillmateError>;
}
