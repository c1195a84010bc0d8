use crate::core::errors::BillmateError;
use crate::core::models::audit::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Activity entries bucketed by spreadsheet id.
#[derive(Clone, Default)]
pub struct InMemoryLogging {
    homes: Arc<RwLock<HashMap<String, Vec<AppLog>>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        spreadsheet_id: &str,
        action: &str,
        details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), BillmateError> {
        let details: HashMap<String, serde_json::Value> = match details {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            other => {
                return Err(BillmateError::LoggingError(format!(
                    "Log details for {} must be an object, got {}",
                    action, other
                )));
            }
        };
        let entry = AppLog {
            id: Uuid::new_v4().to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            action: action.to_string(),
            user_id: user_id.map(String::from),
            details,
            timestamp: chrono::Utc::now(),
        };
        let mut homes = self.homes.write().await;
        homes.entry(spreadsheet_id.to_string()).or_default().push(entry);
        Ok(())
    }

    async fn home_logs(&self, spreadsheet_id: &str) -> Result<Vec<AppLog>, BillmateError> {
        let homes = self.homes.read().await;
        Ok(homes.get(spreadsheet_id).cloned().unwrap_or_default())
    }
}
