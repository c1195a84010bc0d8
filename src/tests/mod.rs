mod format_tests;
mod rows_tests;
mod sheets_tests;

use crate::api::handlers::AppService;
use crate::core::models::session::Session;
use crate::core::services::{BillmateService, ServiceSettings};
use crate::infrastructure::auth::jwt::JwtService;
use crate::infrastructure::invites::in_memory::InMemoryInvites;
use crate::infrastructure::ledger::sheet::SheetLedger;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::sheets::in_memory::InMemorySpreadsheets;

pub fn create_test_service() -> AppService {
    BillmateService::new(
        SheetLedger::new(InMemorySpreadsheets::new()),
        InMemoryLogging::new(),
        JwtService::new("test-secret".to_string(), 3600),
        InMemoryInvites::new(),
        ServiceSettings::default(),
    )
}

pub fn session(email: &str, display_name: &str) -> Session {
    Session {
        email: email.to_string(),
        display_name: display_name.to_string(),
        access_token: format!("token-{}", email),
    }
}
