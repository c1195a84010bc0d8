pub mod in_memory;

use crate::core::errors::BillmateError;
use crate::core::models::invite::Invite;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait InviteStore: Send + Sync {
    async fn save_invite(&self, invite: Invite) -> Result<(), BillmateError>;
    async fn get_invite(&self, token: &str) -> Result<Option<Invite>, BillmateError>;
    /// Checks the invite is usable at `now` and counts one use, atomically.
    /// Returns the spreadsheet id it grants.
    async fn consume_invite(&self, token: &str, now: DateTime<Utc>) -> Result<String, BillmateError>;
}
