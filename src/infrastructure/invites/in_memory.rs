use crate::core::errors::BillmateError;
use crate::core::invites::normalize_token;
use crate::core::models::invite::Invite;
use crate::infrastructure::invites::InviteStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryInvites {
    invites: Arc<RwLock<HashMap<String, Invite>>>,
}

impl InMemoryInvites {
    pub fn new() -> Self {
        InMemoryInvites {
            invites: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn deactivate(&self, token: &str) -> Result<(), BillmateError> {
        let mut invites = self.invites.write().await;
        let invite = invites
            .get_mut(&normalize_token(token))
            .ok_or(BillmateError::InviteNotFound)?;
        invite.active = false;
        Ok(())
    }
}

impl Default for InMemoryInvites {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InviteStore for InMemoryInvites {
    async fn save_invite(&self, invite: Invite) -> Result<(), BillmateError> {
        let mut invites = self.invites.write().await;
        invites.insert(normalize_token(&invite.token), invite);
        Ok(())
    }

    async fn get_invite(&self, token: &str) -> Result<Option<Invite>, BillmateError> {
        let invites = self.invites.read().await;
        Ok(invites.get(&normalize_token(token)).cloned())
    }

    async fn consume_invite(&self, token: &str, now: DateTime<Utc>) -> Result<String, BillmateError> {
        let token = normalize_token(token);
        if token.is_empty() {
            return Err(BillmateError::invalid_input("token", "Invalid token", "Token is empty"));
        }

        // Held across check and increment so two redemptions cannot both take the last use.
        let mut invites = self.invites.write().await;
        let invite = invites.get_mut(&token).ok_or(BillmateError::InviteNotFound)?;

        if !invite.active {
            return Err(BillmateError::InviteInactive);
        }
        if now > invite.expires_at {
            return Err(BillmateError::InviteExpired);
        }
        if invite.spreadsheet_id.is_empty() {
            return Err(BillmateError::InvalidInvite);
        }
        if invite.max_uses > 0 && invite.uses >= invite.max_uses {
            return Err(BillmateError::InviteExhausted);
        }

        invite.uses += 1;
        Ok(invite.spreadsheet_id.clone())
    }
}
