pub mod jwt;

use crate::core::errors::BillmateError;
use crate::core::models::session::Session;
use async_trait::async_trait;

/// Source of signed-in identities and the access tokens that go with them.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, display_name: &str) -> Result<Session, BillmateError>;
    async fn authenticate(&self, bearer_token: &str) -> Result<Session, BillmateError>;
}
