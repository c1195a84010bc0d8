use serde::{Deserialize, Serialize};

/// Signed-in identity plus the token used to reach the ledger store.
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    pub access_token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Everything a ledger call needs: which home, and on whose behalf.
#[derive(Clone, Debug)]
pub struct HomeContext {
    pub spreadsheet_id: String,
    pub session: Session,
}

impl HomeContext {
    pub fn new(spreadsheet_id: impl Into<String>, session: Session) -> Self {
        HomeContext {
            spreadsheet_id: spreadsheet_id.into(),
            session,
        }
    }
}
