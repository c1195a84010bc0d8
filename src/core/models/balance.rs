use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Net position of one roommate relative to the manager.
///
/// Positive `amount_owed` means the roommate owes the manager, negative means
/// the manager owes the roommate.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RoommateBalance {
    pub name: String,
    pub amount_owed: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalanceStatus {
    Owes,
    Credit,
    Settled,
}

impl BalanceStatus {
    pub fn of(amount_owed: f64) -> Self {
        if amount_owed > 0.0 {
            BalanceStatus::Owes
        } else if amount_owed < 0.0 {
            BalanceStatus::Credit
        } else {
            BalanceStatus::Settled
        }
    }
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BalanceStatus::Owes => "OWES",
            BalanceStatus::Credit => "CREDIT",
            BalanceStatus::Settled => "SETTLED",
        };
        write!(f, "{}", s)
    }
}
