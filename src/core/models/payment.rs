use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `Payments` tab: a roommate paying the manager back.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaymentRecord {
    pub date: String,
    pub paid_by: String,
    pub amount: f64,
    pub note: String,
}
