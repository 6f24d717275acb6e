use serde::{Deserialize, Serialize};

/// Read-only balance snapshot for one account. Amounts are minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: i64,
    pub total_balance: i64,
    pub spend_today: i64,
    pub currency: String,
}
