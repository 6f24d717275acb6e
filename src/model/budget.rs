use serde::{Deserialize, Serialize};

/// A merchant-to-pot budgeting rule. Read-only value record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub account_id: String,
    pub group_id: String,
    pub merchant_name: String,
    pub pot_id: String,
    pub pot_name: String,
    pub currency: String,
}
