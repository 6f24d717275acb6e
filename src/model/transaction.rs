use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Merchant details embedded in transaction payloads. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub logo: String,
}

/// A transaction event as delivered to a registered webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: TransactionData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionData {
    pub id: String,
    pub account_id: String,
    pub description: String,
    pub category: String,
    pub amount: i64,
    pub currency: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub is_load: bool,
    pub merchant: Option<Merchant>,
}
