use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Monzo current account. `account_id` (wire `id`) is the natural key
/// used by every API call; the surrogate `id` only exists in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    #[serde(skip)]
    pub id: i64,
    /// Owning user; assigned by the caller when caching, never on the wire.
    #[serde(skip)]
    pub user_id: String,
    #[serde(rename = "id")]
    pub account_id: String,
    pub description: String,
    pub created: DateTime<Utc>,
}

/// Envelope for the account listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Accounts {
    pub accounts: Vec<Account>,
}
