use serde::{Deserialize, Serialize};

/// A transaction webhook registration. `webhook_id` (wire `id`) is the
/// natural key; the surrogate `id` only exists in storage.
///
/// A registration is cached 1:1 with its remote counterpart. When removing
/// one, delete it remotely first, then locally, so the cache never points
/// at a hook that outlives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Webhook {
    #[serde(skip)]
    pub id: i64,
    pub account_id: String,
    #[serde(rename = "id")]
    pub webhook_id: String,
    pub url: String,
}

/// Envelope for the webhook listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Webhooks {
    pub webhooks: Vec<Webhook>,
}

/// Envelope for the webhook creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookBody {
    pub webhook: Webhook,
}
