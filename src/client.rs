use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::Config;
use crate::endpoints::{Endpoint, Endpoints};
use crate::error::MonzoError;
use crate::model::{
    Account, Accounts, Balance, Pot, Pots, Webhook, WebhookBody, Webhooks, WhoAmI,
};

/// Authenticated Monzo API client, scoped to one access token.
///
/// Holds no mutable state; reuse it for any number of calls while the
/// token is live. It never refreshes the token itself: when the token
/// expires, build a new `Client` from a refreshed credential
/// (see [`OAuthClient::refresh`](crate::OAuthClient::refresh)).
pub struct Client {
    config: Config,
    endpoints: Endpoints,
    token_type: String,
    access_token: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(
        config: Config,
        endpoints: Endpoints,
        token_type: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Client {
            config,
            endpoints,
            token_type: token_type.into(),
            access_token: access_token.into(),
            http: reqwest::Client::new(),
        }
    }

    fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// Token liveness check against `/ping/whoami`. Monzo accepts a bare
    /// PUT here; an expired or revoked token comes back non-2xx.
    pub async fn who_am_i(&self) -> Result<WhoAmI, MonzoError> {
        let resp = self
            .http
            .put(self.endpoints.url(Endpoint::WhoAmI, &[]))
            .header(AUTHORIZATION, self.authorization())
            .form(&[] as &[(&str, &str)])
            .send()
            .await?;

        decode_json(resp).await
    }

    /// List the user's current accounts.
    pub async fn accounts(&self) -> Result<Vec<Account>, MonzoError> {
        tracing::info!("listing accounts");

        let resp = self
            .http
            .get(self.endpoints.url(Endpoint::Accounts, &[]))
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let accounts: Accounts = decode_json(resp).await?;
        Ok(accounts.accounts)
    }

    /// First account in the listing; `NotFound` when the user has none.
    pub async fn current_account(&self) -> Result<Account, MonzoError> {
        let mut accounts = self.accounts().await?;
        if accounts.is_empty() {
            return Err(MonzoError::NotFound("account"));
        }
        Ok(accounts.remove(0))
    }

    pub async fn balance(&self, account_id: &str) -> Result<Balance, MonzoError> {
        tracing::info!(account_id, "fetching balance");

        let resp = self
            .http
            .get(self.endpoints.url(Endpoint::Balance, &[account_id]))
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        decode_json(resp).await
    }

    /// List all pots, deleted ones included. Filter on `Pot::deleted` if
    /// you only want live pots.
    pub async fn pots(&self) -> Result<Pots, MonzoError> {
        tracing::info!("listing pots");

        let resp = self
            .http
            .get(self.endpoints.url(Endpoint::Pots, &[]))
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        decode_json(resp).await
    }

    /// Move money from an account into a pot. Amount is in minor units.
    ///
    /// Every call sends a freshly generated `dedupe_id`; Monzo keys
    /// idempotency on it, so retrying a failed call is a new transfer as
    /// far as the API is concerned.
    pub async fn deposit(
        &self,
        pot_id: &str,
        source_account_id: &str,
        amount: i64,
    ) -> Result<Pot, MonzoError> {
        tracing::info!(pot_id, source_account_id, amount, "depositing into pot");

        let amount = amount.to_string();
        let dedupe_id = Uuid::new_v4().to_string();
        let resp = self
            .http
            .put(self.endpoints.url(Endpoint::PotDeposit, &[pot_id]))
            .header(AUTHORIZATION, self.authorization())
            .form(&[
                ("source_account_id", source_account_id),
                ("amount", &amount),
                ("dedupe_id", &dedupe_id),
            ])
            .send()
            .await?;

        decode_json(resp).await
    }

    /// Move money from a pot back into an account. Same dedupe contract
    /// as [`deposit`](Client::deposit).
    pub async fn withdraw(
        &self,
        pot_id: &str,
        destination_account_id: &str,
        amount: i64,
    ) -> Result<Pot, MonzoError> {
        tracing::info!(pot_id, destination_account_id, amount, "withdrawing from pot");

        let amount = amount.to_string();
        let dedupe_id = Uuid::new_v4().to_string();
        let resp = self
            .http
            .put(self.endpoints.url(Endpoint::PotWithdraw, &[pot_id]))
            .header(AUTHORIZATION, self.authorization())
            .form(&[
                ("destination_account_id", destination_account_id),
                ("amount", &amount),
                ("dedupe_id", &dedupe_id),
            ])
            .send()
            .await?;

        decode_json(resp).await
    }

    /// Register the configured callback URI as a transaction webhook for
    /// an account.
    pub async fn register_webhook(&self, account_id: &str) -> Result<Webhook, MonzoError> {
        tracing::info!(account_id, url = %self.config.webhook_uri, "registering webhook");

        let resp = self
            .http
            .post(self.endpoints.url(Endpoint::WebhookCreate, &[]))
            .header(AUTHORIZATION, self.authorization())
            .form(&[
                ("account_id", account_id),
                ("url", &self.config.webhook_uri),
            ])
            .send()
            .await?;

        let body: WebhookBody = decode_json(resp).await?;
        Ok(body.webhook)
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), MonzoError> {
        tracing::info!(webhook_id, "deleting webhook");

        let resp = self
            .http
            .delete(self.endpoints.url(Endpoint::WebhookDelete, &[webhook_id]))
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        expect_success(resp).await
    }

    pub async fn webhooks(&self, account_id: &str) -> Result<Vec<Webhook>, MonzoError> {
        tracing::info!(account_id, "listing webhooks");

        let resp = self
            .http
            .get(self.endpoints.url(Endpoint::Webhooks, &[account_id]))
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let webhooks: Webhooks = decode_json(resp).await?;
        Ok(webhooks.webhooks)
    }

    /// Inject a basic feed item into the user's in-app feed. Success is
    /// judged by status alone; the response body is ignored.
    pub async fn create_feed_item(
        &self,
        account_id: &str,
        title: &str,
        body: &str,
        image_url: &str,
    ) -> Result<(), MonzoError> {
        tracing::info!(account_id, title, "creating feed item");

        let resp = self
            .http
            .post(self.endpoints.url(Endpoint::FeedItem, &[]))
            .header(AUTHORIZATION, self.authorization())
            .form(&[
                ("account_id", account_id),
                ("type", "basic"),
                ("params[title]", title),
                ("params[body]", body),
                ("params[image_url]", image_url),
            ])
            .send()
            .await?;

        expect_success(resp).await
    }
}

/// Read the whole body, then map status and shape: non-2xx keeps the raw
/// body text in the error so callers can match upstream messages; 2xx is
/// decoded from the captured text so a malformed body is a `Decode`
/// error, not a half-consumed response.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, MonzoError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        tracing::error!(%status, %body, "monzo request failed");
        return Err(MonzoError::Upstream { status, body });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(%body, "failed to decode monzo response: {e}");
        MonzoError::Decode(e)
    })
}

/// Status-only variant for operations whose response body carries nothing.
pub(crate) async fn expect_success(resp: reqwest::Response) -> Result<(), MonzoError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await?;
        tracing::error!(%status, %body, "monzo request failed");
        return Err(MonzoError::Upstream { status, body });
    }
    Ok(())
}
