use std::collections::HashMap;

/// Logical names for every Monzo endpoint the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    WhoAmI,
    OAuthToken,
    Accounts,
    Balance,
    Pots,
    PotDeposit,
    PotWithdraw,
    Webhooks,
    WebhookCreate,
    WebhookDelete,
    FeedItem,
    Transactions,
}

/// Endpoint-name to URL-template table, seeded with the production Monzo
/// URLs. Templates use positional `{}` placeholders.
///
/// Each client owns its own copy, so a test can point one endpoint at a
/// local server without touching any shared state.
#[derive(Debug, Clone)]
pub struct Endpoints {
    urls: HashMap<Endpoint, String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        let mut urls = HashMap::new();
        urls.insert(
            Endpoint::Login,
            "https://auth.monzo.com/?client_id={}&redirect_uri={}&response_type=code&state={}"
                .to_string(),
        );
        urls.insert(
            Endpoint::WhoAmI,
            "https://api.monzo.com/ping/whoami".to_string(),
        );
        urls.insert(
            Endpoint::OAuthToken,
            "https://api.monzo.com/oauth2/token".to_string(),
        );
        urls.insert(
            Endpoint::Accounts,
            "https://api.monzo.com/accounts?account_type=uk_retail".to_string(),
        );
        urls.insert(
            Endpoint::Balance,
            "https://api.monzo.com/balance?account_id={}".to_string(),
        );
        urls.insert(Endpoint::Pots, "https://api.monzo.com/pots".to_string());
        urls.insert(
            Endpoint::PotDeposit,
            "https://api.monzo.com/pots/{}/deposit".to_string(),
        );
        urls.insert(
            Endpoint::PotWithdraw,
            "https://api.monzo.com/pots/{}/withdraw".to_string(),
        );
        urls.insert(
            Endpoint::Webhooks,
            "https://api.monzo.com/webhooks?account_id={}".to_string(),
        );
        urls.insert(
            Endpoint::WebhookCreate,
            "https://api.monzo.com/webhooks".to_string(),
        );
        urls.insert(
            Endpoint::WebhookDelete,
            "https://api.monzo.com/webhooks/{}".to_string(),
        );
        urls.insert(Endpoint::FeedItem, "https://api.monzo.com/feed".to_string());
        urls.insert(
            Endpoint::Transactions,
            "https://api.monzo.com/transactions?account_id={}".to_string(),
        );
        Endpoints { urls }
    }
}

impl Endpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an endpoint URL, substituting `params` for each `{}` in
    /// order. A template without placeholders is returned unchanged and
    /// params are ignored, so an override pointing at a bare test server
    /// URL just works.
    pub fn url(&self, endpoint: Endpoint, params: &[&str]) -> String {
        let template = &self.urls[&endpoint];
        if !template.contains("{}") {
            return template.clone();
        }

        let mut out = template.clone();
        for param in params {
            out = out.replacen("{}", param, 1);
        }
        out
    }

    /// Overwrite a single endpoint URL. Intended for redirecting one
    /// endpoint at a test double; set before the client makes its first
    /// call.
    pub fn set(&mut self, endpoint: Endpoint, url: impl Into<String>) {
        self.urls.insert(endpoint, url.into());
    }
}
