use crate::client::decode_json;
use crate::config::Config;
use crate::endpoints::{Endpoint, Endpoints};
use crate::error::MonzoError;
use crate::model::User;

/// Monzo OAuth 2.0 flows: the authorization-code redirect and the two
/// token exchanges. These run before any access token exists, so they are
/// separate from the authenticated [`Client`](crate::Client).
///
/// Refresh quirks:
/// - Monzo rotates the refresh token on every exchange; always store the
///   returned one.
/// - A revoked or already-used refresh token comes back as a non-2xx
///   response; treat that as "send the user through `login_url` again".
pub struct OAuthClient {
    config: Config,
    endpoints: Endpoints,
    http: reqwest::Client,
}

impl OAuthClient {
    pub fn new(config: Config, endpoints: Endpoints) -> Self {
        OAuthClient {
            config,
            endpoints,
            http: reqwest::Client::new(),
        }
    }

    /// Build the authorization redirect URL with an opaque CSRF `state`
    /// parameter. No network call.
    pub fn login_url(&self, state: &str) -> String {
        self.endpoints.url(
            Endpoint::Login,
            &[
                &urlencoding(&self.config.client_id),
                &urlencoding(&self.config.redirect_uri),
                &urlencoding(state),
            ],
        )
    }

    /// Exchange an authorization code for a credential set.
    pub async fn exchange_code(&self, code: &str) -> Result<User, MonzoError> {
        tracing::info!("exchanging authorization code for tokens");

        let resp = self
            .http
            .post(self.endpoints.url(Endpoint::OAuthToken, &[]))
            .form(&[
                ("grant_type", "authorization_code"),
                ("client_id", &self.config.client_id),
                ("client_secret", &self.config.client_secret),
                ("redirect_uri", &self.config.redirect_uri),
                ("code", code),
            ])
            .send()
            .await?;

        let mut user: User = decode_json(resp).await?;
        user.update_expiry();
        Ok(user)
    }

    /// Exchange a refresh token for a fresh credential set.
    pub async fn refresh(&self, refresh_token: &str) -> Result<User, MonzoError> {
        tracing::info!("refreshing access token");

        let resp = self
            .http
            .post(self.endpoints.url(Endpoint::OAuthToken, &[]))
            .form(&[
                ("grant_type", "refresh_token"),
                ("client_id", &self.config.client_id),
                ("client_secret", &self.config.client_secret),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;

        let mut user: User = decode_json(resp).await?;
        user.update_expiry();
        Ok(user)
    }
}

fn urlencoding(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
