use crate::error::MonzoError;

/// OAuth application credentials, loaded from environment variables.
///
/// Nothing reads the environment at startup; a missing variable surfaces
/// as `MonzoError::Config` the first time a flow needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Monzo OAuth client id.
    pub client_id: String,
    /// Monzo OAuth client secret.
    pub client_secret: String,
    /// Redirect URI registered with Monzo for the authorization-code flow.
    pub redirect_uri: String,
    /// Callback URI registered when creating transaction webhooks.
    pub webhook_uri: String,
}

impl Config {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        webhook_uri: impl Into<String>,
    ) -> Self {
        Config {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            webhook_uri: webhook_uri.into(),
        }
    }

    pub fn from_env() -> Result<Self, MonzoError> {
        Ok(Config {
            client_id: require("MONZO_CLIENT_ID")?,
            client_secret: require("MONZO_CLIENT_SECRET")?,
            redirect_uri: require("MONZO_REDIRECT_URI")?,
            webhook_uri: require("MONZO_WEBHOOK_URI")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, MonzoError> {
    std::env::var(name).map_err(|_| MonzoError::Config(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_var_is_a_config_error() {
        // MONZO_CLIENT_ID is never set in the test environment
        std::env::remove_var("MONZO_CLIENT_ID");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, MonzoError::Config("MONZO_CLIENT_ID")));
    }
}
