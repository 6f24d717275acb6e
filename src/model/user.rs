use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// OAuth credential for a single Monzo user, as returned by the token
/// endpoint and cached in the `users` table.
///
/// `expiry_date` is never sent by Monzo; it is recomputed locally from
/// `expires_in` after every exchange so callers can decide when to refresh.
/// Nothing in the client consults it implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Storage surrogate key; not on the wire.
    #[serde(skip)]
    pub id: i64,
    pub user_id: String,
    pub client_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    #[serde(default = "unix_epoch")]
    pub expiry_date: DateTime<Utc>,
    pub token_type: String,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl User {
    /// Sets `expiry_date = now + expires_in`. Must be called every time
    /// `expires_in` changes.
    pub fn update_expiry(&mut self) {
        self.expiry_date = Utc::now() + Duration::seconds(self.expires_in);
    }

    pub fn is_expired(&self) -> bool {
        self.expiry_date < Utc::now()
    }
}

/// Response of the `/ping/whoami` token liveness check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoAmI {
    pub authenticated: bool,
    pub client_id: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(expires_in: i64) -> User {
        User {
            id: 0,
            user_id: "user_1".into(),
            client_id: "client_1".into(),
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            expires_in,
            expiry_date: unix_epoch(),
            token_type: "Bearer".into(),
        }
    }

    #[test]
    fn update_expiry_adds_expires_in_seconds_to_now() {
        let mut user = test_user(21600);
        user.update_expiry();

        let delta = user.expiry_date - Utc::now();
        assert!(delta.num_seconds() >= 21598 && delta.num_seconds() <= 21600);
    }

    #[test]
    fn is_expired_tracks_expiry_date() {
        let mut user = test_user(3600);
        user.update_expiry();
        assert!(!user.is_expired());

        user.expires_in = -1;
        user.update_expiry();
        assert!(user.is_expired());
    }

    #[test]
    fn decodes_token_endpoint_response_without_expiry_date() {
        let user: User = serde_json::from_str(
            r#"{
                "user_id": "user_1",
                "client_id": "client_1",
                "access_token": "access",
                "refresh_token": "refresh",
                "expires_in": 21600,
                "token_type": "Bearer"
            }"#,
        )
        .unwrap();

        assert_eq!(user.user_id, "user_1");
        assert_eq!(user.expires_in, 21600);
        assert_eq!(user.expiry_date, unix_epoch());
    }
}
