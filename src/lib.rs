//! Typed client for the Monzo banking API: OAuth token lifecycle,
//! accounts, balances, pots, webhooks, and feed items, plus a small
//! SQLite-backed cache for credentials, accounts, and webhook
//! registrations.
//!
//! Typical flow: send the user to [`OAuthClient::login_url`], exchange the
//! returned code with [`OAuthClient::exchange_code`], then build a
//! [`Client`] from the credential's `(token_type, access_token)` pair and
//! call the API. Persist the credential with [`Store::upsert_user`] and
//! refresh it explicitly via [`OAuthClient::refresh`] when it expires;
//! the client never refreshes on its own.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod oauth;
pub mod store;

pub use client::Client;
pub use config::Config;
pub use endpoints::{Endpoint, Endpoints};
pub use error::MonzoError;
pub use oauth::OAuthClient;
pub use store::Store;
