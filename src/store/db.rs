//! SQLite-backed cache. Tables:
//! - `users`: one OAuth credential set per Monzo user
//! - `accounts`: cached account rows, keyed by the external account id
//! - `webhooks`: local mirror of remote webhook registrations
//!
//! Each table pairs a surrogate integer primary key with one natural-key
//! column (`user_id`, `account_id`, `webhook_id`). Upserts are explicit
//! read-then-write with no transaction wrapping; the intended usage is a
//! single writer per natural key (one session per user).

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error::MonzoError;
use crate::model::{Account, User, Webhook};

/// Typed repository over the cache database, one set of functions per
/// record kind.
pub struct Store {
    pub pool: SqlitePool,
}

impl Store {
    /// Connect to a SQLite database, e.g. `sqlite://monzo.db?mode=rwc`.
    pub async fn connect(db_url: &str) -> Result<Self, MonzoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await?;

        Ok(Store { pool })
    }

    /// Wrap an existing pool. An in-memory pool must be limited to a
    /// single connection, otherwise each pooled connection sees its own
    /// empty database.
    pub fn new(pool: SqlitePool) -> Self {
        Store { pool }
    }

    /// Create the schema.
    pub async fn migrate(&self) -> Result<(), MonzoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id       TEXT NOT NULL,
                client_id     TEXT NOT NULL,
                access_token  TEXT NOT NULL,
                refresh_token TEXT NOT NULL,
                expires_in    INTEGER NOT NULL,
                expiry_date   TEXT NOT NULL,
                token_type    TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id     TEXT NOT NULL,
                account_id  TEXT NOT NULL,
                description TEXT NOT NULL,
                created     TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS webhooks (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                account_id TEXT NOT NULL,
                webhook_id TEXT NOT NULL,
                url        TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ── users ───────────────────────────────────────────────────────────

    pub async fn user(&self, user_id: &str) -> Result<User, MonzoError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MonzoError::NotFound("user"))
    }

    /// Insert or update the credential row for `user.user_id`.
    pub async fn upsert_user(&self, user: &User) -> Result<(), MonzoError> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE user_id = $1")
            .bind(&user.user_id)
            .fetch_optional(&self.pool)
            .await?;

        match existing {
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO users
                        (user_id, client_id, access_token, refresh_token,
                         expires_in, expiry_date, token_type)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(&user.user_id)
                .bind(&user.client_id)
                .bind(&user.access_token)
                .bind(&user.refresh_token)
                .bind(user.expires_in)
                .bind(user.expiry_date)
                .bind(&user.token_type)
                .execute(&self.pool)
                .await?;
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE users
                    SET client_id = $1,
                        access_token = $2,
                        refresh_token = $3,
                        expires_in = $4,
                        expiry_date = $5,
                        token_type = $6
                    WHERE id = $7
                    "#,
                )
                .bind(&user.client_id)
                .bind(&user.access_token)
                .bind(&user.refresh_token)
                .bind(user.expires_in)
                .bind(user.expiry_date)
                .bind(&user.token_type)
                .bind(id)
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    // ── accounts ────────────────────────────────────────────────────────

    pub async fn account(&self, account_id: &str) -> Result<Account, MonzoError> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE account_id = $1")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MonzoError::NotFound("account"))
    }

    pub async fn account_by_user(&self, user_id: &str) -> Result<Account, MonzoError> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MonzoError::NotFound("account"))
    }

    /// Insert or update the cached row for `account.account_id`.
    pub async fn upsert_account(&self, account: &Account) -> Result<(), MonzoError> {
        let existing =
            sqlx::query_scalar::<_, i64>("SELECT id FROM accounts WHERE account_id = $1")
                .bind(&account.account_id)
                .fetch_optional(&self.pool)
                .await?;

        match existing {
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO accounts (user_id, account_id, description, created)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(&account.user_id)
                .bind(&account.account_id)
                .bind(&account.description)
                .bind(account.created)
                .execute(&self.pool)
                .await?;
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE accounts
                    SET user_id = $1,
                        description = $2,
                        created = $3
                    WHERE id = $4
                    "#,
                )
                .bind(&account.user_id)
                .bind(&account.description)
                .bind(account.created)
                .bind(id)
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    // ── webhooks ────────────────────────────────────────────────────────

    pub async fn webhook(&self, webhook_id: &str) -> Result<Webhook, MonzoError> {
        sqlx::query_as::<_, Webhook>("SELECT * FROM webhooks WHERE webhook_id = $1")
            .bind(webhook_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MonzoError::NotFound("webhook"))
    }

    /// Record a fresh registration. One row per remote webhook; callers
    /// register remotely first, then save.
    pub async fn save_webhook(&self, webhook: &Webhook) -> Result<(), MonzoError> {
        sqlx::query(
            r#"
            INSERT INTO webhooks (account_id, webhook_id, url)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&webhook.account_id)
        .bind(&webhook.webhook_id)
        .bind(&webhook.url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the local row for an external webhook id. Delete the remote
    /// registration first, then call this; a miss is surfaced as
    /// `NotFound`, never swallowed.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), MonzoError> {
        let existing =
            sqlx::query_scalar::<_, i64>("SELECT id FROM webhooks WHERE webhook_id = $1")
                .bind(webhook_id)
                .fetch_optional(&self.pool)
                .await?;

        let id = existing.ok_or(MonzoError::NotFound("webhook"))?;

        sqlx::query("DELETE FROM webhooks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
