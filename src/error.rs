use reqwest::StatusCode;

/// Unified error type for the monzo-client crate.
///
/// Monzo reports business conditions (insufficient funds, deleted pot,
/// expired token) only through the body of a non-2xx response, so
/// `Upstream` carries that body verbatim for callers to match on.
#[derive(Debug, thiserror::Error)]
pub enum MonzoError {
    // ── Transport / decode ──────────────────────────────────────────────
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    // ── Upstream API ────────────────────────────────────────────────────
    #[error("monzo returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    // ── Lookup misses ───────────────────────────────────────────────────
    #[error("{0} not found")]
    NotFound(&'static str),

    // ── Configuration ───────────────────────────────────────────────────
    #[error("missing configuration: {0}")]
    Config(&'static str),

    // ── Storage ─────────────────────────────────────────────────────────
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for MonzoError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("database error: {e}");
        MonzoError::Database(e.to_string())
    }
}
