//! Plain data records for the Monzo API surface.
//!
//! Each record declares its wire field names via serde renames; the kinds
//! that are cached locally (`User`, `Account`, `Webhook`) also derive
//! `sqlx::FromRow` with storage column names matching their field names.

mod account;
mod balance;
mod budget;
mod pot;
mod transaction;
mod user;
mod webhook;

pub use account::{Account, Accounts};
pub use balance::Balance;
pub use budget::Budget;
pub use pot::{Pot, Pots};
pub use transaction::{Merchant, Transaction, TransactionData};
pub use user::{User, WhoAmI};
pub use webhook::{Webhook, WebhookBody, Webhooks};
