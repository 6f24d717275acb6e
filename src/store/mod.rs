//! Local cache for credentials, accounts, and webhook registrations.

pub mod db;

pub use db::Store;
