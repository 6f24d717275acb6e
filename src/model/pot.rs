use serde::{Deserialize, Serialize};

/// A savings pot attached to a current account.
///
/// Deleted pots still appear in listings; deposits and withdrawals against
/// them are rejected upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    #[serde(rename = "id")]
    pub pot_id: String,
    pub name: String,
    /// Owning account; not present in pot listing responses.
    #[serde(default)]
    pub account_id: String,
    pub balance: i64,
    pub currency: String,
    #[serde(default)]
    pub deleted: bool,
}

/// Envelope for the pot listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pots {
    pub pots: Vec<Pot>,
}

impl Pots {
    pub fn by_name(&self, name: &str) -> Option<&Pot> {
        self.pots.iter().find(|pot| pot.name == name)
    }
}
