use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chain::Chain;

/// Wallet identifier. The backend hands out numeric ids; mock stores and
/// imports may use strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WalletId {
    Numeric(u64),
    Named(String),
}

impl WalletId {
    /// Interpret user input: digits become a numeric id, anything else a named one.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => WalletId::Numeric(n),
            Err(_) => WalletId::Named(trimmed.to_string()),
        }
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletId::Numeric(n) => write!(f, "{n}"),
            WalletId::Named(s) => f.write_str(s),
        }
    }
}

impl From<u64> for WalletId {
    fn from(n: u64) -> Self {
        WalletId::Numeric(n)
    }
}

impl From<&str> for WalletId {
    fn from(s: &str) -> Self {
        WalletId::Named(s.to_string())
    }
}

fn default_active() -> bool {
    true
}

/// One blockchain account and its cached balance.
///
/// Owned by the wallet data source; the core only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub address: String,
    pub chain: Chain,
    /// Balance in the chain's native unit. Never negative.
    pub balance: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Wallet {
    pub fn new(
        id: impl Into<WalletId>,
        address: impl Into<String>,
        chain: Chain,
        balance: Decimal,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            chain,
            balance,
            is_active,
        }
    }
}

/// Look up a wallet by id.
pub fn find_wallet<'a>(wallets: &'a [Wallet], id: &WalletId) -> Option<&'a Wallet> {
    wallets.iter().find(|w| &w.id == id)
}
