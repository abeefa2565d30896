use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Blockchain network a wallet lives on.
///
/// Names are matched case-insensitively ("Bitcoin" and "bitcoin" are the same
/// chain). Networks the app has no picker entry for are kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chain {
    Bitcoin,
    Ethereum,
    Solana,
    Tron,
    Bnb,
    Other(String),
}

impl Chain {
    /// Chains offered when creating a new wallet, in picker order.
    pub fn all() -> &'static [Chain] {
        &[
            Chain::Bitcoin,
            Chain::Ethereum,
            Chain::Solana,
            Chain::Tron,
            Chain::Bnb,
        ]
    }

    /// Canonical lowercase network name, as stored by the backend.
    pub fn name(&self) -> &str {
        match self {
            Chain::Bitcoin => "bitcoin",
            Chain::Ethereum => "ethereum",
            Chain::Solana => "solana",
            Chain::Tron => "tron",
            Chain::Bnb => "bnb",
            Chain::Other(name) => name,
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &str {
        match self {
            Chain::Bitcoin => "Bitcoin",
            Chain::Ethereum => "Ethereum",
            Chain::Solana => "Solana",
            Chain::Tron => "Tron",
            Chain::Bnb => "BNB",
            Chain::Other(name) => name,
        }
    }

    /// Ticker of the native unit. Unknown chains fall back to their
    /// uppercased name.
    pub fn symbol(&self) -> String {
        match self {
            Chain::Bitcoin => "BTC".into(),
            Chain::Ethereum => "ETH".into(),
            Chain::Solana => "SOL".into(),
            Chain::Tron => "TRX".into(),
            Chain::Bnb => "BNB".into(),
            Chain::Other(name) => name.to_uppercase(),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chain = match trimmed.to_ascii_lowercase().as_str() {
            "bitcoin" => Chain::Bitcoin,
            "ethereum" => Chain::Ethereum,
            "solana" => Chain::Solana,
            "tron" => Chain::Tron,
            "bnb" => Chain::Bnb,
            _ => Chain::Other(trimmed.to_string()),
        };
        Ok(chain)
    }
}

// Custom serde: chains travel as their plain network name.
impl Serialize for Chain {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Chain {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name: String = Deserialize::deserialize(deserializer)?;
        if name.trim().is_empty() {
            return Err(serde::de::Error::custom("chain name must not be empty"));
        }
        match name.parse() {
            Ok(chain) => Ok(chain),
            Err(never) => match never {},
        }
    }
}
