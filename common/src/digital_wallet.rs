use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host platform the app shell runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Phone wallets a card can be pushed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalWalletKind {
    ApplePay,
    GooglePay,
    SamsungPay,
}

impl DigitalWalletKind {
    /// Identifier used by the card provisioning API.
    pub fn id(self) -> &'static str {
        match self {
            DigitalWalletKind::ApplePay => "apple_pay",
            DigitalWalletKind::GooglePay => "google_pay",
            DigitalWalletKind::SamsungPay => "samsung_pay",
        }
    }

    /// Whether the platform's native wallet can accept this kind.
    pub fn available_on(self, platform: Platform) -> bool {
        match platform {
            Platform::Ios => self == DigitalWalletKind::ApplePay,
            Platform::Android => matches!(
                self,
                DigitalWalletKind::GooglePay | DigitalWalletKind::SamsungPay
            ),
            Platform::Web => false,
        }
    }
}

impl fmt::Display for DigitalWalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DigitalWalletKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "apple_pay" => Ok(DigitalWalletKind::ApplePay),
            "google_pay" => Ok(DigitalWalletKind::GooglePay),
            "samsung_pay" => Ok(DigitalWalletKind::SamsungPay),
            other => Err(format!("unknown digital wallet: {other}")),
        }
    }
}

/// A catalog entry for a digital wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalWallet {
    pub kind: DigitalWalletKind,
    pub name: String,
}

impl DigitalWallet {
    pub fn new(kind: DigitalWalletKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Every digital wallet the app knows about.
pub fn default_catalog() -> Vec<DigitalWallet> {
    vec![
        DigitalWallet::new(DigitalWalletKind::ApplePay, "Apple Pay"),
        DigitalWallet::new(DigitalWalletKind::GooglePay, "Google Pay"),
        DigitalWallet::new(DigitalWalletKind::SamsungPay, "Samsung Pay"),
    ]
}

/// Catalog entries usable on `platform`, in catalog order.
pub fn supported_wallets(platform: Platform, catalog: &[DigitalWallet]) -> Vec<DigitalWallet> {
    catalog
        .iter()
        .filter(|w| w.kind.available_on(platform))
        .cloned()
        .collect()
}
