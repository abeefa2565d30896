use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digital_wallet::{DigitalWalletKind, Platform};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Virtual,
    Physical,
}

/// Billing currency of an issued card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCurrency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Active,
    Inactive,
    Canceled,
}

/// A card issued to the user, as listed by the card service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub brand: String,
    /// Last four digits of the PAN, when the issuer exposes them.
    #[serde(default)]
    pub last4: Option<String>,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub status: CardStatus,
    #[serde(default)]
    pub card_type: CardType,
    #[serde(default)]
    pub currency: CardCurrency,
}

impl Card {
    /// e.g. "VISA ****4242"
    pub fn masked_label(&self) -> String {
        format!(
            "{} ****{}",
            self.brand.to_uppercase(),
            self.last4.as_deref().unwrap_or("")
        )
    }

    pub fn expiry_label(&self) -> String {
        format!("Expires {:02}/{}", self.expiry_month, self.expiry_year)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CardFormError {
    #[error("Please enter a cardholder ID")]
    MissingCardholder,
}

/// "Add new card" form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardForm {
    pub cardholder_id: String,
    pub card_type: CardType,
    pub currency: CardCurrency,
}

impl CardForm {
    pub fn validate(&self) -> Result<(), CardFormError> {
        if self.cardholder_id.trim().is_empty() {
            return Err(CardFormError::MissingCardholder);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ProvisioningError {
    #[error("Please select a card")]
    NoCardSelected,
    #[error("Please select a wallet type")]
    NoWalletSelected,
    #[error("This wallet is not available on this device")]
    UnsupportedOnPlatform,
}

/// A checked "add card to phone wallet" request. Building one does not
/// contact any wallet provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProvisioningRequest {
    pub card_id: String,
    pub wallet: DigitalWalletKind,
}

impl ProvisioningRequest {
    pub fn new(
        card_id: Option<&str>,
        wallet: Option<DigitalWalletKind>,
        platform: Platform,
    ) -> Result<Self, ProvisioningError> {
        let card_id = card_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ProvisioningError::NoCardSelected)?;
        let wallet = wallet.ok_or(ProvisioningError::NoWalletSelected)?;
        if !wallet.available_on(platform) {
            return Err(ProvisioningError::UnsupportedOnPlatform);
        }
        Ok(Self {
            card_id: card_id.to_string(),
            wallet,
        })
    }
}
