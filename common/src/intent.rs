//! Client-side checks run before a transfer is offered for confirmation.
//!
//! Nothing here talks to a network or signs anything. A successful
//! [`validate`] only means the transfer is well-formed and affordable
//! according to the cached balance; submission is a separate step that the
//! caller performs after the user confirms.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::amount::parse_decimal;
use crate::wallet::Wallet;

/// Why a transfer was rejected. Checked in declaration order; the first
/// failing rule is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize)]
pub enum ValidationError {
    #[error("Please select a wallet to send from")]
    NoWalletSelected,
    #[error("Please enter recipient address")]
    MissingRecipient,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Insufficient balance")]
    InsufficientBalance,
}

/// A validated, not-yet-submitted transfer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionIntent<'a> {
    pub source: &'a Wallet,
    /// Recipient as entered, minus surrounding whitespace. Not checked
    /// against any chain's address format.
    pub recipient: String,
    pub amount: Decimal,
    pub note: Option<String>,
}

impl<'a> TransactionIntent<'a> {
    /// Attach a free-text note. Blank notes are dropped.
    pub fn with_note(mut self, note: &str) -> Self {
        let trimmed = note.trim();
        self.note = if trimmed.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
        self
    }
}

/// Validate a candidate transfer from `source` to `recipient` of `amount_text`.
pub fn validate<'a>(
    source: Option<&'a Wallet>,
    recipient: &str,
    amount_text: &str,
) -> Result<TransactionIntent<'a>, ValidationError> {
    let source = source.ok_or(ValidationError::NoWalletSelected)?;

    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ValidationError::MissingRecipient);
    }

    let amount = parse_decimal(amount_text)
        .filter(|a| *a > Decimal::ZERO)
        .ok_or(ValidationError::InvalidAmount)?;

    if amount > source.balance {
        return Err(ValidationError::InsufficientBalance);
    }

    Ok(TransactionIntent {
        source,
        recipient: recipient.to_string(),
        amount,
        note: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Chain;
    use rust_decimal_macros::dec;

    fn eth_wallet() -> Wallet {
        Wallet::new(2u64, "0x742d35Cc6634C0532925a3b8D4C9db4C4C4C4C4C", Chain::Ethereum, dec!(2.3), true)
    }

    #[test]
    fn accepts_affordable_transfer() {
        let w = eth_wallet();
        let intent = validate(Some(&w), "0xabc", "1.5").unwrap();
        assert_eq!(intent.amount, dec!(1.5));
        assert_eq!(intent.recipient, "0xabc");
        assert_eq!(intent.source.id, w.id);
        assert_eq!(intent.note, None);
    }

    #[test]
    fn full_balance_is_affordable() {
        let w = eth_wallet();
        assert_eq!(validate(Some(&w), "0xabc", "2.3").unwrap().amount, dec!(2.3));
        assert_eq!(validate(Some(&w), "0xabc", "2.30000").unwrap().amount, dec!(2.3));
    }

    #[test]
    fn recipient_is_trimmed() {
        let w = eth_wallet();
        let intent = validate(Some(&w), "  0xabc\n", "1").unwrap();
        assert_eq!(intent.recipient, "0xabc");
    }

    #[test]
    fn missing_wallet_wins_over_everything() {
        assert_eq!(validate(None, "", "abc"), Err(ValidationError::NoWalletSelected));
    }

    #[test]
    fn blank_recipient_rejected_before_amount() {
        let w = eth_wallet();
        assert_eq!(validate(Some(&w), "   ", "abc"), Err(ValidationError::MissingRecipient));
        assert_eq!(validate(Some(&w), "", "999"), Err(ValidationError::MissingRecipient));
    }

    #[test]
    fn non_positive_amounts_rejected() {
        let w = eth_wallet();
        for text in ["0", "-1", "0.000", "", "abc", "1.2.3"] {
            assert_eq!(
                validate(Some(&w), "0xabc", text),
                Err(ValidationError::InvalidAmount),
                "{text:?}"
            );
        }
    }

    #[test]
    fn over_balance_rejected() {
        let w = eth_wallet();
        assert_eq!(
            validate(Some(&w), "0xabc", "2.3000001"),
            Err(ValidationError::InsufficientBalance)
        );
    }

    #[test]
    fn note_is_attached_unless_blank() {
        let w = eth_wallet();
        let intent = validate(Some(&w), "0xabc", "1").unwrap().with_note("rent");
        assert_eq!(intent.note.as_deref(), Some("rent"));
        let intent = validate(Some(&w), "0xabc", "1").unwrap().with_note("  ");
        assert_eq!(intent.note, None);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ValidationError::InsufficientBalance.to_string(), "Insufficient balance");
        assert_eq!(
            ValidationError::NoWalletSelected.to_string(),
            "Please select a wallet to send from"
        );
    }
}
