//! Send screen state: raw form fields, the confirmation step, and the hand-off
//! to whatever actually executes a transfer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intent::{validate, TransactionIntent, ValidationError};
use crate::wallet::{find_wallet, Wallet, WalletId};

/// Receipt returned after a transfer was handed to a submitter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Submitter-assigned reference for the transfer.
    pub tx_ref: String,
    pub wallet_id: WalletId,
    pub recipient: String,
    pub amount: Decimal,
    pub submitted_at: DateTime<Utc>,
}

/// Errors from transfer submission.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SubmitError {
    #[error("transfer rejected: {0}")]
    Rejected(String),
    #[error("submitter unavailable: {0}")]
    Unavailable(String),
}

/// Abstraction over transfer execution (backend API, custodial provider, mock).
pub trait TransferSubmitter {
    /// Execute a confirmed transfer.
    fn submit(&mut self, intent: &TransactionIntent<'_>) -> Result<TransferReceipt, SubmitError>;

    /// Human-readable submitter name (e.g. "mock").
    fn submitter_name(&self) -> &str;
}

/// Mock submitter for development.
///
/// Every transfer "succeeds" with a sequential reference unless a failure
/// has been configured. Nothing leaves the process.
#[derive(Debug, Default)]
pub struct MockSubmitter {
    counter: u64,
    fail_with: Option<SubmitError>,
    submitted: Vec<TransferReceipt>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submitter that rejects every transfer with `err`.
    pub fn failing(err: SubmitError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    /// Receipts of every transfer accepted so far.
    pub fn submitted(&self) -> &[TransferReceipt] {
        &self.submitted
    }
}

impl TransferSubmitter for MockSubmitter {
    fn submit(&mut self, intent: &TransactionIntent<'_>) -> Result<TransferReceipt, SubmitError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.counter += 1;
        let receipt = TransferReceipt {
            tx_ref: format!("mock-tx-{}", self.counter),
            wallet_id: intent.source.id.clone(),
            recipient: intent.recipient.clone(),
            amount: intent.amount,
            submitted_at: Utc::now(),
        };
        self.submitted.push(receipt.clone());
        Ok(receipt)
    }

    fn submitter_name(&self) -> &str {
        "mock"
    }
}

/// Raw send-form fields as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendForm {
    pub selected: Option<WalletId>,
    pub recipient: String,
    pub amount: String,
    pub note: String,
}

impl SendForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: WalletId) {
        self.selected = Some(id);
    }

    /// The "MAX" button: fill in the selected wallet's whole balance.
    /// Does nothing when no known wallet is selected.
    pub fn fill_max(&mut self, wallets: &[Wallet]) {
        if let Some(wallet) = self.selected_wallet(wallets) {
            self.amount = wallet.balance.normalize().to_string();
        }
    }

    fn selected_wallet<'a>(&self, wallets: &'a [Wallet]) -> Option<&'a Wallet> {
        self.selected
            .as_ref()
            .and_then(|id| find_wallet(wallets, id))
    }

    /// Validate the form against the current wallets. A selection that is no
    /// longer in `wallets` counts as no selection.
    pub fn prepare<'a>(&self, wallets: &'a [Wallet]) -> Result<PendingTransfer<'a>, ValidationError> {
        let intent = validate(self.selected_wallet(wallets), &self.recipient, &self.amount)?
            .with_note(&self.note);
        Ok(PendingTransfer { intent })
    }

    /// Clear everything but the wallet selection, as after a successful send.
    pub fn reset(&mut self) {
        self.recipient.clear();
        self.amount.clear();
        self.note.clear();
    }
}

/// A validated transfer waiting for the user's go-ahead.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTransfer<'a> {
    intent: TransactionIntent<'a>,
}

impl<'a> PendingTransfer<'a> {
    pub fn intent(&self) -> &TransactionIntent<'a> {
        &self.intent
    }

    /// Confirmation question shown before submitting.
    pub fn prompt(&self) -> String {
        format!(
            "Send {} {} to {}?",
            self.intent.amount.normalize(),
            self.intent.source.chain.symbol(),
            self.intent.recipient
        )
    }

    /// User confirmed: hand the intent to `submitter`.
    pub fn confirm<S>(self, submitter: &mut S) -> Result<TransferReceipt, SubmitError>
    where
        S: TransferSubmitter + ?Sized,
    {
        match submitter.submit(&self.intent) {
            Ok(receipt) => {
                tracing::info!(
                    submitter = submitter.submitter_name(),
                    tx_ref = %receipt.tx_ref,
                    wallet = %receipt.wallet_id,
                    amount = %receipt.amount,
                    "transfer submitted"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(submitter = submitter.submitter_name(), error = %e, "transfer failed");
                Err(e)
            }
        }
    }

    /// User backed out; nothing is submitted.
    pub fn cancel(self) {
        tracing::debug!(wallet = %self.intent.source.id, "transfer cancelled");
    }
}
