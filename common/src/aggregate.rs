use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wallet::Wallet;

/// Dashboard figures derived from a wallet collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSummary {
    /// Sum of every wallet's balance, active or not.
    pub total_balance: Decimal,
    pub active_count: usize,
    pub total_count: usize,
}

/// Summarize a wallet collection. An empty collection yields all zeros.
pub fn summarize(wallets: &[Wallet]) -> WalletSummary {
    wallets.iter().fold(WalletSummary::default(), |acc, w| WalletSummary {
        total_balance: acc.total_balance.saturating_add(w.balance),
        active_count: acc.active_count + usize::from(w.is_active),
        total_count: acc.total_count + 1,
    })
}
