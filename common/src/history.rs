use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wallet::WalletId;

/// On-chain status of a past transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Confirmed,
    Failed,
}

impl TxStatus {
    pub fn label(self) -> &'static str {
        match self {
            TxStatus::Pending => "Pending",
            TxStatus::Confirmed => "Confirmed",
            TxStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for TxStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(TxStatus::Pending),
            "confirmed" => Ok(TxStatus::Confirmed),
            "failed" => Ok(TxStatus::Failed),
            other => Err(format!("unknown transaction status: {other}")),
        }
    }
}

/// A past transaction as reported by the wallet backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: u64,
    pub tx_hash: String,
    pub wallet_id: WalletId,
    pub from: String,
    pub to: String,
    pub amount: Decimal,
    /// Ticker of the asset moved (e.g. "ETH").
    pub currency: String,
    pub status: TxStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub fee: Decimal,
}

/// Date range choices on the history screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
    AllTime,
}

impl DateRange {
    /// Earliest timestamp (inclusive) still inside the range, or `None` for all time.
    pub fn since(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 30,
            DateRange::Last90Days => 90,
            DateRange::AllTime => return None,
        };
        Some(now - Duration::days(days))
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(DateRange::Last7Days),
            "30d" => Ok(DateRange::Last30Days),
            "90d" => Ok(DateRange::Last90Days),
            "all" => Ok(DateRange::AllTime),
            other => Err(format!("unknown date range: {other} (expected 7d, 30d, 90d or all)")),
        }
    }
}

/// History screen filters. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub wallet: Option<WalletId>,
    pub status: Option<TxStatus>,
    pub range: DateRange,
}

impl HistoryFilter {
    pub fn matches(&self, record: &TransactionRecord, now: DateTime<Utc>) -> bool {
        self.wallet.as_ref().is_none_or(|w| *w == record.wallet_id)
            && self.status.is_none_or(|s| s == record.status)
            && self.range.since(now).is_none_or(|since| record.timestamp >= since)
    }

    /// Records passing the filter, newest first.
    pub fn apply<'a>(
        &self,
        records: &'a [TransactionRecord],
        now: DateTime<Utc>,
    ) -> Vec<&'a TransactionRecord> {
        let mut hits: Vec<_> = records.iter().filter(|r| self.matches(r, now)).collect();
        hits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        hits
    }
}

/// Placeholder history shown before the backend is wired up.
pub fn demo_history() -> Vec<TransactionRecord> {
    let at = |y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32| {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .unwrap_or_default()
    };
    vec![
        TransactionRecord {
            id: 1,
            tx_hash: "0x7f3d9a8b4c2e1f5a6b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0".into(),
            wallet_id: WalletId::Numeric(1),
            from: "0x1234...5678".into(),
            to: "0x8765...4321".into(),
            amount: Decimal::new(5, 1),
            currency: "ETH".into(),
            status: TxStatus::Confirmed,
            timestamp: at(2023, 4, 15, 14, 30, 22),
            fee: Decimal::new(21, 4),
        },
        TransactionRecord {
            id: 2,
            tx_hash: "0x1a2b3c4d5e6f7890abcdef1234567890abcdef1234567890abcdef1234567890".into(),
            wallet_id: WalletId::Numeric(2),
            from: "0x5678...1234".into(),
            to: "0x4321...8765".into(),
            amount: Decimal::new(125, 2),
            currency: "BTC".into(),
            status: TxStatus::Pending,
            timestamp: at(2023, 4, 14, 9, 15, 47),
            fee: Decimal::new(1, 4),
        },
        TransactionRecord {
            id: 3,
            tx_hash: "0x9f8e7d6c5b4a3c2b1a0f9e8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b3a2f1e0d9c8".into(),
            wallet_id: WalletId::Numeric(3),
            from: "0x90ab...cdef".into(),
            to: "0xfedc...ba09".into(),
            amount: Decimal::new(50, 0),
            currency: "SOL".into(),
            status: TxStatus::Confirmed,
            timestamp: at(2023, 4, 12, 16, 45, 33),
            fee: Decimal::new(5, 6),
        },
    ]
}
