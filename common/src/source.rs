use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::chain::Chain;
use crate::wallet::{Wallet, WalletId};

/// Errors from wallet sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("wallet {0} has a negative balance")]
    NegativeBalance(WalletId),
    #[error("wallet id {0} appears more than once")]
    DuplicateId(WalletId),
}

/// Abstraction over wherever the wallet list comes from (backend API, mock
/// store, a file on disk).
pub trait WalletSource {
    /// Current wallet collection.
    fn list(&self) -> Result<Vec<Wallet>, SourceError>;

    /// Human-readable source name (e.g. "static", "json-file").
    fn source_name(&self) -> &str;
}

/// Reject collections that break the wallet invariants.
pub fn check_wallets(wallets: &[Wallet]) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for wallet in wallets {
        if wallet.balance < Decimal::ZERO {
            return Err(SourceError::NegativeBalance(wallet.id.clone()));
        }
        if !seen.insert(&wallet.id) {
            return Err(SourceError::DuplicateId(wallet.id.clone()));
        }
    }
    Ok(())
}

/// In-memory wallet collection.
#[derive(Clone, Debug, Default)]
pub struct StaticWalletSource {
    wallets: Vec<Wallet>,
}

impl StaticWalletSource {
    pub fn new(wallets: Vec<Wallet>) -> Result<Self, SourceError> {
        check_wallets(&wallets)?;
        Ok(Self { wallets })
    }

    /// The dashboard's placeholder wallets.
    pub fn demo() -> Self {
        Self {
            wallets: vec![
                Wallet::new(
                    1u64,
                    "0x742d35Cc6634C0532925a3b8D4C9db4C4C4C4C4C",
                    Chain::Ethereum,
                    Decimal::new(25, 1),
                    true,
                ),
                Wallet::new(
                    2u64,
                    "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
                    Chain::Bitcoin,
                    Decimal::new(75, 2),
                    true,
                ),
                Wallet::new(
                    3u64,
                    "47htHJdh95mxzbpkgLWlDFGPaPU9ewPRyJMRLCYQiHdQ",
                    Chain::Solana,
                    Decimal::new(152, 1),
                    true,
                ),
            ],
        }
    }
}

impl WalletSource for StaticWalletSource {
    fn list(&self) -> Result<Vec<Wallet>, SourceError> {
        Ok(self.wallets.clone())
    }

    fn source_name(&self) -> &str {
        "static"
    }
}

/// Wallets read from a JSON array on disk. The file is re-read on every
/// `list()` so edits show up without restarting.
#[derive(Clone, Debug)]
pub struct JsonFileWalletSource {
    path: PathBuf,
}

impl JsonFileWalletSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WalletSource for JsonFileWalletSource {
    fn list(&self) -> Result<Vec<Wallet>, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let wallets: Vec<Wallet> =
            serde_json::from_slice(&bytes).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        if let Err(e) = check_wallets(&wallets) {
            tracing::warn!(path = %self.path.display(), error = %e, "rejected wallet file");
            return Err(e);
        }
        tracing::debug!(path = %self.path.display(), count = wallets.len(), "loaded wallets");
        Ok(wallets)
    }

    fn source_name(&self) -> &str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn demo_source_matches_dashboard() {
        let wallets = StaticWalletSource::demo().list().unwrap();
        let balances: Vec<Decimal> = wallets.iter().map(|w| w.balance).collect();
        assert_eq!(balances, vec![dec!(2.5), dec!(0.75), dec!(15.2)]);
        assert!(wallets.iter().all(|w| w.is_active));
    }

    #[test]
    fn static_source_rejects_negative_balance() {
        let wallets = vec![Wallet::new(1u64, "a", Chain::Bitcoin, dec!(-0.1), true)];
        assert!(matches!(
            StaticWalletSource::new(wallets),
            Err(SourceError::NegativeBalance(WalletId::Numeric(1)))
        ));
    }

    #[test]
    fn static_source_rejects_duplicate_ids() {
        let wallets = vec![
            Wallet::new("main", "a", Chain::Bitcoin, dec!(1), true),
            Wallet::new("main", "b", Chain::Tron, dec!(2), true),
        ];
        assert!(matches!(
            StaticWalletSource::new(wallets),
            Err(SourceError::DuplicateId(WalletId::Named(ref id))) if id == "main"
        ));
    }

    #[test]
    fn json_file_source_reads_wallets() {
        let file = write_temp(
            r#"[{"id": 7, "address": "TXyz", "chain": "tron", "balance": 120, "is_active": false}]"#,
        );
        let source = JsonFileWalletSource::new(file.path());
        let wallets = source.list().unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].chain, Chain::Tron);
        assert_eq!(wallets[0].balance, dec!(120));
        assert!(!wallets[0].is_active);
    }

    #[test]
    fn json_file_source_reports_parse_errors() {
        let file = write_temp("{not json");
        let err = JsonFileWalletSource::new(file.path()).list().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn json_file_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileWalletSource::new(dir.path().join("absent.json"))
            .list()
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn json_file_source_rejects_negative_balance() {
        let file = write_temp(r#"[{"id": 1, "address": "a", "chain": "bitcoin", "balance": -1}]"#);
        let err = JsonFileWalletSource::new(file.path()).list().unwrap_err();
        assert!(matches!(err, SourceError::NegativeBalance(_)));
    }
}
