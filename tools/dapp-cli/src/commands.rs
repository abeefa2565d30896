use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use dapp_common::aggregate::summarize;
use dapp_common::amount::format_amount;
use dapp_common::card::ProvisioningRequest;
use dapp_common::digital_wallet::{default_catalog, supported_wallets, DigitalWalletKind, Platform};
use dapp_common::history::{demo_history, HistoryFilter, TransactionRecord};
use dapp_common::intent::ValidationError;
use dapp_common::send_flow::{SendForm, TransferReceipt, TransferSubmitter};
use dapp_common::source::{JsonFileWalletSource, StaticWalletSource, WalletSource};
use dapp_common::wallet::{Wallet, WalletId};

/// Wallets from `path`, or the demo wallets when no path is given.
pub fn load_wallets(path: Option<&Path>) -> anyhow::Result<Vec<Wallet>> {
    let source: Box<dyn WalletSource> = match path {
        Some(p) => Box::new(JsonFileWalletSource::new(p)),
        None => Box::new(StaticWalletSource::demo()),
    };
    let wallets = source
        .list()
        .with_context(|| format!("loading wallets from {} source", source.source_name()))?;
    tracing::debug!(source = source.source_name(), count = wallets.len(), "wallets ready");
    Ok(wallets)
}

/// History records from `path`, or the demo history when no path is given.
pub fn load_history(path: Option<&Path>) -> anyhow::Result<Vec<TransactionRecord>> {
    let Some(path) = path else {
        return Ok(demo_history());
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("reading history {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing history {}", path.display()))
}

pub fn summary(out: &mut impl Write, wallets: &[Wallet], places: u32) -> anyhow::Result<()> {
    let s = summarize(wallets);
    writeln!(out, "Total balance:  {}", format_amount(s.total_balance, places))?;
    writeln!(out, "Active wallets: {}", s.active_count)?;
    writeln!(out, "Total wallets:  {}", s.total_count)?;
    Ok(())
}

pub fn list_wallets(out: &mut impl Write, wallets: &[Wallet], places: u32) -> anyhow::Result<()> {
    if wallets.is_empty() {
        writeln!(out, "No wallets yet.")?;
        return Ok(());
    }
    for w in wallets {
        let status = if w.is_active { "Active" } else { "Inactive" };
        writeln!(
            out,
            "{:>6}  {:<5} {:<46} {:>16}  {status}",
            w.id.to_string(),
            w.chain.symbol(),
            w.address,
            format_amount(w.balance, places),
        )?;
    }
    Ok(())
}

/// Parsed `send` arguments.
#[derive(Clone, Debug)]
pub struct SendArgs {
    pub from: WalletId,
    pub to: String,
    pub amount: String,
    pub max: bool,
    pub note: String,
    pub assume_yes: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome {
    Submitted(TransferReceipt),
    Cancelled,
    Rejected(ValidationError),
}

/// Validate, confirm (reading y/N from `input` unless `assume_yes`) and submit.
///
/// Validation failures are reported on `out` and returned as
/// `SendOutcome::Rejected`; submission failures are errors.
pub fn send<S>(
    out: &mut impl Write,
    input: &mut impl BufRead,
    wallets: &[Wallet],
    args: &SendArgs,
    submitter: &mut S,
) -> anyhow::Result<SendOutcome>
where
    S: TransferSubmitter + ?Sized,
{
    let mut form = SendForm::new();
    form.select(args.from.clone());
    form.recipient = args.to.clone();
    form.amount = args.amount.clone();
    form.note = args.note.clone();
    if args.max {
        form.fill_max(wallets);
    }

    let pending = match form.prepare(wallets) {
        Ok(pending) => pending,
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            return Ok(SendOutcome::Rejected(e));
        }
    };

    if !args.assume_yes {
        write!(out, "{} [y/N] ", pending.prompt())?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer).context("reading confirmation")?;
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            pending.cancel();
            writeln!(out, "Cancelled.")?;
            return Ok(SendOutcome::Cancelled);
        }
    }

    let receipt = pending
        .confirm(submitter)
        .context("submitting transfer")?;
    writeln!(out, "Transaction sent successfully! Reference: {}", receipt.tx_ref)?;
    Ok(SendOutcome::Submitted(receipt))
}

pub fn history(
    out: &mut impl Write,
    records: &[TransactionRecord],
    filter: &HistoryFilter,
    now: DateTime<Utc>,
    places: u32,
) -> anyhow::Result<()> {
    let hits = filter.apply(records, now);
    if hits.is_empty() {
        writeln!(out, "No transactions found.")?;
        return Ok(());
    }
    for r in hits {
        writeln!(
            out,
            "{}  {:<9} {} {} -> {}  fee {}  {}",
            r.timestamp.format("%Y-%m-%d %H:%M:%S"),
            r.status,
            format_amount(r.amount, places),
            r.currency,
            r.to,
            format_amount(r.fee, places),
            r.tx_hash,
        )?;
    }
    Ok(())
}

pub fn digital_wallets(out: &mut impl Write, platform: Platform) -> anyhow::Result<()> {
    let supported = supported_wallets(platform, &default_catalog());
    if supported.is_empty() {
        writeln!(out, "No digital wallets available on this platform.")?;
    }
    for w in supported {
        writeln!(out, "{}  ({})", w.name, w.kind)?;
    }
    Ok(())
}

/// Check an add-to-wallet request. `None` when it was refused; the reason
/// is printed on `out`.
pub fn provision(
    out: &mut impl Write,
    card: Option<&str>,
    wallet: Option<DigitalWalletKind>,
    platform: Platform,
) -> anyhow::Result<Option<ProvisioningRequest>> {
    match ProvisioningRequest::new(card, wallet, platform) {
        Ok(req) => {
            tracing::info!(card = %req.card_id, wallet = %req.wallet, "provisioning request ready");
            writeln!(out, "Card {} ready to add to {}", req.card_id, req.wallet)?;
            Ok(Some(req))
        }
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            Ok(None)
        }
    }
}
