//! Command-line shell over the wallet core.
//!
//! Stands in for the app screens: loads wallets from a JSON file (or the
//! built-in demo data), prints dashboard figures and history, and walks a
//! transfer through validation and confirmation before handing it to the
//! mock submitter. Nothing here reaches a chain or a backend.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dapp_common::amount::MOBILE_DISPLAY_PLACES;
use dapp_common::digital_wallet::{DigitalWalletKind, Platform};
use dapp_common::history::{DateRange, HistoryFilter, TxStatus};
use dapp_common::send_flow::MockSubmitter;
use dapp_common::wallet::WalletId;
use tracing_subscriber::EnvFilter;

use commands::{SendArgs, SendOutcome};

#[derive(Parser)]
#[command(name = "dapp", about = "Multi-chain wallet toolkit")]
struct Cli {
    /// JSON file with the wallet list (demo wallets when omitted).
    #[arg(long, env = "DAPP_WALLETS", global = true)]
    wallets: Option<PathBuf>,

    /// JSON file with transaction history (demo history when omitted).
    #[arg(long, env = "DAPP_HISTORY", global = true)]
    history: Option<PathBuf>,

    /// Decimal places for displayed amounts.
    #[arg(long, default_value_t = MOBILE_DISPLAY_PLACES, global = true)]
    places: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Total balance and wallet counts.
    Summary,

    /// List wallets with their balances.
    Wallets,

    /// Validate a transfer, confirm it, and submit it to the mock submitter.
    Send {
        /// Wallet id to send from.
        #[arg(long)]
        from: String,

        /// Recipient address.
        #[arg(long)]
        to: String,

        /// Amount in the wallet's native unit.
        #[arg(long)]
        amount: Option<String>,

        /// Send the whole balance.
        #[arg(long, conflicts_with = "amount")]
        max: bool,

        /// Optional note attached to the transfer.
        #[arg(long)]
        note: Option<String>,

        /// Skip the confirmation question.
        #[arg(long)]
        yes: bool,
    },

    /// Show transaction history.
    History {
        /// Only this wallet.
        #[arg(long)]
        wallet: Option<String>,

        /// Only this status (pending, confirmed, failed).
        #[arg(long)]
        status: Option<TxStatus>,

        /// Time window: 7d, 30d, 90d or all.
        #[arg(long, default_value = "7d")]
        range: DateRange,
    },

    /// Digital wallets a card can be added to on a platform.
    DigitalWallets {
        /// ios, android or web.
        #[arg(long)]
        platform: Platform,
    },

    /// Check a request to add a card to a phone wallet.
    Provision {
        /// Card id.
        #[arg(long)]
        card: Option<String>,

        /// apple_pay, google_pay or samsung_pay.
        #[arg(long)]
        wallet: Option<DigitalWalletKind>,

        /// ios, android or web.
        #[arg(long)]
        platform: Platform,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut out = std::io::stdout().lock();
    let places = cli.places;

    match cli.command {
        Command::Summary => {
            let wallets = commands::load_wallets(cli.wallets.as_deref())?;
            commands::summary(&mut out, &wallets, places)?;
        }
        Command::Wallets => {
            let wallets = commands::load_wallets(cli.wallets.as_deref())?;
            commands::list_wallets(&mut out, &wallets, places)?;
        }
        Command::Send {
            from,
            to,
            amount,
            max,
            note,
            yes,
        } => {
            let wallets = commands::load_wallets(cli.wallets.as_deref())?;
            let args = SendArgs {
                from: WalletId::parse(&from),
                to,
                amount: amount.unwrap_or_default(),
                max,
                note: note.unwrap_or_default(),
                assume_yes: yes,
            };
            let mut submitter = MockSubmitter::new();
            let mut input = std::io::stdin().lock();
            let outcome = commands::send(&mut out, &mut input, &wallets, &args, &mut submitter)?;
            if let SendOutcome::Rejected(_) = outcome {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::History {
            wallet,
            status,
            range,
        } => {
            let records = commands::load_history(cli.history.as_deref())?;
            let filter = HistoryFilter {
                wallet: wallet.as_deref().map(WalletId::parse),
                status,
                range,
            };
            commands::history(&mut out, &records, &filter, chrono::Utc::now(), places)?;
        }
        Command::DigitalWallets { platform } => {
            commands::digital_wallets(&mut out, platform)?;
        }
        Command::Provision {
            card,
            wallet,
            platform,
        } => {
            if commands::provision(&mut out, card.as_deref(), wallet, platform)?.is_none() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
