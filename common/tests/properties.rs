use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dapp_common::aggregate::{summarize, WalletSummary};
use dapp_common::chain::Chain;
use dapp_common::digital_wallet::{default_catalog, supported_wallets, DigitalWalletKind, Platform};
use dapp_common::intent::{validate, ValidationError};
use dapp_common::source::{StaticWalletSource, WalletSource};
use dapp_common::wallet::Wallet;

fn sample_wallets() -> Vec<Wallet> {
    vec![
        Wallet::new(1u64, "bc1q...xyz", Chain::Bitcoin, dec!(0.5), true),
        Wallet::new(2u64, "0x742d...4C4C", Chain::Ethereum, dec!(2.3), true),
        Wallet::new("sol", "47ht...HdQ", Chain::Solana, dec!(15.7), false),
        Wallet::new(4u64, "TQn9...", Chain::Tron, dec!(0.00000001), true),
    ]
}

/// Amounts between zero (exclusive) and the balance (inclusive).
fn affordable(balance: Decimal) -> Vec<Decimal> {
    let mut amounts = vec![balance, balance / dec!(2), balance / dec!(3), dec!(0.00000001)];
    amounts.retain(|a| *a > Decimal::ZERO && *a <= balance);
    amounts
}

#[test]
fn affordable_amounts_validate_to_the_same_amount() {
    for w in sample_wallets() {
        for a in affordable(w.balance) {
            let intent = validate(Some(&w), "addr", &a.to_string())
                .unwrap_or_else(|e| panic!("{a} from {} rejected: {e}", w.id));
            assert_eq!(intent.amount, a);
            assert_eq!(intent.source, &w);
        }
    }
}

#[test]
fn amounts_over_balance_are_insufficient() {
    for w in sample_wallets() {
        for extra in [dec!(0.00000001), dec!(1), dec!(1000000)] {
            let a = w.balance + extra;
            assert_eq!(
                validate(Some(&w), "addr", &a.to_string()),
                Err(ValidationError::InsufficientBalance)
            );
        }
    }
}

#[test]
fn over_balance_amounts_with_excess_digits_never_validate() {
    let w = Wallet::new(1u64, "addr", Chain::Ethereum, dec!(10), true);
    for text in [
        "10.000000000000000000000000000001",
        "10.0000000000000000000000000000000001",
        "10.00000000000000000000000000001e0",
    ] {
        assert!(validate(Some(&w), "addr", text).is_err(), "{text:?} validated");
    }
    assert_eq!(
        validate(Some(&w), "addr", "0.00000000000000000000000000006"),
        Err(ValidationError::InvalidAmount)
    );
}

#[test]
fn empty_recipient_is_missing_regardless_of_amount() {
    let w = &sample_wallets()[1];
    for a in ["1", "0", "-1", "abc", "", "1000000"] {
        assert_eq!(validate(Some(w), "", a), Err(ValidationError::MissingRecipient));
    }
}

#[test]
fn zero_and_negative_are_invalid() {
    let w = &sample_wallets()[0];
    assert_eq!(validate(Some(w), "addr", "0"), Err(ValidationError::InvalidAmount));
    assert_eq!(validate(Some(w), "addr", "-1"), Err(ValidationError::InvalidAmount));
}

#[test]
fn no_wallet_selected() {
    assert_eq!(validate(None, "addr", "1"), Err(ValidationError::NoWalletSelected));
}

#[test]
fn summarize_empty() {
    assert_eq!(
        summarize(&[]),
        WalletSummary {
            total_balance: Decimal::ZERO,
            active_count: 0,
            total_count: 0,
        }
    );
}

#[test]
fn summarize_mixed_activity() {
    let wallets = vec![
        Wallet::new(1u64, "a", Chain::Ethereum, dec!(2.5), true),
        Wallet::new(2u64, "b", Chain::Bitcoin, dec!(0.75), true),
        Wallet::new(3u64, "c", Chain::Solana, dec!(15.2), false),
    ];
    assert_eq!(
        summarize(&wallets),
        WalletSummary {
            total_balance: dec!(18.45),
            active_count: 2,
            total_count: 3,
        }
    );
}

#[test]
fn repeated_calls_are_identical() {
    let wallets = StaticWalletSource::demo().list().unwrap();
    assert_eq!(summarize(&wallets), summarize(&wallets));
    for text in ["1", "0", "abc", "100", " 0.25 "] {
        assert_eq!(
            validate(wallets.first(), "addr", text),
            validate(wallets.first(), "addr", text)
        );
    }
}

#[test]
fn platform_filtering() {
    let catalog = default_catalog();
    let kinds = |p| -> Vec<DigitalWalletKind> {
        supported_wallets(p, &catalog).into_iter().map(|w| w.kind).collect()
    };
    assert_eq!(kinds(Platform::Ios), vec![DigitalWalletKind::ApplePay]);
    assert_eq!(
        kinds(Platform::Android),
        vec![DigitalWalletKind::GooglePay, DigitalWalletKind::SamsungPay]
    );
    assert!(kinds(Platform::Web).is_empty());
}
