use alloy::primitives::U256;
use serde_json::json;
use test_case::test_case;

use super::mock_provider::MockProvider;
use super::BUYBACK;
use crate::contracts::TokenBuyback;
use crate::errors::{ExchangeError, MbrsxError};
use crate::exchange::{clamp_to_balance, exchange, validate_exchange};
use crate::network::Network;
use crate::status::ClientStatus;
use crate::Context;

fn rejection(amount: u64, allowance: u64, rate: u64) -> ExchangeError {
    let error =
        validate_exchange(U256::from(amount), U256::from(allowance), U256::from(rate)).unwrap_err();
    match error.current_context() {
        MbrsxError::Exchange(reason) => reason.clone(),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_validate_accepts_amount_within_bounds() {
    assert!(validate_exchange(U256::from(500u64), U256::from(1000u64), U256::from(100u64)).is_ok());
    assert!(validate_exchange(U256::from(100u64), U256::from(100u64), U256::from(100u64)).is_ok());
}

#[test]
fn test_allowance_is_checked_first() {
    // below rate and above allowance at once
    assert!(matches!(rejection(50, 10, 100), ExchangeError::ExceedsAllowance { .. }));
}

#[test]
fn test_rate_is_checked_before_zero() {
    assert!(matches!(rejection(0, 10, 100), ExchangeError::BelowRate { .. }));
    assert_eq!(
        rejection(0, 10, 100).to_string(),
        "amount 0 must be greater than or equal to 100"
    );
}

#[test]
fn test_zero_amount_rejected_when_rate_is_zero() {
    assert_eq!(rejection(0, 0, 0), ExchangeError::ZeroAmount);
}

#[test_case(10, 5, 5 ; "clamped to balance")]
#[test_case(3, 5, 3 ; "within balance")]
#[test_case(0, 0, 0 ; "empty balance")]
fn test_clamp_to_balance(amount: u64, balance: u64, expected: u64) {
    assert_eq!(clamp_to_balance(U256::from(amount), U256::from(balance)), U256::from(expected));
}

#[tokio::test]
async fn test_exchange_submits_clamped_amount() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let buyback = TokenBuyback::new(BUYBACK, provider.clone(), Context::empty()).unwrap();
    let client = ClientStatus {
        balance: U256::from(400u64),
        allowance: U256::from(1000u64),
        hodler: false,
    };

    let tx = exchange(&buyback, U256::from(900u64), &client, U256::from(100u64)).await.unwrap();
    assert!(!tx.is_zero_txid());
    let call = provider.last();
    assert_eq!(call.signature, "exchangeTokenForMetrix(uint256)");
    assert_eq!(call.args, vec![json!("0x190")]);
}

#[tokio::test]
async fn test_rejected_exchange_sends_nothing() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let buyback = TokenBuyback::new(BUYBACK, provider.clone(), Context::empty()).unwrap();
    let client =
        ClientStatus { balance: U256::from(400u64), allowance: U256::from(10u64), hodler: true };

    let error = exchange(&buyback, U256::from(300u64), &client, U256::from(100u64))
        .await
        .unwrap_err();
    assert!(error.to_string().contains("exceeds allowance"));
    assert!(provider.recorded().is_empty());
}
