use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, B256, U256};
use serde_json::json;

use super::mock_provider::{MockProvider, RecordedKind};
use super::{BUYBACK, CORE, GOVERNOR, TOKEN, USER};
use crate::contracts::{AutoGovernor, Mrc20, Mrc721, TokenBuyback};
use crate::network::Network;
use crate::provider::SendOptions;
use crate::transaction::{ReceiptLog, TransactionReceipt};
use crate::Context;

fn buyback(provider: &std::sync::Arc<MockProvider>) -> TokenBuyback {
    TokenBuyback::new(BUYBACK, provider.clone(), Context::empty()).unwrap()
}

fn receipt() -> TransactionReceipt {
    TransactionReceipt {
        transaction_hash: "ab".repeat(32),
        block_number: 120_000,
        excepted: "None".to_string(),
        log: vec![ReceiptLog {
            address: alloy::hex::encode(BUYBACK),
            topics: vec![
                "0x62e78cea01bee320cd4e420270b5ea74000d11b0c9f74754ebdbfc544b05a258".to_string(),
            ],
            data: format!("{:0>64}", alloy::hex::encode(USER)),
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_reads_fall_back_to_zero_values() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let buyback = buyback(&provider);

    assert!(!buyback.active().await.unwrap());
    assert!(!buyback.paused().await.unwrap());
    assert!(!buyback.hodlers().await.unwrap());
    assert_eq!(buyback.owner().await.unwrap(), Address::ZERO);
    assert_eq!(buyback.rate().await.unwrap(), U256::ZERO);
    assert_eq!(buyback.token().await.unwrap(), Address::ZERO);
    assert_eq!(buyback.core().await.unwrap(), Address::ZERO);
    assert_eq!(buyback.governance().await.unwrap(), Address::ZERO);
    assert_eq!(buyback.auto_governor().await.unwrap(), Address::ZERO);

    let recorded = provider.recorded();
    assert_eq!(recorded.len(), 9);
    assert!(recorded.iter().all(|call| call.kind == RecordedKind::Call && call.address == BUYBACK));
}

#[tokio::test]
async fn test_reads_decode_scripted_values() {
    let provider = MockProvider::new(Network::MainNet)
        .with_response("active()", vec![DynSolValue::Bool(true)])
        .with_response("rate()", vec![DynSolValue::Uint(U256::from(100_000_000u64), 256)])
        .with_response("token()", vec![DynSolValue::Address(TOKEN)])
        .with_response("autoGovernor()", vec![DynSolValue::Address(GOVERNOR)])
        .with_balance(U256::from(2_500_000_000u64))
        .shared();
    let buyback = buyback(&provider);

    assert!(buyback.active().await.unwrap());
    assert_eq!(buyback.rate().await.unwrap(), U256::from(100_000_000u64));
    assert_eq!(buyback.token().await.unwrap(), TOKEN);
    assert_eq!(buyback.auto_governor().await.unwrap(), GOVERNOR);
    assert_eq!(buyback.balance().await.unwrap(), U256::from(2_500_000_000u64));
}

#[tokio::test]
async fn test_exchange_returns_transaction_with_lazy_receipts() {
    let provider = MockProvider::new(Network::MainNet).with_receipts(vec![receipt()]).shared();
    let buyback = buyback(&provider);

    let tx = buyback.exchange_token_for_metrix(U256::from(1000u64)).await.unwrap();
    let txid = tx.txid_hex();
    assert_eq!(txid.len(), 64);
    assert!(txid.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(!tx.is_zero_txid());

    let sent = provider.last();
    assert_eq!(sent.signature, "exchangeTokenForMetrix(uint256)");
    assert_eq!(sent.args, vec![json!("0x3e8")]);
    assert_eq!(sent.kind, RecordedKind::Send(SendOptions::default()));

    // not fetched until asked, then fetched on every call
    assert_eq!(provider.receipt_fetches(), 0);
    let receipts = tx.get_receipts().await.unwrap();
    assert_eq!(receipts.len(), 1);
    assert!(receipts[0].succeeded());
    assert_eq!(receipts[0].events.len(), 1);
    assert_eq!(receipts[0].events[0].name, "Paused");
    assert_eq!(receipts[0].events[0].param("account"), Some(&DynSolValue::Address(USER)));

    tx.get_receipts().await.unwrap();
    assert_eq!(provider.receipt_fetches(), 2);
}

#[tokio::test]
async fn test_zero_txid_is_surfaced_not_raised() {
    let provider = MockProvider::new(Network::TestNet).with_txid(B256::ZERO).shared();
    let buyback = buyback(&provider);

    let tx = buyback.exchange_token_for_metrix(U256::from(1000u64)).await.unwrap();
    assert!(tx.is_zero_txid());
    assert_eq!(tx.txid_hex(), "0".repeat(64));
    assert!(tx.get_receipts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_on_erc721_received_defaults_to_zero_selector() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let buyback = buyback(&provider);

    let selector = buyback.on_erc721_received(USER, USER, U256::from(7u64), "").await.unwrap();
    assert_eq!(selector, "00000000");

    let call = provider.last();
    assert_eq!(call.signature, "onERC721Received(address,address,uint256,bytes)");
    assert_eq!(call.args[2], json!("0x7"));
    assert_eq!(call.args[3], json!("0x"));
}

#[tokio::test]
async fn test_on_erc721_received_returns_selector() {
    let mut word = [0u8; 32];
    word[..4].copy_from_slice(&[0x15, 0x0b, 0x7a, 0x02]);
    let provider = MockProvider::new(Network::MainNet)
        .with_response(
            "onERC721Received(address,address,uint256,bytes)",
            vec![DynSolValue::FixedBytes(B256::from(word), 4)],
        )
        .shared();
    let buyback = buyback(&provider);

    let selector = buyback.on_erc721_received(USER, USER, U256::from(7u64), "0x").await.unwrap();
    assert_eq!(selector, "150b7a02");
}

#[tokio::test]
async fn test_execute_transaction_prefixes_data_once() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let buyback = buyback(&provider);

    buyback.execute_transaction(USER, U256::from(16u64), "cafe").await.unwrap();
    assert_eq!(
        provider.last().args,
        vec![json!("5555555555555555555555555555555555555555"), json!("0x10"), json!("0xcafe")]
    );

    buyback.execute_transaction(USER, U256::from(16u64), "0xcafe").await.unwrap();
    assert_eq!(provider.last().args[2], json!("0xcafe"));
}

#[tokio::test]
async fn test_exchange_writes_use_expected_signatures() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let buyback = buyback(&provider);

    buyback.deposit().await.unwrap();
    buyback.enroll().await.unwrap();
    buyback.migrate(GOVERNOR).await.unwrap();
    buyback.pause().await.unwrap();
    buyback.unpause().await.unwrap();
    buyback.ping().await.unwrap();
    buyback.set_hodlers(true).await.unwrap();
    buyback.renounce_ownership().await.unwrap();
    buyback.transfer_ownership(USER).await.unwrap();
    buyback.unenroll(false).await.unwrap();

    let signatures: Vec<String> =
        provider.recorded().into_iter().map(|call| call.signature).collect();
    assert_eq!(
        signatures,
        vec![
            "deposit()",
            "enroll()",
            "migrate(address)",
            "pause()",
            "unpause()",
            "ping()",
            "setHodlers(bool)",
            "renounceOwnership()",
            "transferOwnership(address)",
            "unenroll(bool)",
        ]
    );
    let recorded = provider.recorded();
    assert_eq!(recorded[6].args, vec![json!(true)]);
    assert_eq!(recorded[9].args, vec![json!(false)]);
}

#[tokio::test]
async fn test_deposit_with_value_attaches_amount() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let buyback = buyback(&provider);

    buyback.deposit_with_value(U256::from(100_000_000u64)).await.unwrap();
    let call = provider.last();
    assert_eq!(call.signature, "deposit()");
    assert_eq!(call.kind, RecordedKind::Send(SendOptions::with_value(U256::from(100_000_000u64))));
}

#[tokio::test]
async fn test_auto_governor_operations() {
    let provider = MockProvider::new(Network::TestNet)
        .with_response("governance()", vec![DynSolValue::Address(CORE)])
        .shared();
    let governor = AutoGovernor::new(GOVERNOR, provider.clone(), Context::empty()).unwrap();

    assert_eq!(governor.governance().await.unwrap(), CORE);
    assert_eq!(governor.owner().await.unwrap(), Address::ZERO);

    governor.enroll().await.unwrap();
    governor.execute_transaction(USER, U256::ZERO, "").await.unwrap();
    governor.migrate(CORE).await.unwrap();
    governor.ping().await.unwrap();
    governor.renounce_ownership().await.unwrap();
    governor.transfer_ownership(USER).await.unwrap();
    let tx = governor.unenroll(true).await.unwrap();
    assert_eq!(tx.txid_hex().len(), 64);

    let recorded = provider.recorded();
    assert_eq!(recorded.len(), 9);
    assert!(recorded.iter().all(|call| call.address == GOVERNOR));
    assert_eq!(recorded[3].args[2], json!("0x"));
}

#[tokio::test]
async fn test_unknown_signature_propagates_error() {
    let provider = MockProvider::new(Network::MainNet).shared();
    let governor = AutoGovernor::new(GOVERNOR, provider.clone(), Context::empty()).unwrap();
    // the governor descriptor has no rate()
    let error = governor.client().call("rate()", vec![]).await.unwrap_err();
    assert!(error.to_string().contains("rate()"));
    assert!(error.downcast_ref::<crate::errors::ContractInfo>().is_some());
}

#[tokio::test]
async fn test_token_clients() {
    let provider = MockProvider::new(Network::MainNet)
        .with_response("symbol()", vec![DynSolValue::String("MBRS".to_string())])
        .with_response("decimals()", vec![DynSolValue::Uint(U256::from(8u64), 8)])
        .with_response("balanceOf(address)", vec![DynSolValue::Uint(U256::from(3u64), 256)])
        .shared();
    let token = Mrc20::new(TOKEN, provider.clone(), Context::empty()).unwrap();
    let core = Mrc721::new(CORE, provider.clone(), Context::empty()).unwrap();

    assert_eq!(token.symbol().await.unwrap(), "MBRS");
    assert_eq!(token.name().await.unwrap(), "");
    assert_eq!(token.decimals().await.unwrap(), 8);
    assert_eq!(token.balance_of(USER).await.unwrap(), U256::from(3u64));
    assert_eq!(token.allowance(USER, BUYBACK).await.unwrap(), U256::ZERO);
    assert_eq!(core.balance_of(USER).await.unwrap(), U256::from(3u64));
    assert_eq!(core.owner_of(U256::from(1u64)).await.unwrap(), Address::ZERO);

    token.approve_max(BUYBACK).await.unwrap();
    let call = provider.last();
    assert_eq!(call.signature, "approve(address,uint256)");
    assert_eq!(call.args[1], json!(format!("0x{}", "f".repeat(64))));

    token.transfer(USER, U256::from(10u64)).await.unwrap();
    assert_eq!(provider.last().args[1], json!("0xa"));
}
