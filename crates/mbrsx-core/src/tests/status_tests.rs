use alloy::dyn_abi::DynSolValue;
use alloy::primitives::U256;
use test_case::test_case;

use super::mock_provider::MockProvider;
use super::{BUYBACK, CORE, TOKEN, USER};
use crate::contracts::{Mrc20, Mrc721, TokenBuyback};
use crate::network::Network;
use crate::status::{ClientStatus, ContractStatus, StatusLabel};
use crate::Context;

#[test_case(true, false, StatusLabel::Active, "Active")]
#[test_case(true, true, StatusLabel::Paused, "Paused")]
#[test_case(false, true, StatusLabel::PausedAndNotActive, "Paused and Not Active")]
#[test_case(false, false, StatusLabel::Inactive, "Inactive")]
fn test_status_label(active: bool, paused: bool, expected: StatusLabel, rendered: &str) {
    let label = StatusLabel::from_flags(active, paused);
    assert_eq!(label, expected);
    assert_eq!(label.to_string(), rendered);
}

#[tokio::test]
async fn test_contract_status_fetch() {
    let provider = MockProvider::new(Network::MainNet)
        .with_response("active()", vec![DynSolValue::Bool(true)])
        .with_response("hodlers()", vec![DynSolValue::Bool(true)])
        .with_response("rate()", vec![DynSolValue::Uint(U256::from(100u64), 256)])
        .with_response("totalSupply()", vec![DynSolValue::Uint(U256::from(21_000u64), 256)])
        .with_response("balanceOf(address)", vec![DynSolValue::Uint(U256::from(700u64), 256)])
        .with_balance(U256::from(1_250_000_000u64))
        .shared();
    let buyback = TokenBuyback::new(BUYBACK, provider.clone(), Context::empty()).unwrap();
    let token = Mrc20::new(TOKEN, provider.clone(), Context::empty()).unwrap();

    let status = ContractStatus::fetch(&buyback, &token).await.unwrap();
    assert!(status.active);
    assert!(!status.paused);
    assert!(status.hodlers_only);
    assert_eq!(status.rate, U256::from(100u64));
    assert_eq!(status.total_supply, U256::from(21_000u64));
    assert_eq!(status.locked, U256::from(700u64));
    assert_eq!(status.vault_formatted(), "12.50000000");
    assert_eq!(status.label(), StatusLabel::Active);

    let locked_query = provider
        .recorded()
        .into_iter()
        .find(|call| call.signature == "balanceOf(address)")
        .unwrap();
    assert_eq!(locked_query.address, TOKEN);
    assert_eq!(locked_query.args[0], crate::codec::address_arg(&BUYBACK));
}

#[tokio::test]
async fn test_client_status_fetch() {
    let provider = MockProvider::new(Network::MainNet)
        .with_response("balanceOf(address)", vec![DynSolValue::Uint(U256::from(2u64), 256)])
        .with_response("allowance(address,address)", vec![DynSolValue::Uint(U256::MAX, 256)])
        .shared();
    let token = Mrc20::new(TOKEN, provider.clone(), Context::empty()).unwrap();
    let core = Mrc721::new(CORE, provider.clone(), Context::empty()).unwrap();

    let status = ClientStatus::fetch(USER, BUYBACK, &token, Some(&core)).await.unwrap();
    assert!(status.hodler);
    assert_eq!(status.balance, U256::from(2u64));
    assert_eq!(status.allowance, U256::MAX);

    let without_core = ClientStatus::fetch(USER, BUYBACK, &token, None).await.unwrap();
    assert!(!without_core.hodler);
}

#[tokio::test]
async fn test_client_status_on_silent_node() {
    let provider = MockProvider::new(Network::TestNet).shared();
    let token = Mrc20::new(TOKEN, provider.clone(), Context::empty()).unwrap();
    let core = Mrc721::new(CORE, provider, Context::empty()).unwrap();

    let status = ClientStatus::fetch(USER, BUYBACK, &token, Some(&core)).await.unwrap();
    assert_eq!(status, ClientStatus::default());
}
