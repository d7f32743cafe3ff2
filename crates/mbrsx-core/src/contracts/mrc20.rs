use std::sync::Arc;

use alloy::primitives::{Address, U256};

use super::ContractClient;
use crate::abi::mrc20_abi;
use crate::codec::{address_arg, quantity_arg};
use crate::constants::{MAX_APPROVAL, MRC20};
use crate::errors::MbrsxResult;
use crate::provider::ConnectivityProvider;
use crate::transaction::Transaction;
use crate::Context;

/// Fungible token client, used for MBRS
#[derive(Clone, Debug)]
pub struct Mrc20 {
    client: ContractClient,
}

impl Mrc20 {
    pub fn new(
        address: Address,
        provider: Arc<dyn ConnectivityProvider>,
        ctx: Context,
    ) -> MbrsxResult<Self> {
        Ok(Self { client: ContractClient::new(MRC20, address, provider, mrc20_abi()?, ctx) })
    }

    pub fn address(&self) -> Address {
        self.client.address()
    }

    pub fn client(&self) -> &ContractClient {
        &self.client
    }

    pub async fn name(&self) -> MbrsxResult<String> {
        self.client.read_string("name()", vec![]).await
    }

    pub async fn symbol(&self) -> MbrsxResult<String> {
        self.client.read_string("symbol()", vec![]).await
    }

    pub async fn decimals(&self) -> MbrsxResult<u8> {
        let decimals = self.client.read_uint("decimals()", vec![]).await?;
        Ok(u8::try_from(decimals).unwrap_or(u8::MAX))
    }

    pub async fn total_supply(&self) -> MbrsxResult<U256> {
        self.client.read_uint("totalSupply()", vec![]).await
    }

    pub async fn balance_of(&self, owner: Address) -> MbrsxResult<U256> {
        self.client.read_uint("balanceOf(address)", vec![address_arg(&owner)]).await
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> MbrsxResult<U256> {
        self.client
            .read_uint("allowance(address,address)", vec![address_arg(&owner), address_arg(&spender)])
            .await
    }

    pub async fn approve(&self, spender: Address, amount: U256) -> MbrsxResult<Transaction> {
        self.client
            .send("approve(address,uint256)", vec![address_arg(&spender), quantity_arg(&amount)])
            .await
    }

    /// Unlimited approval
    pub async fn approve_max(&self, spender: Address) -> MbrsxResult<Transaction> {
        self.approve(spender, MAX_APPROVAL).await
    }

    pub async fn transfer(&self, to: Address, amount: U256) -> MbrsxResult<Transaction> {
        self.client
            .send("transfer(address,uint256)", vec![address_arg(&to), quantity_arg(&amount)])
            .await
    }
}
