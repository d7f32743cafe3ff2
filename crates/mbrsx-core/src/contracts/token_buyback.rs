use std::sync::Arc;

use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, U256};

use super::ContractClient;
use crate::abi::token_buyback_abi;
use crate::codec::{address_arg, bool_arg, bytes_arg, first_selector, quantity_arg};
use crate::constants::TOKEN_BUYBACK;
use crate::errors::MbrsxResult;
use crate::provider::{ConnectivityProvider, SendOptions};
use crate::transaction::Transaction;
use crate::Context;

/// Client of the buyback exchange, which swaps MBRS for MRX held in its vault
#[derive(Clone, Debug)]
pub struct TokenBuyback {
    client: ContractClient,
}

impl TokenBuyback {
    /// Bind to `address` using the bundled interface descriptor
    pub fn new(
        address: Address,
        provider: Arc<dyn ConnectivityProvider>,
        ctx: Context,
    ) -> MbrsxResult<Self> {
        Ok(Self::with_abi(address, provider, token_buyback_abi()?, ctx))
    }

    pub fn with_abi(
        address: Address,
        provider: Arc<dyn ConnectivityProvider>,
        abi: Arc<JsonAbi>,
        ctx: Context,
    ) -> Self {
        Self { client: ContractClient::new(TOKEN_BUYBACK, address, provider, abi, ctx) }
    }

    pub fn address(&self) -> Address {
        self.client.address()
    }

    pub fn client(&self) -> &ContractClient {
        &self.client
    }

    /// Whether the AutoGovernor is enrolled and the vault holds more than 1 MRX
    pub async fn active(&self) -> MbrsxResult<bool> {
        self.client.read_bool("active()", vec![]).await
    }

    pub async fn auto_governor(&self) -> MbrsxResult<Address> {
        self.client.read_address("autoGovernor()", vec![]).await
    }

    /// Address of the PYRO core contract
    pub async fn core(&self) -> MbrsxResult<Address> {
        self.client.read_address("core()", vec![]).await
    }

    /// Address of the DGP governance contract
    pub async fn governance(&self) -> MbrsxResult<Address> {
        self.client.read_address("governance()", vec![]).await
    }

    /// Whether exchanging is restricted to PYRO holders
    pub async fn hodlers(&self) -> MbrsxResult<bool> {
        self.client.read_bool("hodlers()", vec![]).await
    }

    /// MBRS paid per MRX, also the smallest accepted exchange
    pub async fn rate(&self) -> MbrsxResult<U256> {
        self.client.read_uint("rate()", vec![]).await
    }

    /// Address of the MBRS token
    pub async fn token(&self) -> MbrsxResult<Address> {
        self.client.read_address("token()", vec![]).await
    }

    pub async fn owner(&self) -> MbrsxResult<Address> {
        self.client.read_address("owner()", vec![]).await
    }

    pub async fn paused(&self) -> MbrsxResult<bool> {
        self.client.read_bool("paused()", vec![]).await
    }

    /// MRX held by the exchange, in satoshis
    pub async fn balance(&self) -> MbrsxResult<U256> {
        self.client.provider().get_balance(self.address()).await
    }

    pub async fn deposit(&self) -> MbrsxResult<Transaction> {
        self.client.send("deposit()", vec![]).await
    }

    /// Deposit `value` satoshis of MRX into the vault
    pub async fn deposit_with_value(&self, value: U256) -> MbrsxResult<Transaction> {
        self.client.send_with_options("deposit()", vec![], SendOptions::with_value(value)).await
    }

    /// Enroll the AutoGovernor into DGP governance
    pub async fn enroll(&self) -> MbrsxResult<Transaction> {
        self.client.send("enroll()", vec![]).await
    }

    /// Exchange `amount` MBRS for MRX
    pub async fn exchange_token_for_metrix(&self, amount: U256) -> MbrsxResult<Transaction> {
        self.client.send("exchangeTokenForMetrix(uint256)", vec![quantity_arg(&amount)]).await
    }

    /// Execute an arbitrary call as this contract. `data` may omit its `0x` marker.
    pub async fn execute_transaction(
        &self,
        to: Address,
        value: U256,
        data: &str,
    ) -> MbrsxResult<Transaction> {
        self.client
            .send(
                "executeTransaction(address,uint256,bytes)",
                vec![address_arg(&to), quantity_arg(&value), bytes_arg(data)],
            )
            .await
    }

    /// Point the AutoGovernor at a new governance contract
    pub async fn migrate(&self, governance: Address) -> MbrsxResult<Transaction> {
        self.client.send("migrate(address)", vec![address_arg(&governance)]).await
    }

    /// Receiver hook for PYRO transfers. Yields `00000000` when the node
    /// returns nothing.
    pub async fn on_erc721_received(
        &self,
        operator: Address,
        from: Address,
        token_id: U256,
        data: &str,
    ) -> MbrsxResult<String> {
        self.client
            .call(
                "onERC721Received(address,address,uint256,bytes)",
                vec![
                    address_arg(&operator),
                    address_arg(&from),
                    quantity_arg(&token_id),
                    bytes_arg(data),
                ],
            )
            .await
            .map(first_selector)
    }

    pub async fn pause(&self) -> MbrsxResult<Transaction> {
        self.client.send("pause()", vec![]).await
    }

    pub async fn unpause(&self) -> MbrsxResult<Transaction> {
        self.client.send("unpause()", vec![]).await
    }

    pub async fn ping(&self) -> MbrsxResult<Transaction> {
        self.client.send("ping()", vec![]).await
    }

    pub async fn set_hodlers(&self, hodlers_only: bool) -> MbrsxResult<Transaction> {
        self.client.send("setHodlers(bool)", vec![bool_arg(hodlers_only)]).await
    }

    pub async fn renounce_ownership(&self) -> MbrsxResult<Transaction> {
        self.client.send("renounceOwnership()", vec![]).await
    }

    pub async fn transfer_ownership(&self, new_owner: Address) -> MbrsxResult<Transaction> {
        self.client.send("transferOwnership(address)", vec![address_arg(&new_owner)]).await
    }

    /// Leave DGP governance, forcibly if `force` is set
    pub async fn unenroll(&self, force: bool) -> MbrsxResult<Transaction> {
        self.client.send("unenroll(bool)", vec![bool_arg(force)]).await
    }
}
