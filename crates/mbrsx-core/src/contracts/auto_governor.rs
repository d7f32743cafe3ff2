use std::sync::Arc;

use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, U256};

use super::ContractClient;
use crate::abi::auto_governor_abi;
use crate::codec::{address_arg, bool_arg, bytes_arg, quantity_arg};
use crate::constants::AUTO_GOVERNOR;
use crate::errors::MbrsxResult;
use crate::provider::ConnectivityProvider;
use crate::transaction::Transaction;
use crate::Context;

/// Client of the contract that keeps the exchange enrolled in DGP governance
#[derive(Clone, Debug)]
pub struct AutoGovernor {
    client: ContractClient,
}

impl AutoGovernor {
    pub fn new(
        address: Address,
        provider: Arc<dyn ConnectivityProvider>,
        ctx: Context,
    ) -> MbrsxResult<Self> {
        Ok(Self::with_abi(address, provider, auto_governor_abi()?, ctx))
    }

    pub fn with_abi(
        address: Address,
        provider: Arc<dyn ConnectivityProvider>,
        abi: Arc<JsonAbi>,
        ctx: Context,
    ) -> Self {
        Self { client: ContractClient::new(AUTO_GOVERNOR, address, provider, abi, ctx) }
    }

    pub fn address(&self) -> Address {
        self.client.address()
    }

    pub fn client(&self) -> &ContractClient {
        &self.client
    }

    pub async fn governance(&self) -> MbrsxResult<Address> {
        self.client.read_address("governance()", vec![]).await
    }

    pub async fn owner(&self) -> MbrsxResult<Address> {
        self.client.read_address("owner()", vec![]).await
    }

    pub async fn enroll(&self) -> MbrsxResult<Transaction> {
        self.client.send("enroll()", vec![]).await
    }

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

    pub async fn migrate(&self, governance: Address) -> MbrsxResult<Transaction> {
        self.client.send("migrate(address)", vec![address_arg(&governance)]).await
    }

    /// Keep-alive used by governance to confirm the enrollment is still held
    pub async fn ping(&self) -> MbrsxResult<Transaction> {
        self.client.send("ping()", vec![]).await
    }

    pub async fn renounce_ownership(&self) -> MbrsxResult<Transaction> {
        self.client.send("renounceOwnership()", vec![]).await
    }

    pub async fn transfer_ownership(&self, new_owner: Address) -> MbrsxResult<Transaction> {
        self.client.send("transferOwnership(address)", vec![address_arg(&new_owner)]).await
    }

    pub async fn unenroll(&self, force: bool) -> MbrsxResult<Transaction> {
        self.client.send("unenroll(bool)", vec![bool_arg(force)]).await
    }
}
