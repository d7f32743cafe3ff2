use std::sync::Arc;

use alloy::hex;
use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, U256};
use serde_json::Value;

use crate::codec::{first_address, first_bool, first_string, first_uint, CallOutput};
use crate::errors::{MbrsxErrorExt, MbrsxResult};
use crate::network::Network;
use crate::provider::{ConnectivityProvider, SendOptions};
use crate::transaction::{ReceiptFetcher, Transaction};
use crate::Context;

mod auto_governor;
mod mrc20;
mod mrc721;
mod token_buyback;

pub use auto_governor::AutoGovernor;
pub use mrc20::Mrc20;
pub use mrc721::Mrc721;
pub use token_buyback::TokenBuyback;

/// A contract address bound to a provider and an interface descriptor.
///
/// Typed wrappers compose this client and expose one method per on-chain
/// function. Instances share nothing mutable and can be cloned freely.
#[derive(Clone)]
pub struct ContractClient {
    name: String,
    address: Address,
    provider: Arc<dyn ConnectivityProvider>,
    abi: Arc<JsonAbi>,
    ctx: Context,
}

impl ContractClient {
    pub fn new(
        name: impl Into<String>,
        address: Address,
        provider: Arc<dyn ConnectivityProvider>,
        abi: Arc<JsonAbi>,
        ctx: Context,
    ) -> Self {
        Self { name: name.into(), address, provider, abi, ctx }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Address as un-prefixed hex, the way Metrix nodes expect it
    pub fn address_hex(&self) -> String {
        hex::encode(self.address)
    }

    pub fn abi(&self) -> &Arc<JsonAbi> {
        &self.abi
    }

    pub fn provider(&self) -> &Arc<dyn ConnectivityProvider> {
        &self.provider
    }

    pub fn network(&self) -> Network {
        self.provider.network()
    }

    /// Read-only call. `None` when the node returned nothing decodable.
    pub async fn call(&self, signature: &str, args: Vec<Value>) -> MbrsxResult<CallOutput> {
        self.ctx.try_log(|logger| {
            debug!(logger, "call {} on {} {}", signature, self.name, self.address_hex())
        });
        self.provider
            .call(self.address, &self.abi, signature, args)
            .await
            .with_contract_info(&self.name, self.address_hex(), Some(signature.to_string()))
    }

    pub async fn send(&self, signature: &str, args: Vec<Value>) -> MbrsxResult<Transaction> {
        self.send_with_options(signature, args, SendOptions::default()).await
    }

    /// State-changing call. The returned transaction carries a receipt fetcher
    /// that is not invoked here.
    pub async fn send_with_options(
        &self,
        signature: &str,
        args: Vec<Value>,
        options: SendOptions,
    ) -> MbrsxResult<Transaction> {
        self.ctx.try_log(|logger| {
            debug!(
                logger,
                "send {} to {} {} (value: {})",
                signature,
                self.name,
                self.address_hex(),
                options.value
            )
        });
        let sent = self
            .provider
            .send(self.address, &self.abi, signature, args, options)
            .await
            .with_contract_info(&self.name, self.address_hex(), Some(signature.to_string()))?;

        let transaction = Transaction::new(ReceiptFetcher::new(
            self.provider.clone(),
            self.abi.clone(),
            self.address,
            sent,
        ));
        if transaction.is_zero_txid() {
            self.ctx.try_log(|logger| {
                warn!(logger, "{} returned a zero transaction id for {}", self.name, signature)
            });
        } else {
            self.ctx.try_log(|logger| {
                info!(
                    logger,
                    "{} submitted: {}",
                    signature,
                    self.network().explorer_tx_url(&transaction.txid_hex())
                )
            });
        }
        Ok(transaction)
    }

    pub(crate) async fn read_address(&self, signature: &str, args: Vec<Value>) -> MbrsxResult<Address> {
        self.call(signature, args).await.map(first_address)
    }

    pub(crate) async fn read_bool(&self, signature: &str, args: Vec<Value>) -> MbrsxResult<bool> {
        self.call(signature, args).await.map(first_bool)
    }

    pub(crate) async fn read_uint(&self, signature: &str, args: Vec<Value>) -> MbrsxResult<U256> {
        self.call(signature, args).await.map(first_uint)
    }

    pub(crate) async fn read_string(&self, signature: &str, args: Vec<Value>) -> MbrsxResult<String> {
        self.call(signature, args).await.map(first_string)
    }
}

impl std::fmt::Debug for ContractClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractClient")
            .field("name", &self.name)
            .field("address", &self.address_hex())
            .field("network", &self.network())
            .finish()
    }
}
