use std::future::Future;
use std::pin::Pin;

use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, B256, U256};
use serde_json::Value;

use crate::codec::CallOutput;
use crate::errors::MbrsxResult;
use crate::network::Network;
use crate::transaction::TransactionReceipt;

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = MbrsxResult<T>> + Send + 'a>>;

/// Identifier handed back by a node once a contract transaction is submitted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SentTransaction {
    pub txid: B256,
    pub sender: Option<String>,
    pub hash160: Option<String>,
}

impl SentTransaction {
    pub fn new(txid: B256) -> Self {
        Self { txid, sender: None, hash160: None }
    }
}

/// Amount and gas settings of a state-changing call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendOptions {
    /// Native coin attached to the call, in satoshis
    pub value: U256,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u64>,
}

impl SendOptions {
    pub fn with_value(value: U256) -> Self {
        Self { value, ..Default::default() }
    }
}

/// RPC transport to the ledger.
///
/// Arguments arrive already marshalled: quantities as minimal `0x` hex strings,
/// addresses as un-prefixed hex, byte strings with a single `0x` marker. The
/// interface descriptor is passed through untouched so implementations can
/// encode calldata and decode outputs and logs.
///
/// Timeouts and retries, if any, belong to implementations.
pub trait ConnectivityProvider: Send + Sync {
    fn network(&self) -> Network;

    fn call<'a>(
        &'a self,
        address: Address,
        abi: &'a JsonAbi,
        signature: &'a str,
        args: Vec<Value>,
    ) -> ProviderFuture<'a, CallOutput>;

    fn send<'a>(
        &'a self,
        address: Address,
        abi: &'a JsonAbi,
        signature: &'a str,
        args: Vec<Value>,
        options: SendOptions,
    ) -> ProviderFuture<'a, SentTransaction>;

    fn get_tx_receipts<'a>(
        &'a self,
        tx: &'a SentTransaction,
        abi: &'a JsonAbi,
        address: Address,
    ) -> ProviderFuture<'a, Vec<TransactionReceipt>>;

    /// Native coin balance of an address, in satoshis
    fn get_balance<'a>(&'a self, address: Address) -> ProviderFuture<'a, U256>;
}
