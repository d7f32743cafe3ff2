use std::fmt;
use std::sync::Arc;

use alloy::dyn_abi::DynSolValue;
use alloy::hex;
use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, B256};

use crate::constants::RECEIPT_NOT_EXCEPTED;
use crate::errors::MbrsxResult;
use crate::provider::{ConnectivityProvider, SentTransaction};

/// A submitted transaction and a deferred way to fetch its receipts
#[derive(Clone)]
pub struct Transaction {
    pub txid: B256,
    receipts: ReceiptFetcher,
}

impl Transaction {
    pub fn new(receipts: ReceiptFetcher) -> Self {
        Self { txid: receipts.tx.txid, receipts }
    }

    /// 64 lowercase hex characters, no `0x` marker
    pub fn txid_hex(&self) -> String {
        hex::encode(self.txid)
    }

    /// Nodes report a failed submission with an all-zero id
    pub fn is_zero_txid(&self) -> bool {
        self.txid == B256::ZERO
    }

    pub fn sent(&self) -> &SentTransaction {
        &self.receipts.tx
    }

    pub fn receipt_fetcher(&self) -> &ReceiptFetcher {
        &self.receipts
    }

    /// Query the provider for receipts. Every invocation issues a new request.
    pub async fn get_receipts(&self) -> MbrsxResult<Vec<TransactionReceipt>> {
        self.receipts.fetch().await
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("txid", &self.txid_hex())
            .field("address", &self.receipts.address)
            .finish()
    }
}

/// Everything needed to ask the provider for receipts later on
#[derive(Clone)]
pub struct ReceiptFetcher {
    provider: Arc<dyn ConnectivityProvider>,
    abi: Arc<JsonAbi>,
    address: Address,
    tx: SentTransaction,
}

impl ReceiptFetcher {
    pub fn new(
        provider: Arc<dyn ConnectivityProvider>,
        abi: Arc<JsonAbi>,
        address: Address,
        tx: SentTransaction,
    ) -> Self {
        Self { provider, abi, address, tx }
    }

    pub async fn fetch(&self) -> MbrsxResult<Vec<TransactionReceipt>> {
        self.provider.get_tx_receipts(&self.tx, &self.abi, self.address).await
    }
}

/// Receipt record as returned by `gettransactionreceipt`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionReceipt {
    pub block_hash: String,
    pub block_number: u64,
    pub transaction_hash: String,
    pub transaction_index: u64,
    pub output_index: u64,
    pub from: String,
    pub to: String,
    pub cumulative_gas_used: u64,
    pub gas_used: u64,
    pub contract_address: String,
    pub excepted: String,
    pub excepted_message: String,
    pub log: Vec<ReceiptLog>,
    #[serde(skip)]
    pub events: Vec<ContractEvent>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        self.excepted == RECEIPT_NOT_EXCEPTED
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptLog {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
}

/// An event log decoded against the contract's interface descriptor
#[derive(Clone, Debug, PartialEq)]
pub struct ContractEvent {
    pub name: String,
    pub address: Address,
    pub params: Vec<(String, DynSolValue)>,
}

impl ContractEvent {
    pub fn param(&self, name: &str) -> Option<&DynSolValue> {
        self.params.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }
}
