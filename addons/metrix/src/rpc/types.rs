use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'a str,
    pub id: &'a str,
    pub method: &'a str,
    pub params: &'a [Value],
}

/// Response envelope. Nodes answer errors with a non-2xx status and this body.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// `callcontract` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContractResult {
    pub address: String,
    pub execution_result: ExecutionResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionResult {
    pub gas_used: u64,
    pub excepted: String,
    pub excepted_message: String,
    pub output: String,
}

/// `sendtocontract` result
#[derive(Debug, Clone, Deserialize)]
pub struct SendToContractResult {
    pub txid: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub hash160: Option<String>,
}

/// `getaccountinfo` result, balance in satoshis
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub address: String,
    pub balance: u64,
}
