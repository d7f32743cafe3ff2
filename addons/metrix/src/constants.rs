pub const JSON_RPC_VERSION: &str = "1.0";
pub const JSON_RPC_ID: &str = "mbrsx";

// Default node ports
pub const MAINNET_RPC_PORT: u16 = 33831;
pub const TESTNET_RPC_PORT: u16 = 33841;

pub const MAX_READ_RETRIES: u64 = 3;
pub const RETRY_BASE_DELAY_MS: u64 = 100;

pub const CALL_CONTRACT: &str = "callcontract";
pub const SEND_TO_CONTRACT: &str = "sendtocontract";
pub const GET_TRANSACTION_RECEIPT: &str = "gettransactionreceipt";
pub const GET_ACCOUNT_INFO: &str = "getaccountinfo";
