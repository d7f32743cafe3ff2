use alloy::primitives::U256;

pub const NAMESPACE: &str = "mbrsx";

/// Selector returned by the receiver callback when the node yields nothing
pub const ZERO_SELECTOR: &str = "00000000";

/// Value reported by Metrix receipts for a call that did not revert
pub const RECEIPT_NOT_EXCEPTED: &str = "None";

/// Native coin and MBRS token both use 8 decimals
pub const METRIX_DECIMALS: u8 = 8;

pub const MAINNET_EXPLORER_URL: &str = "https://explorer.metrixcoin.com";
pub const TESTNET_EXPLORER_URL: &str = "https://testnet-explorer.metrixcoin.com";

pub const LATEST_VERSION_ALIAS: &str = "latest";

// Send defaults, in gas units and satoshis per gas
pub const DEFAULT_GAS_LIMIT: u64 = 250_000;
pub const DEFAULT_GAS_PRICE: u64 = 5_000;

// Contract roles as named in deployment tables
pub const TOKEN_BUYBACK: &str = "TokenBuyback";
pub const AUTO_GOVERNOR: &str = "AutoGovernor";
pub const MRC20: &str = "MRC20";
pub const MRC721: &str = "MRC721";

/// Allowance granted by an unlimited approval
pub const MAX_APPROVAL: U256 = U256::MAX;
